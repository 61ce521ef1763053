//! Cosine-similarity ranking of stored meeting embeddings.
//!
//! The search is a deliberate O(n) linear scan over every stored candidate:
//! at the data scale of a personal or team meeting archive that is cheap,
//! keeps the subsystem free of index state, and an ANN backend could later
//! be swapped in behind the same `search` signature.

use super::codec;
use super::errors::VectorError;

/// One search hit: a stored meeting id with its similarity to the query.
///
/// Created and consumed within a single search call; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub id: String,
    pub score: f32,
}

/// Cosine similarity between two embeddings, in `[-1, 1]`.
///
/// Fails with [`VectorError::DimensionMismatch`] when the lengths differ.
/// If either vector has zero norm (empty or all-zero) the result is `0.0`:
/// a zero vector carries no direction and is treated as maximally dissimilar
/// to everything, including another zero vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Rank encoded candidates against a query embedding.
///
/// Each candidate blob is decoded and scored; candidates survive only with a
/// similarity strictly above `threshold`, so a score sitting exactly at the
/// boundary is excluded. Survivors are sorted by descending score with ties
/// keeping the supplier's original order, then capped at `limit`.
///
/// A malformed blob or a dimension mismatch aborts the whole call: both
/// indicate a corrupted index, and a partially-scored result would hide
/// that. An empty candidate sequence or `limit == 0` yield an empty `Ok`
/// result, which is distinct from failure.
pub fn search<I>(
    query: &[f32],
    candidates: I,
    threshold: f32,
    limit: usize,
) -> Result<Vec<ScoredCandidate>, VectorError>
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut matches = Vec::new();

    for (id, blob) in candidates {
        let embedding = codec::decode(&blob)?;
        let score = cosine_similarity(query, &embedding)?;

        if score > threshold {
            matches.push(ScoredCandidate { id, score });
        }
    }

    // Stable sort: equal scores keep supplier order. total_cmp keeps the
    // ordering deterministic even if pathological stored data yields NaN.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);

    Ok(matches)
}
