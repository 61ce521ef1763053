//! Embedding vector storage codec and cosine-similarity search.
//!
//! Meetings are embedded once at save time and persisted as compact binary
//! blobs; every search decodes the stored candidates and ranks them against
//! the query vector. Both halves are pure functions with no internal state,
//! so they can be called from any number of tasks without coordination.

pub mod codec;
pub mod errors;
pub mod similarity;

pub use codec::{decode, encode};
pub use errors::VectorError;
pub use similarity::{cosine_similarity, search, ScoredCandidate};
