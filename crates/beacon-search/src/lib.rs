//! Generative search gateway for Beacon.
//!
//! Takes one query, makes one web-grounded generation round trip, strips
//! known boilerplate preambles from the answer, validates the returned
//! citations, and hands back an immutable [`SearchResult`]. The backend is
//! behind the [`GenerativeBackend`] trait; [`GeminiBackend`] is the shipped
//! implementation.

pub mod backend;
pub mod boilerplate;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod types;

pub use backend::{BackendAnswer, CitationCandidate, GenerativeBackend, WebCitation};
pub use boilerplate::BoilerplateFilter;
pub use error::SearchError;
pub use gateway::SearchGateway;
pub use gemini::GeminiBackend;
pub use types::{SearchResult, Source};
