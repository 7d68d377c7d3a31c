//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the PreCare domain.

mod errors;
mod ids;
mod score;

pub use errors::ValidationError;
pub use ids::UserId;
pub use score::Score;
