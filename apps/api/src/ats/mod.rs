// ATS keyword matching and scoring.
// Pure, synchronous core; handlers.rs is the only module that touches axum.

pub mod catalog;
pub mod handlers;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod profiles;
pub mod scorer;
pub mod validity;
