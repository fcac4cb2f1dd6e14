pub mod score;

pub use score::{Suggestion, SuggestionEngine};
