pub mod generation;
pub mod preferences;
pub mod quiz;

pub use generation::{GenerationRequest, Topic};
pub use preferences::{LearningPreferences, LearningStyle, Subject};
pub use quiz::{OptionLetter, QuizRecord};
