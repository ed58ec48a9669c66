pub mod prompt;
pub mod types;

pub use prompt::{build_prompt, clean_response};
pub use types::{AiInputError, GenerationKind, GenerationRequest, Genre, Language, Level, Tone};
