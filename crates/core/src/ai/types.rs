use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caption tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Fun,
    Professional,
    Sarcastic,
    Inspirational,
}

/// Story genre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    #[serde(rename = "Sci-Fi", alias = "SciFi")]
    SciFi,
    Fantasy,
    Horror,
    Comedy,
}

/// Student level for study questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Output language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Bangla,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Fun => "Fun",
            Tone::Professional => "Professional",
            Tone::Sarcastic => "Sarcastic",
            Tone::Inspirational => "Inspirational",
        })
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Genre::SciFi => "Sci-Fi",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Comedy => "Comedy",
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::Bangla => "Bangla",
        })
    }
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Fun, Tone::Professional, Tone::Sarcastic, Tone::Inspirational];
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::SciFi, Genre::Fantasy, Genre::Horror, Genre::Comedy];
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Bangla];
}

/// Matches `input` against the display labels of `options`, ignoring case,
/// spaces, dashes and underscores.
fn parse_label<T: fmt::Display + Copy>(input: &str, options: &[T], what: &str) -> Result<T, String> {
    fn normalize(s: &str) -> String {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect()
    }

    let wanted = normalize(input);
    options
        .iter()
        .copied()
        .find(|option| normalize(&option.to_string()) == wanted)
        .ok_or_else(|| {
            let valid = options
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Unknown {}: {}. Valid values: {}", what, input, valid)
        })
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Tone::ALL, "tone")
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Genre::ALL, "genre")
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Level::ALL, "level")
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Language::ALL, "language")
    }
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationKind {
    Caption { topic: String, tone: Tone },
    Story { premise: String, genre: Genre },
    Study { topic: String, level: Level },
}

/// A request for AI text generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiInputError {
    #[error("Please enter a topic.")]
    EmptyTopic,
}

impl GenerationRequest {
    pub fn new(kind: GenerationKind, language: Language) -> Result<Self, AiInputError> {
        let subject = match &kind {
            GenerationKind::Caption { topic, .. } => topic,
            GenerationKind::Story { premise, .. } => premise,
            GenerationKind::Study { topic, .. } => topic,
        };
        if subject.trim().is_empty() {
            return Err(AiInputError::EmptyTopic);
        }
        Ok(Self { kind, language })
    }

    /// Text shown when the model answers with nothing.
    pub fn empty_response_message(&self) -> &'static str {
        match self.kind {
            GenerationKind::Caption { .. } => "No caption generated.",
            GenerationKind::Story { .. } => "No story generated.",
            GenerationKind::Study { .. } => "No questions generated.",
        }
    }
}
