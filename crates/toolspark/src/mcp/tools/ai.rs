use serde::Deserialize;
use toolspark_core::ai::{GenerationKind, Genre, Language, Level, Tone};
use toolspark_core::catalog::ToolKind;

use super::{parse_args, JsonRpcError};
use crate::tools::ToolRequest;

pub fn input_schema(kind: ToolKind) -> serde_json::Value {
    let (subject, subject_description, option, option_description, values) = match kind {
        ToolKind::AiCaption => (
            "topic",
            "What the social media post is about",
            "tone",
            "Caption tone (default: Fun)",
            Tone::ALL.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        ),
        ToolKind::AiStory => (
            "premise",
            "Premise of the story",
            "genre",
            "Story genre (default: Sci-Fi)",
            Genre::ALL.iter().map(|g| g.to_string()).collect(),
        ),
        _ => (
            "topic",
            "Topic to create study questions about",
            "level",
            "Student level (default: Beginner)",
            Level::ALL.iter().map(|l| l.to_string()).collect(),
        ),
    };

    serde_json::json!({
        "type": "object",
        "properties": {
            subject: {
                "type": "string",
                "description": subject_description
            },
            option: {
                "type": "string",
                "enum": values,
                "description": option_description
            },
            "language": {
                "type": "string",
                "enum": Language::ALL.iter().map(|l| l.to_string()).collect::<Vec<_>>(),
                "description": "Language of the answer (default: English)"
            }
        },
        "required": [subject]
    })
}

pub fn request(
    kind: ToolKind,
    arguments: Option<serde_json::Value>,
) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct AiArgs {
        #[serde(alias = "premise")]
        topic: Option<String>,
        tone: Option<String>,
        genre: Option<String>,
        level: Option<String>,
        language: Option<String>,
    }

    let args: AiArgs = parse_args(arguments)?;

    fn option<T: std::str::FromStr<Err = String> + Default>(
        value: Option<String>,
    ) -> Result<T, JsonRpcError> {
        value
            .map(|v| v.parse::<T>().map_err(JsonRpcError::invalid_params))
            .transpose()
            .map(Option::unwrap_or_default)
    }

    let topic = args.topic.unwrap_or_default();
    let generation = match kind {
        ToolKind::AiCaption => GenerationKind::Caption {
            topic,
            tone: option(args.tone)?,
        },
        ToolKind::AiStory => GenerationKind::Story {
            premise: topic,
            genre: option(args.genre)?,
        },
        _ => GenerationKind::Study {
            topic,
            level: option(args.level)?,
        },
    };

    Ok(ToolRequest::Ai {
        kind: generation,
        language: option(args.language)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_arguments() {
        let request = request(
            ToolKind::AiStory,
            Some(serde_json::json!({"premise": "a lost robot", "genre": "Horror", "language": "Bangla"})),
        )
        .unwrap();

        match request {
            ToolRequest::Ai { kind, language } => {
                assert_eq!(
                    kind,
                    GenerationKind::Story {
                        premise: "a lost robot".to_string(),
                        genre: Genre::Horror
                    }
                );
                assert_eq!(language, Language::Bangla);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_defaults_apply() {
        match request(ToolKind::AiCaption, Some(serde_json::json!({"topic": "coffee"}))).unwrap() {
            ToolRequest::Ai { kind, language } => {
                assert_eq!(
                    kind,
                    GenerationKind::Caption {
                        topic: "coffee".to_string(),
                        tone: Tone::Fun
                    }
                );
                assert_eq!(language, Language::English);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_unknown_level_is_invalid_params() {
        let err = request(
            ToolKind::AiStudy,
            Some(serde_json::json!({"topic": "cells", "level": "expert"})),
        )
        .unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_schema_requires_subject() {
        let schema = input_schema(ToolKind::AiStory);
        assert_eq!(schema["required"][0], "premise");
        assert_eq!(schema["properties"]["genre"]["enum"][0], "Sci-Fi");
    }
}
