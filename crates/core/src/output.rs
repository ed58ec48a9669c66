//! The value a tool run produces.

use base64::prelude::*;
use serde::{Serialize, Serializer};

use crate::glyph::StylishResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolOutput {
    Text {
        text: String,
    },
    Styles {
        styles: Vec<StylishResult>,
    },
    Image {
        mime_type: String,
        #[serde(serialize_with = "serialize_base64")]
        data: Vec<u8>,
    },
}

fn serialize_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64_STANDARD.encode(data))
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        ToolOutput::Text { text: text.into() }
    }

    pub fn png(data: Vec<u8>) -> Self {
        ToolOutput::Image {
            mime_type: "image/png".to_string(),
            data,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text { text } => Some(text),
            _ => None,
        }
    }

    /// `data:` URL for image outputs.
    pub fn data_url(&self) -> Option<String> {
        match self {
            ToolOutput::Image { mime_type, data } => Some(format!(
                "data:{};base64,{}",
                mime_type,
                BASE64_STANDARD.encode(data)
            )),
            _ => None,
        }
    }

    /// Plain-text rendering used when the output has to fit in one string.
    pub fn to_plain_text(&self) -> String {
        match self {
            ToolOutput::Text { text } => text.clone(),
            ToolOutput::Styles { styles } => styles
                .iter()
                .map(|s| format!("{}: {}", s.name, s.content))
                .collect::<Vec<_>>()
                .join("\n"),
            ToolOutput::Image { .. } => self.data_url().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_serializes_with_tag() {
        let json = serde_json::to_value(ToolOutput::text("GPA: 3.50")).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "GPA: 3.50");
    }

    #[test]
    fn test_image_serializes_as_base64() {
        let output = ToolOutput::png(vec![0x89, 0x50, 0x4E, 0x47]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["mime_type"], "image/png");
        assert_eq!(json["data"], "iVBORw==");
        assert_eq!(
            output.data_url().as_deref(),
            Some("data:image/png;base64,iVBORw==")
        );
    }

    #[test]
    fn test_styles_plain_text() {
        let output = ToolOutput::Styles {
            styles: vec![
                StylishResult {
                    name: "Wide".to_string(),
                    content: "ａ".to_string(),
                },
                StylishResult {
                    name: "Bubbles".to_string(),
                    content: "ⓐ".to_string(),
                },
            ],
        };
        assert_eq!(output.to_plain_text(), "Wide: ａ\nBubbles: ⓐ");
        assert!(output.as_text().is_none());
    }
}
