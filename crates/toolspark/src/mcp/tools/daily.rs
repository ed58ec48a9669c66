use serde::Deserialize;
use std::path::PathBuf;
use toolspark_core::catalog::ToolKind;
use toolspark_core::daily::{split_items, DEFAULT_PASSWORD_LENGTH};
use toolspark_core::qr::{parse_hex_color, ErrorCorrection, QrOptions};

use super::{parse_args, JsonRpcError};
use crate::tools::ToolRequest;

pub fn input_schema(kind: ToolKind) -> serde_json::Value {
    match kind {
        ToolKind::StylishText => serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to render in ten decorative Unicode styles"
                }
            },
            "required": ["text"]
        }),
        ToolKind::PasswordGenerator => serde_json::json!({
            "type": "object",
            "properties": {
                "length": {
                    "type": "number",
                    "description": "Number of characters, 4 to 64 (default: 12)"
                }
            }
        }),
        ToolKind::QrGenerator => serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text or URL to encode"
                },
                "level": {
                    "type": "string",
                    "enum": ["L", "M", "Q", "H"],
                    "description": "Error correction level (default: M)"
                },
                "margin": {
                    "type": "number",
                    "description": "Quiet zone in modules, 0 to 64 (default: 4)"
                },
                "width": {
                    "type": "number",
                    "description": "Image width in pixels (default: 256)"
                },
                "dark": {
                    "type": "string",
                    "description": "Module color as #RRGGBB or #RRGGBBAA (default: #000000)"
                },
                "light": {
                    "type": "string",
                    "description": "Background color as #RRGGBB or #RRGGBBAA (default: #FFFFFF)"
                },
                "logo": {
                    "type": "string",
                    "description": "Path to an image placed in the middle of the code"
                }
            },
            "required": ["text"]
        }),
        _ => serde_json::json!({
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Entries to pick from. Leave empty to pick a random name."
                }
            }
        }),
    }
}

pub fn stylish_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct StylishArgs {
        text: String,
    }

    let args: StylishArgs = parse_args(arguments)?;
    Ok(ToolRequest::StylishText { text: args.text })
}

pub fn password_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct PasswordArgs {
        length: Option<usize>,
    }

    let args: PasswordArgs = parse_args(arguments)?;
    Ok(ToolRequest::Password {
        length: args.length.unwrap_or(DEFAULT_PASSWORD_LENGTH),
    })
}

pub fn qr_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct QrArgs {
        text: String,
        level: Option<String>,
        margin: Option<u32>,
        width: Option<u32>,
        dark: Option<String>,
        light: Option<String>,
        logo: Option<PathBuf>,
    }

    let args: QrArgs = parse_args(arguments)?;
    let invalid = |e: toolspark_core::qr::QrOptionsError| JsonRpcError::invalid_params(e.to_string());

    let mut options = QrOptions::default();
    if let Some(level) = args.level {
        options.error_correction = level.parse::<ErrorCorrection>().map_err(invalid)?;
    }
    if let Some(margin) = args.margin {
        options.margin = margin;
    }
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(dark) = args.dark {
        options.dark = parse_hex_color(&dark).map_err(invalid)?;
    }
    if let Some(light) = args.light {
        options.light = parse_hex_color(&light).map_err(invalid)?;
    }
    options.validate().map_err(invalid)?;

    Ok(ToolRequest::Qr {
        text: args.text,
        options,
        logo: args.logo,
    })
}

pub fn pick_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct PickArgs {
        #[serde(default)]
        items: Vec<String>,
    }

    let args: PickArgs = parse_args(arguments)?;
    Ok(ToolRequest::RandomPick {
        items: args.items.iter().flat_map(|item| split_items(item)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_arguments() {
        let request = qr_request(Some(serde_json::json!({
            "text": "https://example.com",
            "level": "H",
            "dark": "#4F46E5",
            "width": 512
        })))
        .unwrap();

        match request {
            ToolRequest::Qr { text, options, logo } => {
                assert_eq!(text, "https://example.com");
                assert_eq!(options.error_correction, ErrorCorrection::H);
                assert_eq!(options.dark, [0x4F, 0x46, 0xE5, 0xFF]);
                assert_eq!(options.width, 512);
                assert_eq!(options.margin, 4);
                assert!(logo.is_none());
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_qr_bad_color_is_invalid_params() {
        let err = qr_request(Some(serde_json::json!({"text": "x", "light": "blue"}))).unwrap_err();
        assert_eq!(err.code, -32602);
        assert!(err.message.contains("Invalid color: blue"));
    }

    #[test]
    fn test_qr_oversized_margin_is_invalid_params() {
        let err = qr_request(Some(serde_json::json!({"text": "x", "margin": 1_000_000}))).unwrap_err();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Margin must be between 0 and 64 modules");

        assert!(qr_request(Some(serde_json::json!({"text": "x", "margin": 64}))).is_ok());
    }

    #[test]
    fn test_password_default_length() {
        assert!(matches!(
            password_request(None),
            Ok(ToolRequest::Password { length: 12 })
        ));
    }

    #[test]
    fn test_pick_without_items() {
        match pick_request(None).unwrap() {
            ToolRequest::RandomPick { items } => assert!(items.is_empty()),
            other => panic!("unexpected request {:?}", other),
        }
    }
}
