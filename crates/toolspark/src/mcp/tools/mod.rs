mod ai;
mod calc;
mod daily;

use base64::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use toolspark_core::catalog::ToolKind;
use toolspark_core::output::ToolOutput;

use crate::pipeline::Completion;
use crate::tools::ToolRequest;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "image")]
    Image {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "toolspark".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

fn tool(kind: ToolKind, input_schema: serde_json::Value) -> Tool {
    Tool {
        name: kind.id().to_string(),
        description: kind.description().to_string(),
        input_schema,
    }
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools: Vec<Tool> = ToolKind::ALL
        .into_iter()
        .map(|kind| tool(kind, input_schema(kind)))
        .collect();

    serde_json::to_value(ToolsList { tools })
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

fn input_schema(kind: ToolKind) -> serde_json::Value {
    match kind {
        ToolKind::AgeCalculator
        | ToolKind::EmiCalculator
        | ToolKind::GpaCalculator
        | ToolKind::PercentageCalculator
        | ToolKind::CurrencyConverter => calc::input_schema(kind),
        ToolKind::StylishText
        | ToolKind::PasswordGenerator
        | ToolKind::QrGenerator
        | ToolKind::RandomName => daily::input_schema(kind),
        ToolKind::AiCaption | ToolKind::AiStory | ToolKind::AiStudy => ai::input_schema(kind),
    }
}

/// Deserializes tool arguments, treating missing arguments as `{}`.
pub fn parse_args<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = arguments.unwrap_or_else(|| serde_json::json!({}));
    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

/// Calculator inputs arrive as JSON strings or numbers. Both become the raw
/// text the calculators parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Text(String),
    Number(serde_json::Number),
}

impl RawInput {
    pub fn into_text(self) -> String {
        match self {
            RawInput::Text(text) => text,
            RawInput::Number(number) => number.to_string(),
        }
    }
}

fn request_for(
    kind: ToolKind,
    arguments: Option<serde_json::Value>,
) -> Result<ToolRequest, JsonRpcError> {
    match kind {
        ToolKind::AgeCalculator => calc::age_request(arguments),
        ToolKind::EmiCalculator => calc::emi_request(arguments),
        ToolKind::GpaCalculator => calc::gpa_request(arguments),
        ToolKind::PercentageCalculator => calc::percentage_request(arguments),
        ToolKind::CurrencyConverter => calc::currency_request(arguments),
        ToolKind::StylishText => daily::stylish_request(arguments),
        ToolKind::PasswordGenerator => daily::password_request(arguments),
        ToolKind::QrGenerator => daily::qr_request(arguments),
        ToolKind::RandomName => daily::pick_request(arguments),
        ToolKind::AiCaption | ToolKind::AiStory | ToolKind::AiStudy => {
            ai::request(kind, arguments)
        }
    }
}

fn to_call_result(completion: &Completion) -> Result<CallToolResult, JsonRpcError> {
    let content = match &completion.output {
        ToolOutput::Text { text } => Content::Text { text: text.clone() },
        ToolOutput::Styles { styles } => Content::Text {
            text: serde_json::to_string_pretty(styles)
                .map_err(|e| JsonRpcError::internal(format!("Serialization error: {e}")))?,
        },
        ToolOutput::Image { mime_type, data } => Content::Image {
            data: BASE64_STANDARD.encode(data),
            mime_type: mime_type.clone(),
        },
    };

    Ok(CallToolResult {
        content: vec![content],
        is_error: completion.failed.then_some(true),
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    ctx: &crate::Context,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    let kind = ToolKind::from_id(&params.name)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

    let request = request_for(kind, params.arguments)?;

    if ctx.global.verbose {
        anstream::eprintln!("Calling {}", kind.id());
    }

    let completion = crate::tools::run(&ctx.pipeline, &ctx.env, request).await;
    let result = to_call_result(&completion)?;

    // The redirect runs detached; the response does not wait for it.
    drop(completion.redirect);

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolspark_core::glyph::StylishResult;

    fn completion(output: ToolOutput, failed: bool) -> Completion {
        Completion {
            tool: ToolKind::QrGenerator,
            output,
            failed,
            usage_count: 1,
            states: Vec::new(),
            redirect: None,
        }
    }

    #[test]
    fn test_image_output_becomes_image_content() {
        let result = to_call_result(&completion(ToolOutput::png(vec![1, 2, 3]), false)).unwrap();
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["content"][0]["type"], "image");
        assert_eq!(json["content"][0]["mimeType"], "image/png");
        assert_eq!(json["content"][0]["data"], "AQID");
        assert!(json.get("isError").is_none());
    }

    #[test]
    fn test_failed_output_is_flagged() {
        let result =
            to_call_result(&completion(ToolOutput::text("Error generating QR"), true)).unwrap();
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["text"], "Error generating QR");
    }

    #[test]
    fn test_styles_become_json_text() {
        let styles = vec![StylishResult {
            name: "Wide".to_string(),
            content: "ｈｉ".to_string(),
        }];
        let result = to_call_result(&completion(ToolOutput::Styles { styles }, false)).unwrap();

        match &result.content[0] {
            Content::Text { text } => {
                let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
                assert_eq!(parsed[0]["name"], "Wide");
                assert_eq!(parsed[0]["content"], "ｈｉ");
            }
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_every_tool_has_an_object_schema() {
        for kind in ToolKind::ALL {
            let schema = input_schema(kind);
            assert_eq!(schema["type"], "object", "{}", kind.id());
        }
    }
}
