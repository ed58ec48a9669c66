use serde::Deserialize;
use toolspark_core::catalog::ToolKind;

use super::{parse_args, JsonRpcError, RawInput};
use crate::tools::ToolRequest;

pub fn input_schema(kind: ToolKind) -> serde_json::Value {
    match kind {
        ToolKind::AgeCalculator => serde_json::json!({
            "type": "object",
            "properties": {
                "birth_date": {
                    "type": "string",
                    "description": "Date of birth as YYYY-MM-DD"
                }
            }
        }),
        ToolKind::EmiCalculator => serde_json::json!({
            "type": "object",
            "properties": {
                "principal": {
                    "type": ["number", "string"],
                    "description": "Loan amount"
                },
                "rate": {
                    "type": ["number", "string"],
                    "description": "Annual interest rate in percent (e.g., 7.5)"
                },
                "years": {
                    "type": ["number", "string"],
                    "description": "Tenure in years"
                }
            },
            "required": ["principal", "rate", "years"]
        }),
        ToolKind::GpaCalculator => serde_json::json!({
            "type": "object",
            "properties": {
                "courses": {
                    "type": "array",
                    "description": "Courses with their credits and grade points on a 4.0 scale",
                    "items": {
                        "type": "object",
                        "properties": {
                            "credits": { "type": ["number", "string"] },
                            "grade": { "type": ["number", "string"] }
                        },
                        "required": ["credits", "grade"]
                    }
                }
            },
            "required": ["courses"]
        }),
        ToolKind::PercentageCalculator => serde_json::json!({
            "type": "object",
            "properties": {
                "value": {
                    "type": ["number", "string"],
                    "description": "The part"
                },
                "total": {
                    "type": ["number", "string"],
                    "description": "The whole"
                }
            },
            "required": ["value", "total"]
        }),
        _ => serde_json::json!({
            "type": "object",
            "properties": {
                "amount": {
                    "type": ["number", "string"],
                    "description": "Amount to convert"
                },
                "from": {
                    "type": "string",
                    "description": "Source currency: USD, EUR, GBP, INR or JPY (default: USD)"
                },
                "to": {
                    "type": "string",
                    "description": "Target currency: USD, EUR, GBP, INR or JPY (default: EUR)"
                }
            },
            "required": ["amount"]
        }),
    }
}

pub fn age_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct AgeArgs {
        birth_date: Option<String>,
    }

    let args: AgeArgs = parse_args(arguments)?;
    Ok(ToolRequest::Age {
        birth_date: args.birth_date,
    })
}

pub fn emi_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct EmiArgs {
        principal: RawInput,
        rate: RawInput,
        years: RawInput,
    }

    let args: EmiArgs = parse_args(arguments)?;
    Ok(ToolRequest::Emi {
        principal: args.principal.into_text(),
        rate: args.rate.into_text(),
        years: args.years.into_text(),
    })
}

pub fn gpa_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct CourseArgs {
        credits: RawInput,
        grade: RawInput,
    }

    #[derive(Deserialize)]
    struct GpaArgs {
        courses: Vec<CourseArgs>,
    }

    let args: GpaArgs = parse_args(arguments)?;
    Ok(ToolRequest::Gpa {
        courses: args
            .courses
            .into_iter()
            .map(|course| (course.credits.into_text(), course.grade.into_text()))
            .collect(),
    })
}

pub fn percentage_request(
    arguments: Option<serde_json::Value>,
) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct PercentageArgs {
        value: RawInput,
        total: RawInput,
    }

    let args: PercentageArgs = parse_args(arguments)?;
    Ok(ToolRequest::Percentage {
        value: args.value.into_text(),
        total: args.total.into_text(),
    })
}

pub fn currency_request(arguments: Option<serde_json::Value>) -> Result<ToolRequest, JsonRpcError> {
    #[derive(Deserialize)]
    struct CurrencyArgs {
        amount: RawInput,
        from: Option<String>,
        to: Option<String>,
    }

    let args: CurrencyArgs = parse_args(arguments)?;
    Ok(ToolRequest::Currency {
        amount: args.amount.into_text(),
        from: args.from.unwrap_or_else(|| "USD".to_string()),
        to: args.to.unwrap_or_else(|| "EUR".to_string()),
    })
}
