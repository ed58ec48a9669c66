//! One request per tool, and the glue that runs it through the pipeline.

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use toolspark_core::ai::{GenerationKind, GenerationRequest, Language};
use toolspark_core::calc;
use toolspark_core::catalog::ToolKind;
use toolspark_core::daily;
use toolspark_core::output::ToolOutput;
use toolspark_core::qr::{validate_text, QrOptions};

use crate::ai::AiSettings;
use crate::pipeline::{Completion, Pipeline};
use crate::prelude::{eprintln, println, *};

/// Everything a tool needs from the outside world besides its inputs.
#[derive(Debug, Clone)]
pub struct ToolEnv {
    pub ai: AiSettings,
}

#[derive(Debug, Clone)]
pub enum ToolRequest {
    Age {
        birth_date: Option<String>,
    },
    Emi {
        principal: String,
        rate: String,
        years: String,
    },
    Gpa {
        courses: Vec<(String, String)>,
    },
    Percentage {
        value: String,
        total: String,
    },
    Currency {
        amount: String,
        from: String,
        to: String,
    },
    StylishText {
        text: String,
    },
    Password {
        length: usize,
    },
    Qr {
        text: String,
        options: QrOptions,
        logo: Option<PathBuf>,
    },
    RandomPick {
        items: Vec<String>,
    },
    Ai {
        kind: GenerationKind,
        language: Language,
    },
}

impl ToolRequest {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolRequest::Age { .. } => ToolKind::AgeCalculator,
            ToolRequest::Emi { .. } => ToolKind::EmiCalculator,
            ToolRequest::Gpa { .. } => ToolKind::GpaCalculator,
            ToolRequest::Percentage { .. } => ToolKind::PercentageCalculator,
            ToolRequest::Currency { .. } => ToolKind::CurrencyConverter,
            ToolRequest::StylishText { .. } => ToolKind::StylishText,
            ToolRequest::Password { .. } => ToolKind::PasswordGenerator,
            ToolRequest::Qr { .. } => ToolKind::QrGenerator,
            ToolRequest::RandomPick { .. } => ToolKind::RandomName,
            ToolRequest::Ai { kind, .. } => match kind {
                GenerationKind::Caption { .. } => ToolKind::AiCaption,
                GenerationKind::Story { .. } => ToolKind::AiStory,
                GenerationKind::Study { .. } => ToolKind::AiStudy,
            },
        }
    }

    /// Produces the tool output. Input problems come back as text outputs;
    /// only collaborator failures are errors.
    pub async fn compute(self, env: &ToolEnv) -> std::result::Result<ToolOutput, Error> {
        let output = match self {
            ToolRequest::Age { birth_date } => {
                let today = chrono::Local::now().date_naive();
                ToolOutput::text(calc::age::evaluate(birth_date.as_deref(), today))
            }
            ToolRequest::Emi {
                principal,
                rate,
                years,
            } => ToolOutput::text(calc::emi::evaluate(&principal, &rate, &years)),
            ToolRequest::Gpa { courses } => ToolOutput::text(calc::gpa::evaluate(&courses)),
            ToolRequest::Percentage { value, total } => {
                ToolOutput::text(calc::percentage::evaluate(&value, &total))
            }
            ToolRequest::Currency { amount, from, to } => {
                ToolOutput::text(calc::currency::evaluate(&amount, &from, &to))
            }
            ToolRequest::StylishText { text } => match daily::stylish_text(&text) {
                Ok(styles) => ToolOutput::Styles { styles },
                Err(e) => ToolOutput::text(e.to_string()),
            },
            ToolRequest::Password { length } => {
                match daily::generate_password(&mut rand::thread_rng(), length) {
                    Ok(password) => ToolOutput::text(password),
                    Err(e) => ToolOutput::text(e.to_string()),
                }
            }
            ToolRequest::RandomPick { items } => {
                ToolOutput::text(daily::pick_random(&mut rand::thread_rng(), &items))
            }
            ToolRequest::Qr {
                text,
                options,
                logo,
            } => {
                if let Err(e) = validate_text(&text).and_then(|_| options.validate()) {
                    return Ok(ToolOutput::text(e.to_string()));
                }
                let png = tokio::task::spawn_blocking(move || {
                    crate::qr::render_png(&text, &options, logo.as_deref())
                })
                .await
                .map_err(|e| Error::QrEncoding(e.to_string()))??;
                ToolOutput::png(png)
            }
            ToolRequest::Ai { kind, language } => match GenerationRequest::new(kind, language) {
                Ok(request) => ToolOutput::text(crate::ai::generate(&env.ai, &request).await?),
                Err(e) => ToolOutput::text(e.to_string()),
            },
        };

        Ok(output)
    }
}

/// Runs `request` through `pipeline`.
pub async fn run(pipeline: &Pipeline, env: &ToolEnv, request: ToolRequest) -> Completion {
    let tool = request.kind();
    log::info!("running {}", tool.id());
    pipeline.invoke(tool, || request.compute(env)).await
}

#[derive(Debug, Serialize)]
struct CompletionReport<'a> {
    tool: &'static str,
    failed: bool,
    usage_count: u64,
    redirect: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<String>,
    output: &'a ToolOutput,
}

/// Prints a completion for the terminal, or as JSON.
pub fn print_completion(
    completion: &Completion,
    json: bool,
    saved_to: Option<&Path>,
) -> Result<()> {
    if json {
        return print_json(&CompletionReport {
            tool: completion.tool.id(),
            failed: completion.failed,
            usage_count: completion.usage_count,
            redirect: completion.redirect.is_some(),
            saved_to: saved_to.map(|path| path.display().to_string()),
            output: &completion.output,
        });
    }

    if let Some(path) = saved_to {
        println!("{} {}", "QR code written to".green(), path.display());
        return Ok(());
    }

    match &completion.output {
        ToolOutput::Text { text } if completion.failed => println!("{}", text.red()),
        ToolOutput::Text { text } => println!("{}", text),
        ToolOutput::Styles { styles } => {
            let mut table = new_table();
            table.add_row(prettytable::row!["Style".bold(), "Text".bold()]);
            for style in styles {
                table.add_row(prettytable::row![style.name.cyan(), style.content]);
            }
            table.printstd();
        }
        ToolOutput::Image { .. } => println!("{}", completion.output.to_plain_text()),
    }

    Ok(())
}

/// Writes an image output to `path`. Returns false, without touching the
/// file, for any other output.
pub async fn save_image(output: &ToolOutput, path: &Path) -> Result<bool> {
    let ToolOutput::Image { data, .. } = output else {
        return Ok(false);
    };
    tokio::fs::write(path, data)
        .await
        .map_err(|e| eyre!("Failed to write '{}': {}", path.display(), e))?;
    Ok(true)
}

/// Saves image outputs to `save_to` when given, prints the completion and
/// waits for the redirect notice, if any. The redirect is awaited even when
/// saving or printing fails.
pub async fn finish(
    completion: Completion,
    global: &crate::Global,
    json: bool,
    save_to: Option<&Path>,
) -> Result<()> {
    let printed = match save_to {
        Some(path) => save_image(&completion.output, path).await,
        None => Ok(false),
    }
    .and_then(|saved| print_completion(&completion, json, save_to.filter(|_| saved)));

    if global.verbose {
        eprintln!(
            "{} {}",
            "Uses:".dimmed(),
            completion.usage_count.to_string().bold()
        );
    }

    if let Some(handle) = completion.redirect {
        handle
            .await
            .map_err(|e| eyre!("Redirect notifier failed: {}", e))?;
    }

    printed
}
