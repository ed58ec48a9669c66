use crate::prelude::*;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use toolspark_core::usage::UsageCounter;

mod ads;
mod ai;
mod calc;
mod daily;
mod error;
mod list;
mod mcp;
mod pipeline;
mod prelude;
mod qr;
mod tools;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Calculators, everyday helpers and AI writing tools behind one launcher"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TOOLSPARK_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Simulated ad pre-roll before each tool run, in milliseconds
    #[clap(long, env = "TOOLSPARK_PREROLL_MS", global = true, default_value = "1500")]
    preroll_ms: u64,

    /// Ollama base URL used by the AI tools
    #[clap(
        long,
        env = "OLLAMA_URL",
        global = true,
        default_value = "http://localhost:11434"
    )]
    ollama_url: String,

    /// Model used by the AI tools
    #[clap(long, env = "TOOLSPARK_MODEL", global = true, default_value = "llama3.2")]
    model: String,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List the available tools
    List(crate::list::ListOptions),

    /// Utility calculators (age, EMI, GPA, percentage, currency)
    Calc(crate::calc::App),

    /// Everyday helpers (stylish text, password, QR code, random picker)
    Daily(crate::daily::App),

    /// AI writing tools (captions, stories, study questions)
    AI(crate::ai::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

/// Process-wide state shared by every tool run: one pipeline, one usage
/// counter.
#[derive(Clone)]
pub struct Context {
    pub global: Global,
    pub pipeline: Arc<pipeline::Pipeline>,
    pub env: Arc<tools::ToolEnv>,
}

impl Context {
    pub fn new(global: Global) -> Self {
        let pipeline = pipeline::Pipeline::new(
            Duration::from_millis(global.preroll_ms),
            Arc::new(UsageCounter::new()),
            Arc::new(ads::ConsoleNotifier),
        );
        let env = tools::ToolEnv {
            ai: ai::AiSettings {
                ollama_url: global.ollama_url.clone(),
                model: global.model.clone(),
            },
        };

        Self {
            global,
            pipeline: Arc::new(pipeline),
            env: Arc::new(env),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let ctx = Context::new(app.global);

    match app.command {
        SubCommands::List(options) => crate::list::run(options, ctx).await,
        SubCommands::Calc(sub_app) => crate::calc::run(sub_app, ctx).await,
        SubCommands::Daily(sub_app) => crate::daily::run(sub_app, ctx).await,
        SubCommands::AI(sub_app) => crate::ai::run(sub_app, ctx).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, ctx).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        App::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let app = App::try_parse_from(["toolspark", "list"]).unwrap();
        assert_eq!(app.global.preroll_ms, 1500);
        assert!(!app.global.verbose);
    }

    #[test]
    fn test_parses_qr_options() {
        let app = App::try_parse_from([
            "toolspark",
            "daily",
            "qr",
            "https://example.com",
            "--level",
            "h",
            "--dark",
            "#4F46E5",
        ])
        .unwrap();

        match app.command {
            SubCommands::Daily(daily) => match daily.command {
                crate::daily::Commands::Qr(args) => {
                    assert_eq!(args.level, toolspark_core::qr::ErrorCorrection::H);
                    assert_eq!(args.dark, [0x4F, 0x46, 0xE5, 0xFF]);
                    assert_eq!(args.light, toolspark_core::qr::WHITE);
                }
                other => panic!("unexpected command {:?}", other),
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_color() {
        assert!(App::try_parse_from(["toolspark", "daily", "qr", "x", "--dark", "red"]).is_err());
    }

    #[test]
    fn test_parses_ai_labels() {
        let app =
            App::try_parse_from(["toolspark", "ai", "story", "a lost robot", "--genre", "horror"])
                .unwrap();
        match app.command {
            SubCommands::AI(ai) => match ai.command {
                crate::ai::Commands::Story(options) => {
                    assert_eq!(options.genre, toolspark_core::ai::Genre::Horror);
                    assert_eq!(options.shared.language, toolspark_core::ai::Language::English);
                }
                other => panic!("unexpected command {:?}", other),
            },
            other => panic!("unexpected command {:?}", other),
        }
    }
}
