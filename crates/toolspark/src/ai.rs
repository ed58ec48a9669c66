use crate::prelude::{eprintln, *};
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::ollama;
use toolspark_core::ai::{
    build_prompt, clean_response, GenerationKind, GenerationRequest, Genre, Language, Level, Tone,
};

use crate::tools::{self, ToolRequest};

const SYSTEM_PREAMBLE: &str = "\
You are a friendly writing assistant inside a small productivity app.
Answer the request directly. Do not explain what you are going to do.
Keep formatting simple: short paragraphs or numbered lists, no markdown headings.";

/// Where and with which model AI tools run.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub ollama_url: String,
    pub model: String,
}

#[derive(Debug, clap::Parser)]
#[command(name = "ai")]
#[command(about = "AI writing tools backed by a local Ollama model")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Generate five social media captions
    #[clap(name = "caption")]
    Caption(CaptionOptions),

    /// Write a very short story
    #[clap(name = "story")]
    Story(StoryOptions),

    /// Create study questions with answers
    #[clap(name = "study")]
    Study(StudyOptions),
}

#[derive(Debug, clap::Args)]
pub struct SharedOptions {
    /// Language of the answer (English, Bangla)
    #[arg(long, default_value = "English")]
    pub language: Language,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct CaptionOptions {
    /// What the post is about
    pub topic: String,

    /// Caption tone (Fun, Professional, Sarcastic, Inspirational)
    #[arg(long, default_value = "Fun")]
    pub tone: Tone,

    #[clap(flatten)]
    pub shared: SharedOptions,
}

#[derive(Debug, clap::Args)]
pub struct StoryOptions {
    /// Story premise
    pub premise: String,

    /// Story genre (Sci-Fi, Fantasy, Horror, Comedy)
    #[arg(long, default_value = "Sci-Fi")]
    pub genre: Genre,

    #[clap(flatten)]
    pub shared: SharedOptions,
}

#[derive(Debug, clap::Args)]
pub struct StudyOptions {
    /// Study topic
    pub topic: String,

    /// Student level (Beginner, Intermediate, Advanced)
    #[arg(long, default_value = "Beginner")]
    pub level: Level,

    #[clap(flatten)]
    pub shared: SharedOptions,
}

pub async fn run(app: App, ctx: crate::Context) -> Result<()> {
    let (kind, shared) = match app.command {
        Commands::Caption(options) => (
            GenerationKind::Caption {
                topic: options.topic,
                tone: options.tone,
            },
            options.shared,
        ),
        Commands::Story(options) => (
            GenerationKind::Story {
                premise: options.premise,
                genre: options.genre,
            },
            options.shared,
        ),
        Commands::Study(options) => (
            GenerationKind::Study {
                topic: options.topic,
                level: options.level,
            },
            options.shared,
        ),
    };

    if ctx.global.verbose {
        eprintln!("Ollama URL: {}", ctx.env.ai.ollama_url);
        eprintln!("Model: {}", ctx.env.ai.model);
    }

    let request = ToolRequest::Ai {
        kind,
        language: shared.language,
    };
    let completion = tools::run(&ctx.pipeline, &ctx.env, request).await;
    tools::finish(completion, &ctx.global, shared.json, None).await
}

fn create_client(ollama_url: &str) -> std::result::Result<ollama::Client, Error> {
    use rig::client::Nothing;

    ollama::Client::builder()
        .api_key(Nothing)
        .base_url(ollama_url)
        .build()
        .map_err(|e| Error::Generation(format!("Failed to create Ollama client: {}", e)))
}

/// Calls the model once for `request`. An empty answer becomes the
/// request's "nothing generated" message.
pub async fn generate(
    settings: &AiSettings,
    request: &GenerationRequest,
) -> std::result::Result<String, Error> {
    let prompt = build_prompt(request);
    log::debug!("prompt length: {} chars", prompt.len());

    let client = create_client(&settings.ollama_url)?;
    let agent = client
        .agent(&settings.model)
        .preamble(SYSTEM_PREAMBLE)
        .build();

    let response = agent
        .prompt(&prompt)
        .await
        .map_err(|e| Error::Generation(e.to_string()))?;

    Ok(clean_response(&response)
        .unwrap_or_else(|| request.empty_response_message().to_string()))
}
