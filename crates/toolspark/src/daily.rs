use crate::prelude::*;
use crate::tools::{self, ToolRequest};
use std::path::PathBuf;
use toolspark_core::daily::{split_items, DEFAULT_PASSWORD_LENGTH};
use toolspark_core::glyph::{find_style, registry};
use toolspark_core::output::ToolOutput;
use toolspark_core::qr::{
    parse_hex_color, ErrorCorrection, QrOptions, Rgba, DEFAULT_MARGIN, DEFAULT_WIDTH,
};

#[derive(Debug, clap::Parser)]
#[command(name = "daily")]
#[command(about = "Everyday helpers")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Render text in ten decorative Unicode styles
    #[clap(name = "stylish")]
    Stylish(StylishOptions),

    /// Generate a random password
    #[clap(name = "password")]
    Password(PasswordOptions),

    /// Generate a QR code PNG
    #[clap(name = "qr")]
    Qr(QrArgs),

    /// Pick a random entry from a list, or a random name
    #[clap(name = "pick")]
    Pick(PickOptions),
}

#[derive(Debug, clap::Args)]
pub struct StylishOptions {
    /// Text to decorate
    pub text: String,

    /// Only show this style (e.g., "Wide", "upside down")
    #[arg(short, long)]
    pub style: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct PasswordOptions {
    /// Number of characters (4 to 64)
    #[arg(short, long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
    pub length: usize,
}

#[derive(Debug, clap::Args)]
pub struct QrArgs {
    /// Text or URL to encode
    pub text: String,

    /// Error correction level (L, M, Q, H)
    #[arg(long, default_value = "M")]
    pub level: ErrorCorrection,

    /// Quiet zone around the code, in modules (0 to 64)
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Image width and height, in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Module color (#RRGGBB or #RRGGBBAA)
    #[arg(long, default_value = "#000000", value_parser = parse_hex_color)]
    pub dark: Rgba,

    /// Background color (#RRGGBB or #RRGGBBAA)
    #[arg(long, default_value = "#ffffff", value_parser = parse_hex_color)]
    pub light: Rgba,

    /// Image to place in the middle of the code
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Write the PNG here instead of printing a data URL
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct PickOptions {
    /// Entries to pick from. Commas split a single argument into entries.
    pub items: Vec<String>,
}

pub async fn run(app: App, ctx: crate::Context) -> Result<()> {
    let mut output_path = None;
    let mut only_style = None;

    let request = match app.command {
        Commands::Stylish(options) => {
            if let Some(name) = &options.style {
                let definition = find_style(name).ok_or_else(|| {
                    let valid = registry()
                        .iter()
                        .map(|definition| definition.name)
                        .collect::<Vec<_>>()
                        .join(", ");
                    eyre!("Unknown style: {}. Valid styles: {}", name, valid)
                })?;
                only_style = Some(definition.name);
            }
            ToolRequest::StylishText { text: options.text }
        }
        Commands::Password(options) => ToolRequest::Password {
            length: options.length,
        },
        Commands::Qr(args) => {
            output_path = args.output;
            ToolRequest::Qr {
                text: args.text,
                options: QrOptions {
                    error_correction: args.level,
                    margin: args.margin,
                    width: args.width,
                    dark: args.dark,
                    light: args.light,
                },
                logo: args.logo,
            }
        }
        Commands::Pick(options) => ToolRequest::RandomPick {
            items: options
                .items
                .iter()
                .flat_map(|item| split_items(item))
                .collect(),
        },
    };

    let mut completion = tools::run(&ctx.pipeline, &ctx.env, request).await;

    if let (Some(name), ToolOutput::Styles { styles }) = (only_style, &mut completion.output) {
        styles.retain(|style| style.name == name);
    }

    tools::finish(completion, &ctx.global, app.json, output_path.as_deref()).await
}
