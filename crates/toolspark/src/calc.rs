use crate::prelude::{eprintln, *};
use crate::tools::{self, ToolRequest};

#[derive(Debug, clap::Parser)]
#[command(name = "calc")]
#[command(about = "Utility calculators")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Exact age in years, months and days
    #[clap(name = "age")]
    Age(AgeOptions),

    /// Monthly loan installment
    #[clap(name = "emi")]
    Emi(EmiOptions),

    /// Grade point average on a 4.0 scale
    #[clap(name = "gpa")]
    Gpa(GpaOptions),

    /// What percentage one number is of another
    #[clap(name = "percentage")]
    Percentage(PercentageOptions),

    /// Convert between USD, EUR, GBP, INR and JPY
    #[clap(name = "currency")]
    Currency(CurrencyOptions),
}

#[derive(Debug, clap::Args)]
pub struct AgeOptions {
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct EmiOptions {
    /// Loan amount
    #[arg(long)]
    pub principal: String,

    /// Annual interest rate, in percent
    #[arg(long)]
    pub rate: String,

    /// Tenure, in years
    #[arg(long)]
    pub years: String,
}

#[derive(Debug, clap::Args)]
pub struct GpaOptions {
    /// Course as CREDITS:GRADE (e.g., "3:4.0"). Repeat for each course.
    #[arg(long = "course", required = true)]
    pub courses: Vec<String>,
}

#[derive(Debug, clap::Args)]
pub struct PercentageOptions {
    /// The part
    #[arg(long)]
    pub value: String,

    /// The whole
    #[arg(long)]
    pub total: String,
}

#[derive(Debug, clap::Args)]
pub struct CurrencyOptions {
    /// Amount to convert
    #[arg(long)]
    pub amount: String,

    /// Source currency code
    #[arg(long, default_value = "USD")]
    pub from: String,

    /// Target currency code
    #[arg(long, default_value = "EUR")]
    pub to: String,
}

/// Splits "CREDITS:GRADE"; entries without a colon keep an empty grade so the
/// calculator skips them like any other unparsable row.
fn split_course(course: &str) -> (String, String) {
    match course.split_once(':') {
        Some((credits, grade)) => (credits.trim().to_string(), grade.trim().to_string()),
        None => (course.trim().to_string(), String::new()),
    }
}

pub async fn run(app: App, ctx: crate::Context) -> Result<()> {
    let request = match app.command {
        Commands::Age(options) => ToolRequest::Age {
            birth_date: options.birth_date,
        },
        Commands::Emi(options) => ToolRequest::Emi {
            principal: options.principal,
            rate: options.rate,
            years: options.years,
        },
        Commands::Gpa(options) => ToolRequest::Gpa {
            courses: options.courses.iter().map(|c| split_course(c)).collect(),
        },
        Commands::Percentage(options) => ToolRequest::Percentage {
            value: options.value,
            total: options.total,
        },
        Commands::Currency(options) => ToolRequest::Currency {
            amount: options.amount,
            from: options.from,
            to: options.to,
        },
    };

    if ctx.global.verbose {
        eprintln!("Running {}", request.kind().title());
    }

    let completion = tools::run(&ctx.pipeline, &ctx.env, request).await;
    tools::finish(completion, &ctx.global, app.json, None).await
}
