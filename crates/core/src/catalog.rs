//! The tool catalog shown by the launcher.

use serde::Serialize;

/// Default message when a tool fails.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to generate content. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolCategory {
    Utility,
    Daily,
    #[serde(rename = "AI")]
    Ai,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 3] = [ToolCategory::Utility, ToolCategory::Daily, ToolCategory::Ai];

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Utility => "Utility",
            ToolCategory::Daily => "Daily",
            ToolCategory::Ai => "AI",
        }
    }
}

impl std::str::FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utility" => Ok(ToolCategory::Utility),
            "daily" => Ok(ToolCategory::Daily),
            "ai" => Ok(ToolCategory::Ai),
            other => Err(format!(
                "Unknown category: {}. Valid categories: utility, daily, ai",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolKind {
    AgeCalculator,
    EmiCalculator,
    GpaCalculator,
    PercentageCalculator,
    CurrencyConverter,
    StylishText,
    PasswordGenerator,
    QrGenerator,
    RandomName,
    AiCaption,
    AiStory,
    AiStudy,
}

impl ToolKind {
    pub const ALL: [ToolKind; 12] = [
        ToolKind::AgeCalculator,
        ToolKind::EmiCalculator,
        ToolKind::GpaCalculator,
        ToolKind::PercentageCalculator,
        ToolKind::CurrencyConverter,
        ToolKind::StylishText,
        ToolKind::PasswordGenerator,
        ToolKind::QrGenerator,
        ToolKind::RandomName,
        ToolKind::AiCaption,
        ToolKind::AiStory,
        ToolKind::AiStudy,
    ];

    /// Stable identifier, also used as the MCP tool name.
    pub fn id(&self) -> &'static str {
        match self {
            ToolKind::AgeCalculator => "age_calculator",
            ToolKind::EmiCalculator => "emi_calculator",
            ToolKind::GpaCalculator => "gpa_calculator",
            ToolKind::PercentageCalculator => "percentage_calculator",
            ToolKind::CurrencyConverter => "currency_converter",
            ToolKind::StylishText => "stylish_text",
            ToolKind::PasswordGenerator => "password_generator",
            ToolKind::QrGenerator => "qr_generator",
            ToolKind::RandomName => "random_picker",
            ToolKind::AiCaption => "ai_caption",
            ToolKind::AiStory => "ai_story",
            ToolKind::AiStudy => "ai_study",
        }
    }

    pub fn from_id(id: &str) -> Option<ToolKind> {
        ToolKind::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToolKind::AgeCalculator => "Age Calculator",
            ToolKind::EmiCalculator => "EMI Calculator",
            ToolKind::GpaCalculator => "GPA Calculator",
            ToolKind::PercentageCalculator => "Percentage Calculator",
            ToolKind::CurrencyConverter => "Currency Converter",
            ToolKind::StylishText => "Stylish Text",
            ToolKind::PasswordGenerator => "Password Generator",
            ToolKind::QrGenerator => "QR Code Generator",
            ToolKind::RandomName => "Random Picker",
            ToolKind::AiCaption => "AI Caption Gen",
            ToolKind::AiStory => "AI Storyteller",
            ToolKind::AiStudy => "Study Buddy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::AgeCalculator => "Calculate your precise age in years, months, and days.",
            ToolKind::EmiCalculator => "Plan your loans with monthly installment calculations.",
            ToolKind::GpaCalculator => "Track your academic performance easily.",
            ToolKind::PercentageCalculator => "Quick percentage calculations for daily use.",
            ToolKind::CurrencyConverter => "Convert between major world currencies.",
            ToolKind::StylishText => "Generate fancy text for social media bios.",
            ToolKind::PasswordGenerator => "Create strong, secure passwords instantly.",
            ToolKind::QrGenerator => "Turn links and text into scannable QR codes.",
            ToolKind::RandomName => "Pick random names or items from a list.",
            ToolKind::AiCaption => "Viral captions for Instagram & TikTok.",
            ToolKind::AiStory => "Generate creative short stories in seconds.",
            ToolKind::AiStudy => "Generate practice questions for any topic.",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            ToolKind::AgeCalculator
            | ToolKind::EmiCalculator
            | ToolKind::GpaCalculator
            | ToolKind::PercentageCalculator
            | ToolKind::CurrencyConverter => ToolCategory::Utility,
            ToolKind::StylishText
            | ToolKind::PasswordGenerator
            | ToolKind::QrGenerator
            | ToolKind::RandomName => ToolCategory::Daily,
            ToolKind::AiCaption | ToolKind::AiStory | ToolKind::AiStudy => ToolCategory::Ai,
        }
    }

    /// Result text shown when the tool's compute step fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ToolKind::AiStory => "Failed to generate story.",
            ToolKind::AiStudy => "Failed to generate questions.",
            ToolKind::QrGenerator => "Error generating QR",
            _ => DEFAULT_FAILURE_MESSAGE,
        }
    }
}

/// Catalog entry as listed by the launcher.
#[derive(Debug, Clone, Serialize)]
pub struct ToolEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
}

impl From<ToolKind> for ToolEntry {
    fn from(kind: ToolKind) -> Self {
        Self {
            id: kind.id(),
            title: kind.title(),
            description: kind.description(),
            category: kind.category(),
        }
    }
}

/// Lists the catalog, optionally filtered to one category.
pub fn list_tools(category: Option<ToolCategory>) -> Vec<ToolEntry> {
    ToolKind::ALL
        .into_iter()
        .filter(|kind| category.map_or(true, |c| kind.category() == c))
        .map(ToolEntry::from)
        .collect()
}
