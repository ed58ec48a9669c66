use super::types::{GenerationKind, GenerationRequest};

/// Build the LLM prompt for a generation request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let body = match &request.kind {
        GenerationKind::Caption { topic, tone } => format!(
            "Generate 5 catchy, engaging social media captions for a post about: \"{}\". Tone: {}. Include emojis.",
            topic.trim(),
            tone
        ),
        GenerationKind::Story { premise, genre } => format!(
            "Write a very short story (max 200 words) with the following premise: \"{}\". Genre: {}.",
            premise.trim(),
            genre
        ),
        GenerationKind::Study { topic, level } => format!(
            "Create 5 study questions (multiple choice or open ended) about \"{}\" for a {} level student. Provide answers at the end.",
            topic.trim(),
            level
        ),
    };

    format!("{} Respond in {}.", body, request.language)
}

/// Trim a model response; `None` when nothing is left.
pub fn clean_response(response: &str) -> Option<String> {
    let trimmed = response.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
