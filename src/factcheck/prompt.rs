use super::Language;
use crate::llm::{GenerateContentRequest, Tool};

/// Instruction pinning the model to the verdict-first answer format.
pub fn system_instruction(language: Language) -> String {
    format!(
        "You are a highly objective Multilingual Fake News Detection Assistant. \
         Your task is to analyze the provided statement for credibility. \
         If the input is not in English, translate it internally for analysis. \
         Use the Google Search tool when available to verify the claim. \
         The very first line of your response MUST be a machine-readable verdict tag. \
         Use [VERDICT:REAL] if verified, or [VERDICT:FAKE] if misinformation. \
         The entire final response after the verdict tag must be written in {language}. \
         Structure the content AFTER the verdict tag using: Analysis, Explanation, Credibility Score.",
        language = language.name()
    )
}

pub fn user_prompt(statement: &str, language: Language) -> String {
    format!(
        "Analyze this statement for credibility and fact-check it. \
         Ensure the response is in {} and begins with the verdict tag:\n\"{}\"",
        language.name(),
        statement
    )
}

pub fn build_request(
    statement: &str,
    language: Language,
    search_grounding: bool,
) -> GenerateContentRequest {
    let request = GenerateContentRequest::new()
        .with_system_instruction(system_instruction(language))
        .with_text(user_prompt(statement, language));

    if search_grounding {
        request.with_tool(Tool::GoogleSearch)
    } else {
        request
    }
}
