//! Prompt construction for entry analysis.

/// Builds the analysis prompt for a journal entry.
///
/// The model is asked for free-text insights on the entry; whatever it
/// returns is stored verbatim as the entry's analysis.
pub fn analysis_prompt(content: &str) -> String {
    format!(
        "Analyze the following journal entry and provide insights: {}",
        content
    )
}
