//! Journal entry operations: the analyzed write path and ordered reads.
//!
//! Creation is the one place in the application that talks to the analysis
//! service, and the one place its failures are absorbed: an entry is stored
//! with analysis when the service answers, and without it otherwise. A
//! submission never fails because the analysis service is slow, down, or
//! answering garbage — only invalid input or an unavailable store can
//! reject it.

use crate::ai::OllamaClient;
use crate::db::entries::{self, Entry};
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use tracing::{debug, info, warn};

/// Creates a journal entry from raw user text.
///
/// # Flow
///
/// 1. Validate the content; invalid input fails before any external call
/// 2. Request analysis from the Ollama client
/// 3. On any analysis failure, log it and continue without analysis
/// 4. Persist; the store assigns `id` and `created_at`
///
/// # Arguments
///
/// * `db` - Database handle
/// * `client` - Analysis client
/// * `max_content_len` - Maximum accepted content length in characters
/// * `content` - Raw entry text from the caller
///
/// # Errors
///
/// Returns `AppError::Validation` for empty or over-long content, or a
/// database error if persistence fails. Analysis failures are not errors
/// here and never reach the caller.
pub async fn create_entry(
    db: &Database,
    client: &OllamaClient,
    max_content_len: usize,
    content: &str,
) -> AppResult<Entry> {
    validate_content(content, max_content_len)?;

    let analysis = match client.analyze(content).await {
        Ok(text) => {
            debug!("Entry analysis succeeded");
            Some(text)
        }
        Err(e) => {
            warn!("Entry analysis unavailable, storing entry without it: {}", e);
            None
        }
    };

    let conn = db.get_conn()?;
    let entry = entries::insert_entry(&conn, content, analysis.as_deref())?;

    info!(
        "Created journal entry {} (analysis: {})",
        entry.id,
        if entry.analysis.is_some() { "yes" } else { "no" }
    );
    Ok(entry)
}

/// Lists all journal entries, most recent first.
///
/// Reads the store only; no external calls.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(db: &Database) -> AppResult<Vec<Entry>> {
    let conn = db.get_conn()?;
    entries::list_entries(&conn)
}

fn validate_content(content: &str, max_len: usize) -> AppResult<()> {
    if content.trim().is_empty() {
        return Err(AppError::Validation(
            "Journal entry content cannot be empty".to_string(),
        ));
    }

    let chars = content.chars().count();
    if chars > max_len {
        return Err(AppError::Validation(format!(
            "Journal entry content is too long: {} characters (maximum {})",
            chars, max_len
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_accepts_normal_text() {
        assert!(validate_content("Today was productive", 100).is_ok());
    }

    #[test]
    fn test_validate_content_rejects_empty() {
        assert!(matches!(
            validate_content("", 100),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_content("   \n\t", 100),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_content_enforces_length_in_characters() {
        // Limit counts characters, not bytes
        let content = "日".repeat(10);
        assert!(validate_content(&content, 10).is_ok());
        assert!(matches!(
            validate_content(&content, 9),
            Err(AppError::Validation(_))
        ));
    }
}
