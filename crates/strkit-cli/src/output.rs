//! Output rendering for command results

use crate::commands::Outcome;

/// Output format options for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Render an outcome in the requested format
///
/// Text output is the bare value; the replacement count goes to the log.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            if let Some(count) = outcome.count {
                tracing::info!("{} made {count} replacements", outcome.operation);
            }
            Ok(outcome.value.clone())
        }
        OutputFormat::Json => serde_json::to_string(outcome),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(count: Option<usize>) -> Outcome {
        Outcome {
            operation: "replace",
            value: "d d d b ".to_string(),
            count,
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&outcome(Some(3)), OutputFormat::Text).unwrap(), "d d d b ");
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            render(&outcome(Some(3)), OutputFormat::Json).unwrap(),
            r#"{"operation":"replace","value":"d d d b ","count":3}"#
        );
        assert_eq!(
            render(&outcome(None), OutputFormat::Json).unwrap(),
            r#"{"operation":"replace","value":"d d d b "}"#
        );
    }

    #[test]
    fn test_render_json_pretty() {
        let text = render(&outcome(None), OutputFormat::JsonPretty).unwrap();
        assert!(text.contains("\n  \"value\": \"d d d b \""));
    }
}
