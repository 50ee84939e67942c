//! Filing history description resolution.
//!
//! Filing history entries carry a templated description code plus a map of
//! substitution values. The human-readable templates come from the registry
//! description enumeration; a bundled snapshot of the entries this service
//! renders ships with the binary. Templates mark emphasis with asterisks,
//! which are not rendered here and are stripped from every resolved string.

use std::collections::HashMap;

use tracing::warn;

/// Bundled snapshot of the filing history description enumeration.
const BUNDLED_DESCRIPTIONS: &str = include_str!("filing_history_descriptions.json");

/// Substitution values attached to a filing history entry.
pub type DescriptionValues = HashMap<String, serde_json::Value>;

/// Code-to-template lookup for filing history descriptions.
#[derive(Debug, Clone, Default)]
pub struct FilingHistoryDescriptions {
    templates: HashMap<String, String>,
}

impl FilingHistoryDescriptions {
    /// Build a resolver over an explicit template map.
    #[must_use]
    pub const fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    /// Build a resolver over the bundled enumeration snapshot.
    #[must_use]
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED_DESCRIPTIONS).map_or_else(
            |e| {
                warn!(error = %e, "Bundled filing history descriptions failed to parse");
                Self::default()
            },
            |templates| Self { templates },
        )
    }

    /// Resolve a description code against its substitution values.
    ///
    /// A literal `description` key in the values map wins outright - the
    /// upstream uses it to hand over pre-rendered text. Otherwise each
    /// `{token}` placeholder is replaced with its value, reformatting any
    /// value whose key names a date into long-month form. Unknown codes fall
    /// back to the code itself. Asterisks are stripped on every path.
    #[must_use]
    pub fn resolve(&self, code: &str, values: Option<&DescriptionValues>) -> String {
        if let Some(description) = values
            .and_then(|values| values.get("description"))
            .map(value_text)
        {
            return remove_asterisks(&description);
        }

        let mut description = self
            .templates
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string());

        if let Some(values) = values {
            for (key, value) in values {
                let text = value_text(value);
                let substituted = if key.contains("date") {
                    super::formatting::map_full_date(&text)
                } else {
                    text
                };
                description = description.replace(&format!("{{{key}}}"), &substituted);
            }
        }

        remove_asterisks(&description)
    }
}

/// Substitution values arrive as JSON and are occasionally numeric.
fn value_text(value: &serde_json::Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}

fn remove_asterisks(description: &str) -> String {
    description.replace('*', "")
}
