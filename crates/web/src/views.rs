//! View-model component types handed to the templates.
//!
//! The serialized shape of these types - `key.text`, `value.html`,
//! `value.classes`, `actions.items[].href` - is a fixed contract the
//! rendering layer depends on, including the CSS class strings and the `id`
//! attributes embedded in HTML fragments. Change nothing here without
//! checking the templates and the tests that pin the JSON shape.

use serde::{Deserialize, Serialize};

/// Width class applied to both cells of certificate detail rows.
pub const CLASS_ONE_HALF: &str = "govuk-!-width-one-half";

/// A single table cell: either plain text or a pre-built HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TableCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

impl TableCell {
    /// Create a plain text cell.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: None,
            classes: None,
        }
    }

    /// Create an HTML cell. The caller is responsible for escaping any
    /// free-text content embedded in the fragment.
    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            text: None,
            html: Some(html.into()),
            classes: None,
        }
    }

    /// Set the CSS classes on this cell.
    #[must_use]
    pub fn classes(mut self, classes: &str) -> Self {
        self.classes = Some(classes.to_string());
        self
    }
}

/// One row of a summary list: a key cell, a value cell, and optional
/// actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryListRow {
    pub key: TableCell,
    pub value: TableCell,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
}

impl SummaryListRow {
    /// Create a row with no actions.
    #[must_use]
    pub const fn new(key: TableCell, value: TableCell) -> Self {
        Self {
            key,
            value,
            actions: None,
        }
    }

    /// Certificate detail row: text key and text value, both half width.
    #[must_use]
    pub fn detail_text(key: &str, value: impl Into<String>) -> Self {
        Self::new(
            TableCell::text(key).classes(CLASS_ONE_HALF),
            TableCell::text(value).classes(CLASS_ONE_HALF),
        )
    }

    /// Certificate detail row: text key and HTML value, both half width.
    #[must_use]
    pub fn detail_html(key: &str, html: impl Into<String>) -> Self {
        Self::new(
            TableCell::text(key).classes(CLASS_ONE_HALF),
            TableCell::html(html).classes(CLASS_ONE_HALF),
        )
    }

    /// Attach actions to this row.
    #[must_use]
    pub fn with_actions(mut self, actions: Actions) -> Self {
        self.actions = Some(actions);
        self
    }
}

/// Action links rendered against a summary list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Actions {
    pub items: Vec<ActionLink>,
}

/// A single action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLink {
    pub href: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
}

impl ActionLink {
    /// Create an action link.
    #[must_use]
    pub fn new(href: &str, text: &str, visually_hidden_text: Option<&str>) -> Self {
        Self {
            href: href.to_string(),
            text: text.to_string(),
            visually_hidden_text: visually_hidden_text.map(ToString::to_string),
        }
    }
}
