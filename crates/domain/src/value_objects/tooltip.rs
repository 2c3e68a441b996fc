//! Localizable badge tooltip text.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the unread count.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Singular/plural message pair used to render the badge tooltip.
///
/// Both messages may contain [`COUNT_PLACEHOLDER`]; the singular form is used
/// only when the count is exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipTemplate {
    singular: String,
    plural: String,
}

impl TooltipTemplate {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Render the message for `count` unread items.
    pub fn render(&self, count: u32) -> String {
        let template = if count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        template.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

impl Default for TooltipTemplate {
    fn default() -> Self {
        Self::new(
            "{count} of your discussions has new comments",
            "{count} of your discussions have new comments",
        )
    }
}
