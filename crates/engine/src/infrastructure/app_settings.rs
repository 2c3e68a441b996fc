//! Badge engine settings
//!
//! Defaults match the reference policy (20 unread identifiers, a single
//! well-known storage key, five minute poll). Every value can be overridden
//! from the environment; invalid overrides are logged and ignored.
//!
//! Supported environment variables:
//! - THREADWATCH_STATE_KEY: storage key for the persisted unread state
//! - THREADWATCH_MAX_UNREAD: bound on the unread set (range: 1-1000)
//! - THREADWATCH_POLL_SECS: scheduler interval in seconds (>= 1)
//! - THREADWATCH_TOOLTIP_SINGULAR / THREADWATCH_TOOLTIP_PLURAL: tooltip text,
//!   `{count}` is replaced with the unread count

use std::time::Duration;

use threadwatch_domain::{TooltipTemplate, UnreadLimit};

pub const DEFAULT_STATE_KEY: &str = "discussionBadgeState";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub const ENV_STATE_KEY: &str = "THREADWATCH_STATE_KEY";
pub const ENV_MAX_UNREAD: &str = "THREADWATCH_MAX_UNREAD";
pub const ENV_POLL_SECS: &str = "THREADWATCH_POLL_SECS";
pub const ENV_TOOLTIP_SINGULAR: &str = "THREADWATCH_TOOLTIP_SINGULAR";
pub const ENV_TOOLTIP_PLURAL: &str = "THREADWATCH_TOOLTIP_PLURAL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSettings {
    /// Key the unread state is stored under.
    pub state_key: String,
    /// Bound on the persisted unread set.
    pub max_unread: UnreadLimit,
    pub tooltip: TooltipTemplate,
    /// How often the poller runs a reconciliation.
    pub poll_interval: Duration,
}

impl Default for BadgeSettings {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            max_unread: UnreadLimit::default(),
            tooltip: TooltipTemplate::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl BadgeSettings {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        settings.apply_overrides(lookup);
        settings
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_STATE_KEY) {
            let key = key.trim();
            if key.is_empty() {
                tracing::warn!("{ENV_STATE_KEY} is empty, ignoring");
            } else {
                self.state_key = key.to_string();
            }
        }

        if let Some(val) = lookup(ENV_MAX_UNREAD) {
            match val.trim().parse::<usize>() {
                Ok(size) => match UnreadLimit::new(size) {
                    Ok(limit) => {
                        self.max_unread = limit;
                        tracing::info!(size, "Applied {ENV_MAX_UNREAD} environment variable");
                    }
                    Err(e) => {
                        tracing::warn!(size, error = %e, "{ENV_MAX_UNREAD} out of range, ignoring");
                    }
                },
                Err(_) => {
                    tracing::warn!(val = %val, "{ENV_MAX_UNREAD} is not a valid count, ignoring");
                }
            }
        }

        if let Some(val) = lookup(ENV_POLL_SECS) {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs >= 1 => {
                    self.poll_interval = Duration::from_secs(secs);
                }
                _ => {
                    tracing::warn!(val = %val, "{ENV_POLL_SECS} must be a positive integer, ignoring");
                }
            }
        }

        let singular = lookup(ENV_TOOLTIP_SINGULAR);
        let plural = lookup(ENV_TOOLTIP_PLURAL);
        if singular.is_some() || plural.is_some() {
            self.tooltip = TooltipTemplate::new(
                singular.unwrap_or_else(|| self.tooltip.singular().to_string()),
                plural.unwrap_or_else(|| self.tooltip.plural().to_string()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let settings = BadgeSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, BadgeSettings::default());
        assert_eq!(settings.max_unread.value(), 20);
        assert_eq!(settings.state_key, "discussionBadgeState");
    }

    #[test]
    fn applies_valid_overrides() {
        let settings = BadgeSettings::from_lookup(lookup(&[
            (ENV_STATE_KEY, "customKey"),
            (ENV_MAX_UNREAD, "50"),
            (ENV_POLL_SECS, "30"),
            (ENV_TOOLTIP_PLURAL, "{count} unread"),
        ]));
        assert_eq!(settings.state_key, "customKey");
        assert_eq!(settings.max_unread.value(), 50);
        assert_eq!(settings.poll_interval, Duration::from_secs(30));
        assert_eq!(settings.tooltip.render(3), "3 unread");
        assert_eq!(
            settings.tooltip.render(1),
            TooltipTemplate::default().render(1)
        );
    }

    #[test]
    fn ignores_invalid_overrides() {
        let settings = BadgeSettings::from_lookup(lookup(&[
            (ENV_STATE_KEY, "   "),
            (ENV_MAX_UNREAD, "0"),
            (ENV_POLL_SECS, "soon"),
        ]));
        assert_eq!(settings, BadgeSettings::default());
    }
}
