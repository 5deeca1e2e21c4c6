//! Pipeline configuration.

use tracing::warn;

pub const FIREWALL_ENV: &str = "GATEHOUSE_FIREWALL";
pub const HIDE_ACCOUNT_STATUS_ENV: &str = "GATEHOUSE_HIDE_ACCOUNT_STATUS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Name of the authentication context tokens are issued for.
    pub firewall: String,

    /// Report unknown accounts and account-status failures as bad credentials.
    pub hide_account_status: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            firewall: "main".to_string(),
            hide_account_status: true,
        }
    }
}

impl PipelineConfig {
    /// Load from `GATEHOUSE_FIREWALL` and `GATEHOUSE_HIDE_ACCOUNT_STATUS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source. Missing keys keep defaults;
    /// unparseable values keep defaults and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(firewall) = lookup(FIREWALL_ENV) {
            let firewall = firewall.trim();
            if firewall.is_empty() {
                warn!("{FIREWALL_ENV} is empty; using '{}'", config.firewall);
            } else {
                config.firewall = firewall.to_string();
            }
        }

        if let Some(raw) = lookup(HIDE_ACCOUNT_STATUS_ENV) {
            match parse_flag(&raw) {
                Some(flag) => config.hide_account_status = flag,
                None => warn!(
                    value = %raw,
                    "{HIDE_ACCOUNT_STATUS_ENV} is not a boolean; using {}",
                    config.hide_account_status
                ),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_hide_account_status() {
        let config = PipelineConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, PipelineConfig::default());
        assert!(config.hide_account_status);
        assert_eq!(config.firewall, "main");
    }

    #[test]
    fn reads_both_keys() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            (FIREWALL_ENV, " admin "),
            (HIDE_ACCOUNT_STATUS_ENV, "No"),
        ]));
        assert_eq!(config.firewall, "admin");
        assert!(!config.hide_account_status);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            (FIREWALL_ENV, "   "),
            (HIDE_ACCOUNT_STATUS_ENV, "maybe"),
        ]));
        assert_eq!(config, PipelineConfig::default());
    }
}
