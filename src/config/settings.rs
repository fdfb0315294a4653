//! Environment-derived settings.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::types::NpmRegistry;

/// Log filter used when neither `NY_LOG` nor `RUST_LOG` is set.
///
/// Warnings only, so a normal run writes nothing of ny's own to stderr.
pub const DEFAULT_LOG_FILTER: &str = "ny=warn";

/// Settings read from the environment.
///
/// | variable | effect |
/// |---|---|
/// | `NY_REGISTRY` | registry base URL (else `npm_config_registry`, else npmjs.org) |
/// | `NY_LOG` | log filter (else `RUST_LOG`, else [`DEFAULT_LOG_FILTER`]) |
/// | `NY_SKIP_TYPES` | truthy value disables `@types/*` installation |
/// | `NO_COLOR` | disables styled output |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registry consulted for `@types/*` packages.
    pub registry: String,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Whether `ny add` may install companion types packages.
    pub install_types: bool,
    /// Whether output may be styled.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry: NpmRegistry::DEFAULT_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            install_types: true,
            color: true,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Build settings from raw variables, skipping those that are not UTF-8.
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();
        Self::from_vars(&vars)
    }

    /// Build settings from a set of variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let non_empty = |key: &str| vars.get(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            registry: non_empty("NY_REGISTRY")
                .or_else(|| non_empty("npm_config_registry"))
                .cloned()
                .unwrap_or(defaults.registry),
            log_filter: non_empty("NY_LOG")
                .or_else(|| non_empty("RUST_LOG"))
                .cloned()
                .unwrap_or(defaults.log_filter),
            install_types: !non_empty("NY_SKIP_TYPES").is_some_and(|value| is_truthy(value)),
            color: !vars.contains_key("NO_COLOR"),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(Settings::from_vars(&HashMap::new()), Settings::default());
    }

    #[test]
    fn registry_prefers_ny_variable() {
        let settings = Settings::from_vars(&vars(&[
            ("NY_REGISTRY", "https://ny.example.com"),
            ("npm_config_registry", "https://npm.example.com"),
        ]));
        assert_eq!(settings.registry, "https://ny.example.com");
    }

    #[test]
    fn registry_falls_back_to_npm_config() {
        let settings =
            Settings::from_vars(&vars(&[("npm_config_registry", "https://npm.example.com")]));
        assert_eq!(settings.registry, "https://npm.example.com");
    }

    #[test]
    fn empty_values_are_ignored() {
        let settings = Settings::from_vars(&vars(&[("NY_REGISTRY", " "), ("NY_LOG", "")]));
        assert_eq!(settings.registry, NpmRegistry::DEFAULT_URL);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_filter_prefers_ny_log() {
        let settings = Settings::from_vars(&vars(&[("NY_LOG", "ny=debug"), ("RUST_LOG", "info")]));
        assert_eq!(settings.log_filter, "ny=debug");

        let settings = Settings::from_vars(&vars(&[("RUST_LOG", "info")]));
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn skip_types_understands_falsy_values() {
        assert!(!Settings::from_vars(&vars(&[("NY_SKIP_TYPES", "1")])).install_types);
        assert!(!Settings::from_vars(&vars(&[("NY_SKIP_TYPES", "yes")])).install_types);
        assert!(Settings::from_vars(&vars(&[("NY_SKIP_TYPES", "0")])).install_types);
        assert!(Settings::from_vars(&vars(&[("NY_SKIP_TYPES", "false")])).install_types);
    }

    #[test]
    fn no_color_disables_color() {
        assert!(!Settings::from_vars(&vars(&[("NO_COLOR", "")])).color);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let settings = Settings::from_os_vars([
            (
                OsString::from("NY_JUNK"),
                OsString::from_vec(vec![0xff, 0xfe]),
            ),
            (
                OsString::from("NY_REGISTRY"),
                OsString::from_vec(vec![b'h', 0xff]),
            ),
            (OsString::from("NY_LOG"), OsString::from("ny=debug")),
        ]);

        assert_eq!(settings.registry, NpmRegistry::DEFAULT_URL);
        assert_eq!(settings.log_filter, "ny=debug");
    }
}
