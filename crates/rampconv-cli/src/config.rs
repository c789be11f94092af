//! Runtime configuration for the `rampconv` host.

use std::path::PathBuf;

/// Default output directory for curve files.
const DEFAULT_OUTPUT_DIR: &str = "curves";
/// Default package path prefix for generated names.
const DEFAULT_PACKAGE_ROOT: &str = "/Game";

/// Runtime configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory curve files are written to.
    pub output_dir: PathBuf,
    /// Package path prefix, e.g. `/Game/Ramps`.
    pub package_root: String,
    /// Whether inputs are sRGB encoded.
    pub srgb: bool,
    /// Whether to log at debug level.
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: std::env::var_os("RAMPCONV_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            package_root: std::env::var("RAMPCONV_PACKAGE")
                .unwrap_or_else(|_| DEFAULT_PACKAGE_ROOT.to_string()),
            srgb: !std::env::var("RAMPCONV_LINEAR").is_ok_and(|v| is_truthy(&v)),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Package path for an asset called `asset_name`.
    pub fn package_name(&self, asset_name: &str) -> String {
        format!("{}/{asset_name}", self.package_root.trim_end_matches('/'))
    }
}

/// Interpret an environment flag: `1`, `true`, `yes` and `on` enable it.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_joins_without_double_slash() {
        let config = AppConfig {
            output_dir: PathBuf::from("out"),
            package_root: "/Game/Ramps/".to_string(),
            srgb: true,
            verbose: false,
        };
        assert_eq!(config.package_name("T_Fire"), "/Game/Ramps/T_Fire");
    }

    #[test]
    fn test_linear_flag_parses_value() {
        for on in ["1", "true", "TRUE", "yes", " on "] {
            assert!(is_truthy(on), "{on:?} should enable");
        }
        for off in ["0", "false", "no", "off", ""] {
            assert!(!is_truthy(off), "{off:?} should not enable");
        }
    }
}
