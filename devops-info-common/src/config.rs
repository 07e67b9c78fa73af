//! Configuration defaults and environment value parsing
//!
//! Values are read once at startup (see the service's `Config`) and passed
//! down explicitly. Nothing here touches the process environment.

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Default debug mode
pub const DEFAULT_DEBUG: bool = false;

/// Log filter directive used when debug mode is off and `RUST_LOG` is unset
pub const INFO_DIRECTIVE: &str = "devops_info_service=info,devops_info_common=info,tower_http=info";

/// Log filter directive used when debug mode is on and `RUST_LOG` is unset
pub const DEBUG_DIRECTIVE: &str =
    "devops_info_service=debug,devops_info_common=debug,tower_http=debug";

/// Parse a boolean-like `DEBUG` value.
///
/// Only `"true"` (any case, surrounding whitespace ignored) enables debug
/// mode. Anything else, including `"1"` and `"yes"`, is false.
pub fn parse_debug_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Default tracing filter directive for the given debug mode
pub fn log_directive(debug: bool) -> &'static str {
    if debug {
        DEBUG_DIRECTIVE
    } else {
        INFO_DIRECTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_in_any_case_enables_debug() {
        assert!(parse_debug_flag("true"));
        assert!(parse_debug_flag("True"));
        assert!(parse_debug_flag("TRUE"));
        assert!(parse_debug_flag(" true\n"));
    }

    #[test]
    fn test_other_values_disable_debug() {
        for value in ["false", "False", "", "1", "yes", "on", "truthy"] {
            assert!(!parse_debug_flag(value), "{:?} should be false", value);
        }
    }

    #[test]
    fn test_log_directive_follows_debug_flag() {
        assert!(log_directive(true).contains("devops_info_service=debug"));
        assert!(log_directive(false).contains("devops_info_service=info"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_HOST, "0.0.0.0");
        assert_eq!(DEFAULT_PORT, 5000);
        assert!(!DEFAULT_DEBUG);
    }
}
