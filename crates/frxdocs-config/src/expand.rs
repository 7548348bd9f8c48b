//! `${VAR}` substitution in config values.

use crate::ConfigError;

/// Substitute `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without `${` are returned untouched. A reference with no default
/// whose variable is unset fails with [`ConfigError::EnvVar`] naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    if let Some(var) = first_unset_without_default(value) {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }

    Ok(shellexpand::env_with_context_no_errors(value, |var| std::env::var(var).ok()).into_owned())
}

/// Find the first `${VAR}` reference that has no default and is unset.
fn first_unset_without_default(value: &str) -> Option<&str> {
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let end = after.find('}')?;
        let name = &after[..end];
        if !name.contains(":-") && std::env::var_os(name).is_none() {
            return Some(name);
        }
        rest = &after[end + 1..];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FRXDOCS_TEST_SIMPLE", "docs.example.com");
        }
        let result = expand_env("${FRXDOCS_TEST_SIMPLE}", "server.host").unwrap();
        assert_eq!(result, "docs.example.com");
        unsafe {
            std::env::remove_var("FRXDOCS_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FRXDOCS_TEST_UNSET");
        }
        let result = expand_env("${FRXDOCS_TEST_UNSET:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FRXDOCS_TEST_MISSING");
        }
        let err = expand_env("${FRXDOCS_TEST_MISSING}", "site.repository").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FRXDOCS_TEST_MISSING"));
        assert!(err.to_string().contains("site.repository"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FRXDOCS_TEST_OWNER", "crazyfrankie");
        }
        let result = expand_env(
            "https://github.com/${FRXDOCS_TEST_OWNER}/frx",
            "site.repository",
        )
        .unwrap();
        assert_eq!(result, "https://github.com/crazyfrankie/frx");
        unsafe {
            std::env::remove_var("FRXDOCS_TEST_OWNER");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$HOST", "server.host").unwrap();
        assert_eq!(result, "$HOST");
    }
}
