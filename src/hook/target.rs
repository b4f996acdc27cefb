//! Target URL resolution.

use url::Url;

use crate::config::{EnvSource, TARGET_URL_VAR};
use crate::hook::outcome::HookError;

/// Read and parse the probe target from `env`.
///
/// A whitespace-only or unparsable value fails before any request is sent,
/// so a bad `TEST_URL` is reported as a configuration error rather than
/// burning the whole retry budget on requests that cannot succeed.
pub fn resolve_target(env: &impl EnvSource) -> Result<Url, HookError> {
    let raw = env.var(TARGET_URL_VAR).unwrap_or_default();
    let value = raw.trim();

    if value.is_empty() {
        return Err(HookError::MissingTarget {
            var: TARGET_URL_VAR,
        });
    }

    let invalid = |reason: String| HookError::InvalidTarget {
        var: TARGET_URL_VAR,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        "http" | "https" => Err(invalid("missing host".to_string())),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(value: Option<&str>) -> HashMap<String, String> {
        value
            .map(|v| HashMap::from([(TARGET_URL_VAR.to_string(), v.to_string())]))
            .unwrap_or_default()
    }

    #[test]
    fn test_resolves_trimmed_http_url() {
        let url = resolve_target(&env(Some(" http://alb.example:9001/ "))).unwrap();
        assert_eq!(url.as_str(), "http://alb.example:9001/");
    }

    #[test]
    fn test_whitespace_only_target_fails_fast_as_missing() {
        for value in [None, Some(""), Some("   ")] {
            assert_eq!(
                resolve_target(&env(value)).unwrap_err(),
                HookError::MissingTarget { var: "TEST_URL" }
            );
        }
    }

    #[test]
    fn test_unparsable_target_fails_fast_without_retrying() {
        for value in ["svc:9001", "ftp://svc/", "not a url"] {
            let err = resolve_target(&env(Some(value))).unwrap_err();
            assert!(matches!(err, HookError::InvalidTarget { .. }), "{value}");
            assert!(err.is_configuration());
        }
    }
}
