//! Runtime configuration.
//!
//! Everything here is read from the environment once, on first use.

use std::env::{self, VarError};

use once_cell::sync::Lazy;

/// Tolerance used when no `LINALG_EPSILON` override is present.
pub const DEFAULT_EPSILON: f64 = 1e-6;

const EPSILON_VAR: &str = "LINALG_EPSILON";

static EPSILON: Lazy<f64> = Lazy::new(|| match env::var(EPSILON_VAR) {
    Ok(v) => match parse_epsilon(&v) {
        Some(eps) => {
            log::debug!("using epsilon {eps} from `{EPSILON_VAR}`");
            eps
        }
        None => {
            log::warn!(
                "invalid value set for `{EPSILON_VAR}` variable: '{v}'; using default of {DEFAULT_EPSILON}"
            );
            DEFAULT_EPSILON
        }
    },
    Err(VarError::NotPresent) => DEFAULT_EPSILON,
    Err(VarError::NotUnicode(s)) => {
        log::warn!(
            "invalid value set for `{EPSILON_VAR}` variable: {}; using default of {DEFAULT_EPSILON}",
            s.to_string_lossy()
        );
        DEFAULT_EPSILON
    }
});

/// Returns the tolerance used for approximate comparisons and divisor checks.
pub fn epsilon() -> f64 {
    *EPSILON
}

fn parse_epsilon(s: &str) -> Option<f64> {
    let eps = s.trim().parse::<f64>().ok()?;
    (eps.is_finite() && eps > 0.0).then_some(eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_epsilon("1e-9"), Some(1e-9));
        assert_eq!(parse_epsilon(" 0.001 "), Some(0.001));
        assert_eq!(parse_epsilon("0"), None);
        assert_eq!(parse_epsilon("-1e-6"), None);
        assert_eq!(parse_epsilon("inf"), None);
        assert_eq!(parse_epsilon("NaN"), None);
        assert_eq!(parse_epsilon("tiny"), None);
    }
}
