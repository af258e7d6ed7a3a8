//! Text form of quaternions: `a+bi+cj+dk`
//!
//! Formatting always writes exactly one sign before each imaginary
//! coefficient. Parsing accepts a deliberately narrow grammar: four decimal
//! numbers with at most one fractional digit each, so values carrying more
//! precision do not survive a format/parse round trip.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{QuaternionError, Result};
use crate::quaternion::Quaternion;

/// Anchored grammar of a quaternion literal, one capture per component
const LITERAL_PATTERN: &str =
    r"^([-+]?[0-9]+\.?[0-9]?)([-+][0-9]+\.?[0-9]?)i([-+][0-9]+\.?[0-9]?)j([-+][0-9]+\.?[0-9]?)k$";

fn literal_regex() -> &'static Regex {
    static LITERAL: OnceLock<Regex> = OnceLock::new();
    LITERAL.get_or_init(|| Regex::new(LITERAL_PATTERN).expect("literal pattern is valid"))
}

/// Shortest round-trip decimal form; integral values keep a `.0` suffix
fn decimal(x: f64) -> String {
    format!("{:?}", x)
}

fn write_signed(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_sign_negative() && !x.is_nan() {
        write!(f, "{}", decimal(x))
    } else {
        write!(f, "+{}", decimal(x))
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", decimal(self.real()))?;
        write_signed(f, self.i())?;
        f.write_str("i")?;
        write_signed(f, self.j())?;
        f.write_str("j")?;
        write_signed(f, self.k())?;
        f.write_str("k")
    }
}

impl Quaternion {
    /// Parse a literal of the form produced by `to_string`
    ///
    /// ```rust
    /// use quaternion_core::Quaternion;
    ///
    /// let q = Quaternion::value_of("-1-2i+3j-4.5k").unwrap();
    /// assert_eq!(q, Quaternion::new(-1.0, -2.0, 3.0, -4.5));
    /// assert!(Quaternion::value_of("1+2i").is_err());
    /// ```
    pub fn value_of(s: &str) -> Result<Self> {
        let caps = literal_regex()
            .captures(s)
            .ok_or_else(|| QuaternionError::format(s))?;

        let component = |idx: usize| -> Result<f64> {
            caps[idx]
                .parse::<f64>()
                .map_err(|_| QuaternionError::format(s))
        };

        Ok(Self::new(
            component(1)?,
            component(2)?,
            component(3)?,
            component(4)?,
        ))
    }
}

impl FromStr for Quaternion {
    type Err = QuaternionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::value_of(s)
    }
}
