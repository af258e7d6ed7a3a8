//! # Quaternion Core
//!
//! An immutable quaternion value type q = a + bi + cj + dk with:
//!
//! - **Arithmetic**: sum, difference, Hamilton product, scaling, inverse and
//!   left/right quotients
//! - **Tolerance equality**: components compare equal within [`TOLERANCE`]
//! - **Text form**: `a+bi+cj+dk`, produced by `Display` and read back by
//!   [`Quaternion::value_of`] / `FromStr`
//!
//! ## Example
//!
//! ```rust
//! use quaternion_core::{Quaternion, QuaternionError};
//!
//! let p = Quaternion::new(1.0, -2.0, -1.0, 2.0);
//! let q: Quaternion = "12.0-34.0i+1.0j+5.0k".parse().unwrap();
//!
//! assert_eq!(p.plus(&q), Quaternion::new(13.0, -36.0, 0.0, 7.0));
//! assert_eq!(q.to_string(), "12.0-34.0i+1.0j+5.0k");
//!
//! // Dividing by zero is an error, not a NaN
//! let err = p.divide_by_right(&Quaternion::zero()).unwrap_err();
//! assert!(matches!(err, QuaternionError::Division { .. }));
//! ```

pub mod error;
pub mod quaternion;
pub mod text;

pub use error::{ErrorCategory, ErrorDetail, ErrorResponse, QuaternionError, Result};
pub use quaternion::{components_match, Quaternion};

/// Absolute tolerance used by quaternion equality
pub const TOLERANCE: f64 = 0.0001;
