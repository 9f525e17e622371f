/// Absolute tolerance used for float `==`, `!=`, `<=` and `>=`.
pub const FLOAT_TOLERANCE: f64 = 1e-5;

/// Tests two floats for approximate equality within an absolute tolerance.
///
/// Two values compare equal when they are bitwise equal or their absolute
/// difference is below `tolerance`. Infinities of the same sign compare
/// equal through the bitwise branch.
///
/// # Parameters
/// - `left`: First operand.
/// - `right`: Second operand.
/// - `tolerance`: Maximum absolute difference considered equal.
///
/// # Returns
/// `true` if the values are approximately equal.
///
/// # Example
/// ```
/// use cixac::util::num::{almost_equal, FLOAT_TOLERANCE};
///
/// assert!(almost_equal(1.000001, 1.0, FLOAT_TOLERANCE));
/// assert!(!almost_equal(1.1, 1.0, FLOAT_TOLERANCE));
/// ```
#[must_use]
pub fn almost_equal(left: f64, right: f64, tolerance: f64) -> bool {
    left == right || (left - right).abs() < tolerance
}

/// Computes the Python-style remainder of two integers.
///
/// The result carries the sign of the divisor, so `-4 % 10` is `6` and
/// `10 % -4` is `-2`. The quotient/remainder identity
/// `(a / b) * b + a % b == a` holds for truncating division.
///
/// # Parameters
/// - `value`: The dividend.
/// - `modulus`: The divisor; must not be zero.
///
/// # Returns
/// The remainder with the divisor's sign.
///
/// # Example
/// ```
/// use cixac::util::num::python_mod_i64;
///
/// assert_eq!(python_mod_i64(-4, 10), 6);
/// assert_eq!(python_mod_i64(10, -4), -2);
/// assert_eq!(python_mod_i64(4, 10), 4);
/// ```
#[must_use]
pub fn python_mod_i64(value: i64, modulus: i64) -> i64 {
    let remainder = value.wrapping_rem(modulus);
    if (remainder < 0 && modulus > 0) || (remainder > 0 && modulus < 0) {
        remainder + modulus
    } else {
        remainder
    }
}

/// Computes the Python-style remainder of two floats.
///
/// Like [`python_mod_i64`], the result carries the sign of the divisor.
///
/// # Parameters
/// - `value`: The dividend.
/// - `modulus`: The divisor.
///
/// # Returns
/// The remainder with the divisor's sign.
///
/// # Example
/// ```
/// use cixac::util::num::{almost_equal, python_mod_f64, FLOAT_TOLERANCE};
///
/// assert!(almost_equal(python_mod_f64(-4.5, 10.55), 6.05, FLOAT_TOLERANCE));
/// assert!(almost_equal(python_mod_f64(10.5, -4.5), -3.0, FLOAT_TOLERANCE));
/// ```
#[must_use]
pub fn python_mod_f64(value: f64, modulus: f64) -> f64 {
    let remainder = value % modulus;
    if (remainder < 0.0 && modulus > 0.0) || (remainder > 0.0 && modulus < 0.0) {
        remainder + modulus
    } else {
        remainder
    }
}
