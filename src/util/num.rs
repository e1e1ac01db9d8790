/// Floored modulo of `value` by `modulus`.
///
/// The result follows the sign of the modulus, unlike `%`, which follows the
/// dividend. A zero modulus yields NaN.
///
/// ## Parameters
/// - `value`: The dividend.
/// - `modulus`: The divisor whose sign the result follows.
///
/// ## Returns
/// `value - (value / modulus).floor() * modulus`.
///
/// ## Example
/// ```
/// use reckon::util::num::floored_mod;
///
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(7.0, -3.0), -2.0);
/// ```
#[must_use]
pub fn floored_mod(value: f64, modulus: f64) -> f64 {
    value - (value / modulus).floor() * modulus
}

/// Collapses a value to the unit carrying its sign: `-1.0` for negative
/// values, `1.0` for everything else, including zero and NaN.
///
/// ## Example
/// ```
/// use reckon::util::num::signed_unit;
///
/// assert_eq!(signed_unit(-3.5), -1.0);
/// assert_eq!(signed_unit(0.0), 1.0);
/// assert_eq!(signed_unit(f64::NAN), 1.0);
/// ```
#[must_use]
pub fn signed_unit(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
