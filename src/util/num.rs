/// Renders a Lox number as program-visible text.
///
/// Integral values print without a fractional part, every other finite value
/// prints in its shortest round-trip form. Infinities and NaN print by name.
///
/// ## Parameters
/// - `value`: The number to render.
///
/// ## Returns
/// The display text of `value`.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(45.67), "45.67");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    format!("{value}")
}

/// Renders a number literal the way token dumps show it.
///
/// Unlike [`format_number`], integral values keep one decimal place so a
/// dumped `NUMBER` token always shows its floating-point nature.
///
/// ## Example
/// ```
/// use treelox::util::num::format_literal;
///
/// assert_eq!(format_literal(1.0), "1.0");
/// assert_eq!(format_literal(2.5), "2.5");
/// ```
#[must_use]
pub fn format_literal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{value:.1}");
    }

    format_number(value)
}
