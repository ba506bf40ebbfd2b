/// Number formatting helpers.
///
/// Lox has a single numeric type, a 64-bit float. This module renders those
/// floats the way the language prints them: integral values without a
/// trailing fraction and non-finite values by name.
pub mod num;
