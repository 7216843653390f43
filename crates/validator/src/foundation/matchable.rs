//! `AsMatchable`: turning an arbitrary value into the text a pattern sees.
//!
//! Validators accept values of unconstrained type. Before matching, the value
//! is stringified with loose-typing conventions: `true` becomes `"true"`,
//! `None` becomes `"null"`, `5.0` becomes `"5"`, a list is joined with commas
//! and a JSON object becomes `"[object Object]"`. Text is borrowed, never
//! copied.

use std::borrow::Cow;
use std::fmt;

/// String form of an object-like value.
pub const OBJECT_STRING: &str = "[object Object]";

/// String form of an absent value (`None`, JSON `null`).
pub const NULL_STRING: &str = "null";

/// String form of the unit value.
pub const UNDEFINED_STRING: &str = "undefined";

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Types that can be stringified for pattern matching.
///
/// # Examples
///
/// ```
/// use litmus_validator::foundation::AsMatchable;
///
/// assert_eq!(true.as_matchable(), "true");
/// assert_eq!(1234.as_matchable(), "1234");
/// assert_eq!(0.287_f64.as_matchable(), "0.287");
/// assert_eq!(1e21_f64.as_matchable(), "1e+21");
/// assert_eq!(None::<&str>.as_matchable(), "null");
/// assert_eq!(vec!["a", "b"].as_matchable(), "a,b");
/// ```
pub trait AsMatchable {
    /// Returns the string the pattern is tested against.
    fn as_matchable(&self) -> Cow<'_, str>;

    /// Whether this value is "nullish": it contributes an empty string when
    /// joined as a list element.
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T: AsMatchable + ?Sized> AsMatchable for &T {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        (**self).as_matchable()
    }

    #[inline]
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl AsMatchable for str {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AsMatchable for String {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl AsMatchable for Box<str> {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AsMatchable for Cow<'_, str> {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl AsMatchable for char {
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

impl AsMatchable for bool {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl AsMatchable for () {
    #[inline]
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Borrowed(UNDEFINED_STRING)
    }

    fn is_nullish(&self) -> bool {
        true
    }
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsMatchable for $ty {
                fn as_matchable(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl AsMatchable for f64 {
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Owned(number_to_string(*self))
    }
}

impl AsMatchable for f32 {
    fn as_matchable(&self) -> Cow<'_, str> {
        Cow::Owned(number_to_string(*self))
    }
}

/// Formats a float the way loosely-typed runtimes print numbers: shortest
/// round-trip digits, no trailing `.0`, and exponent notation (`1e+21`,
/// `1e-7`) outside `[1e-6, 1e21)`.
pub(crate) fn number_to_string<F>(value: F) -> String
where
    F: Copy + Into<f64> + fmt::Display + fmt::LowerExp,
{
    let wide: f64 = value.into();

    if wide.is_nan() {
        return "NaN".to_owned();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    // Covers -0.0 as well.
    if wide == 0.0 {
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&wide.abs()) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

// ============================================================================
// OPTIONS AND LISTS
// ============================================================================

impl<T: AsMatchable> AsMatchable for Option<T> {
    fn as_matchable(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.as_matchable(),
            None => Cow::Borrowed(NULL_STRING),
        }
    }

    fn is_nullish(&self) -> bool {
        self.as_ref().is_none_or(AsMatchable::is_nullish)
    }
}

impl<T: AsMatchable> AsMatchable for [T] {
    fn as_matchable(&self) -> Cow<'_, str> {
        join_elements(self.iter())
    }
}

impl<T: AsMatchable> AsMatchable for Vec<T> {
    fn as_matchable(&self) -> Cow<'_, str> {
        self.as_slice().as_matchable()
    }
}

impl<T: AsMatchable, const N: usize> AsMatchable for [T; N] {
    fn as_matchable(&self) -> Cow<'_, str> {
        self.as_slice().as_matchable()
    }
}

/// Joins list elements with `,`, nullish elements contributing nothing.
fn join_elements<'a, T, I>(elements: I) -> Cow<'a, str>
where
    T: AsMatchable + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut joined = String::new();
    for (i, element) in elements.enumerate() {
        if i > 0 {
            joined.push(',');
        }
        if !element.is_nullish() {
            joined.push_str(&element.as_matchable());
        }
    }
    Cow::Owned(joined)
}

// ============================================================================
// JSON VALUES
// ============================================================================

#[cfg(feature = "serde")]
impl AsMatchable for serde_json::Value {
    fn as_matchable(&self) -> Cow<'_, str> {
        use serde_json::Value;

        match self {
            Value::Null => Cow::Borrowed(NULL_STRING),
            Value::Bool(b) => b.as_matchable(),
            Value::Number(n) => Cow::Owned(json_number_to_string(n)),
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Array(items) => join_elements(items.iter()),
            Value::Object(_) => Cow::Borrowed(OBJECT_STRING),
        }
    }

    fn is_nullish(&self) -> bool {
        self.is_null()
    }
}

#[cfg(feature = "serde")]
fn json_number_to_string(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else {
        number
            .as_f64()
            .map_or_else(|| number.to_string(), number_to_string)
    }
}

// ============================================================================
// TESTS
// ============================================================================
