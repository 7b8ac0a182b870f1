/*!
String helpers that work on narrow, wide, and decoded text alike.

Every function takes slices of some `Unit`: `[u8]` for narrow text, `[WUnit]` for wide text, or `[char]`.  Case-insensitive operations and case conversion only affect ASCII letters; other units are compared and copied exactly.
*/
use std::error::Error as StdError;
use std::fmt::{self, Display, LowerHex};
use std::str::{self, FromStr};
use encoding::Unit;

/// The UTF-8 encoding of U+FEFF, the byte order mark.
pub const UTF8_BOM: &'static [u8; 3] = b"\xef\xbb\xbf";

/// Returns `true` if `s` is well-formed UTF-8.
pub fn is_valid_utf8(s: &[u8]) -> bool {
    str::from_utf8(s).is_ok()
}

/// Returns `true` if `s` begins with a UTF-8 byte order mark.
pub fn starts_with_bom(s: &[u8]) -> bool {
    s.starts_with(UTF8_BOM)
}

/// Returns `s` without leading whitespace.
pub fn trim_left<U: Unit>(s: &[U]) -> &[U] {
    match s.iter().position(|u| !u.is_space()) {
        Some(start) => &s[start..],
        None => &s[s.len()..],
    }
}

/// Returns `s` without trailing whitespace.
pub fn trim_right<U: Unit>(s: &[U]) -> &[U] {
    match s.iter().rposition(|u| !u.is_space()) {
        Some(last) => &s[..last + 1],
        None => &s[..0],
    }
}

/// Returns `s` without leading or trailing whitespace.
pub fn trim<U: Unit>(s: &[U]) -> &[U] {
    trim_right(trim_left(s))
}

pub fn to_upper<U: Unit>(s: &[U]) -> Vec<U> {
    s.iter().map(|u| u.to_ascii_upper()).collect()
}

pub fn to_lower<U: Unit>(s: &[U]) -> Vec<U> {
    s.iter().map(|u| u.to_ascii_lower()).collect()
}

pub fn starts_with<U: Unit>(s: &[U], prefix: &[U]) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with<U: Unit>(s: &[U], suffix: &[U]) -> bool {
    s.ends_with(suffix)
}

/// Like `starts_with`, ignoring ASCII case.
pub fn istarts_with<U: Unit>(s: &[U], prefix: &[U]) -> bool {
    prefix.len() <= s.len() && equals_ignore_case(&s[..prefix.len()], prefix)
}

/// Like `ends_with`, ignoring ASCII case.
pub fn iends_with<U: Unit>(s: &[U], suffix: &[U]) -> bool {
    suffix.len() <= s.len() && equals_ignore_case(&s[s.len() - suffix.len()..], suffix)
}

pub fn equals_ignore_case<U: Unit>(a: &[U], b: &[U]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(&x, &y)| x.to_ascii_lower() == y.to_ascii_lower())
}

/**
Splits text into tokens separated by runs of delimiters.

Any unit in the delimiter set separates tokens.  Leading, trailing, and repeated delimiters never produce empty tokens.

```
use strcodec::strutil::Tokenizer;

let tokens: Vec<&[u8]> = Tokenizer::new(b"  a b,,c ", b" ,").collect();
assert_eq!(tokens, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
```
*/
#[derive(Clone, Debug)]
pub struct Tokenizer<'a, U: 'a> {
    s: &'a [U],
    delimiters: &'a [U],
    offset: usize,
}

impl<'a, U: Unit> Tokenizer<'a, U> {
    pub fn new(s: &'a [U], delimiters: &'a [U]) -> Self {
        Tokenizer {
            s: s,
            delimiters: delimiters,
            offset: 0,
        }
    }

    /**
    Returns the next token, using a different set of delimiters for this token only.
    */
    pub fn next_with(&mut self, delimiters: &[U]) -> Option<&'a [U]> {
        let rest = &self.s[self.offset..];
        let start = match rest.iter().position(|u| !delimiters.contains(u)) {
            Some(start) => start,
            None => {
                self.offset = self.s.len();
                return None;
            },
        };

        let len = rest[start..].iter()
            .position(|u| delimiters.contains(u))
            .unwrap_or(rest.len() - start);

        self.offset += start + len;
        Some(&rest[start..start + len])
    }

    /// Starts again from the beginning of the text.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a, U: Unit> Iterator for Tokenizer<'a, U> {
    type Item = &'a [U];

    fn next(&mut self) -> Option<Self::Item> {
        let delimiters = self.delimiters;
        self.next_with(delimiters)
    }
}

/// Collects the tokens of `s`.  See `Tokenizer`.
pub fn split<'a, U: Unit>(s: &'a [U], delimiters: &'a [U]) -> Vec<&'a [U]> {
    Tokenizer::new(s, delimiters).collect()
}

/**
An error from `from_string` or `from_hex_string`.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The units do not decode to text.
    InvalidText,
    /// The text does not spell a value of the requested type.
    InvalidValue(String),
}

impl Display for ParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::InvalidText => write!(fmt, "input is not valid text"),
            ParseError::InvalidValue(ref s) => write!(fmt, "cannot parse {:?}", s),
        }
    }
}

impl StdError for ParseError {}

/**
Parses a value from text, ignoring surrounding whitespace.

`bool` is spelled `true` or `false`.
*/
pub fn from_string<T, U>(s: &[U]) -> Result<T, ParseError> where T: FromStr, U: Unit {
    let text = U::decode(trim(s)).ok_or(ParseError::InvalidText)?;
    text.parse().map_err(|_| ParseError::InvalidValue(text))
}

/**
Integers that can be parsed from hexadecimal.
*/
pub trait FromHex: Sized {
    fn from_hex(s: &str) -> Option<Self>;
}

macro_rules! from_hex_impl {
    ($($ty_name:ident)*) => {
        $(
            impl FromHex for $ty_name {
                fn from_hex(s: &str) -> Option<Self> {
                    $ty_name::from_str_radix(s, 16).ok()
                }
            }
        )*
    };
}

from_hex_impl! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

/**
Parses a hexadecimal value, ignoring surrounding whitespace and an optional `0x` or `0X` prefix.
*/
pub fn from_hex_string<T, U>(s: &[U]) -> Result<T, ParseError> where T: FromHex, U: Unit {
    let text = U::decode(trim(s)).ok_or(ParseError::InvalidText)?;
    let digits = if text.starts_with("0x") || text.starts_with("0X") {
        &text[2..]
    } else {
        &text[..]
    };
    match T::from_hex(digits) {
        Some(v) => Ok(v),
        None => Err(ParseError::InvalidValue(text.clone())),
    }
}

/// Formats a value as text.  `bool` is spelled `true` or `false`.
pub fn to_string<U: Unit, T: ?Sized + Display>(value: &T) -> Vec<U> {
    let mut out = Vec::new();
    U::push_str(&mut out, &value.to_string());
    out
}

/**
Formats a value in lowercase hexadecimal, zero-padded on the left to at least `width` digits.

```
let s: Vec<u8> = strcodec::strutil::to_hex_string(&123, 4);
assert_eq!(s, b"007b");
```
*/
pub fn to_hex_string<U: Unit, T: ?Sized + LowerHex>(value: &T, width: usize) -> Vec<U> {
    let mut out = Vec::new();
    U::push_str(&mut out, &format!("{:0width$x}", value, width = width));
    out
}
