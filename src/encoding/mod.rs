/*!
Text units and encoding conversion.

A *unit* is one element of an encoded string: a byte for narrow text, a `WUnit` for wide text, or a `char` for already-decoded text.  The `Unit` trait lets the helpers in `strutil` work on all three.
*/
use std::str;

pub mod conv;
pub mod locale;

pub use self::locale::{LocaleMode, locale_is_utf8};

#[cfg(any(unix, windows))]
pub use libc::wchar_t;

/// Stand-in for targets where `libc` has no C runtime to describe.
#[cfg(not(any(unix, windows)))]
#[allow(non_camel_case_types)]
pub type wchar_t = u32;

/**
One unit of wide text, in the current C runtime wide encoding.

On Windows this is a UTF-16 code unit.  Everywhere else it is a UTF-32 code point.  Neither is guaranteed to be valid: a wide string handed over by foreign code can contain lone surrogates or values past U+10FFFF.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(C)]
pub struct WUnit(wchar_t);

impl WUnit {
    #[inline]
    pub fn new(raw: wchar_t) -> Self {
        WUnit(raw)
    }

    /// Returns the raw `wchar_t` value.
    #[inline]
    pub fn raw(self) -> wchar_t {
        self.0
    }

    /**
    Constructs a unit from a numeric value.

    Values that do not fit in `wchar_t` are truncated, exactly as a C cast would.
    */
    #[inline]
    pub fn from_u32(v: u32) -> Self {
        WUnit(v as wchar_t)
    }

    /// Returns the numeric value of this unit, reinterpreted as unsigned.
    #[inline]
    pub fn to_u32(self) -> u32 {
        self.0 as u32
    }
}

/**
Abstracts over the unit types text can be stored in.

Only ASCII is given any meaning by this trait.  Non-ASCII units are carried along untouched, which keeps every implementation byte-for-byte lossless.
*/
pub trait Unit: Copy + Eq {
    /// Constructs the unit for an ASCII byte.
    fn from_ascii(b: u8) -> Self;

    /// Returns the ASCII byte this unit stands for, if any.
    fn to_ascii(self) -> Option<u8>;

    /// Appends the encoding of `s` to `out`.
    fn push_str(out: &mut Vec<Self>, s: &str);

    /// Decodes `units` into a Rust string, if they form valid text.
    fn decode(units: &[Self]) -> Option<String>;

    #[inline]
    fn is_space(self) -> bool {
        match self.to_ascii() {
            Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(0x0b) | Some(0x0c) => true,
            _ => false,
        }
    }

    #[inline]
    fn to_ascii_upper(self) -> Self {
        match self.to_ascii() {
            Some(b) if b.is_ascii_lowercase() => Self::from_ascii(b.to_ascii_uppercase()),
            _ => self,
        }
    }

    #[inline]
    fn to_ascii_lower(self) -> Self {
        match self.to_ascii() {
            Some(b) if b.is_ascii_uppercase() => Self::from_ascii(b.to_ascii_lowercase()),
            _ => self,
        }
    }
}

impl Unit for u8 {
    #[inline]
    fn from_ascii(b: u8) -> Self {
        b
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        if self.is_ascii() { Some(self) } else { None }
    }

    fn push_str(out: &mut Vec<Self>, s: &str) {
        out.extend_from_slice(s.as_bytes());
    }

    fn decode(units: &[Self]) -> Option<String> {
        str::from_utf8(units).ok().map(String::from)
    }
}

impl Unit for WUnit {
    #[inline]
    fn from_ascii(b: u8) -> Self {
        WUnit::from_u32(b as u32)
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        let v = self.to_u32();
        if v < 0x80 { Some(v as u8) } else { None }
    }

    fn push_str(out: &mut Vec<Self>, s: &str) {
        conv::wide::encode_str(out, s);
    }

    fn decode(units: &[Self]) -> Option<String> {
        conv::try_wide_to_utf8(units).ok()
    }
}

impl Unit for char {
    #[inline]
    fn from_ascii(b: u8) -> Self {
        b as char
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        if self.is_ascii() { Some(self as u8) } else { None }
    }

    fn push_str(out: &mut Vec<Self>, s: &str) {
        out.extend(s.chars());
    }

    fn decode(units: &[Self]) -> Option<String> {
        Some(units.iter().cloned().collect())
    }
}

/// The Unicode replacement character as a wide unit.  It fits in a single unit on every platform.
pub fn replacement_unit() -> WUnit {
    WUnit::from_u32(0xfffd)
}
