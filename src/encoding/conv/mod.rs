/*!
Encoding conversion support.

Text moves between three forms: UTF-8 (`&[u8]`/`String`), the narrow encoding of the current locale (`&[u8]`), and wide text (`[WUnit]`).  Wide text is the intermediate form; narrow-to-UTF-8 conversions go through it unless the locale is already UTF-8.

# Policies

The plain functions are *lenient*: they always produce output.  Undecodable input becomes U+FFFD, and characters the narrow encoding cannot represent become `?`.

The `try_` variants are *strict*: they fail on the first bad unit, and report where it was.
*/
use std::error::Error as StdError;
use std::fmt;
use std::str::{self, Utf8Error};
use encoding::{LocaleMode, WUnit};

pub mod passthrough;

#[cfg(unix)]
pub mod posix;

#[cfg(windows)]
pub mod win32;

#[cfg(not(windows))]
#[path="utf32.rs"]
pub mod wide;

#[cfg(windows)]
#[path="utf16.rs"]
pub mod wide;

/// The `TextServices` implementation for the target platform.
#[cfg(unix)]
pub type NativeServices = self::posix::Services;

/// The `TextServices` implementation for the target platform.
#[cfg(windows)]
pub type NativeServices = self::win32::Services;

/// The `TextServices` implementation for the target platform.
#[cfg(not(any(unix, windows)))]
pub type NativeServices = self::passthrough::Services;

/**
What to do with input that cannot be converted.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Stop, and report an error.
    Strict,
    /// Substitute U+FFFD when decoding, or `?` when encoding, and carry on.
    Replace,
}

/**
Conversions between the narrow encoding of a locale and wide text.

This is the only place platform code lives.  Everything else in this module is built on top of it.

With `Trap::Replace`, an implementation only fails when the platform refuses the conversion as a whole, such as for an unknown Windows code page.  The lenient `Transcoder` methods turn that into empty output.
*/
pub trait TextServices {
    /// Classifies the narrow encoding these services convert from and to.
    fn probe_locale_mode(&self) -> LocaleMode;

    fn locale_to_wide(&self, src: &[u8], trap: Trap) -> Result<Vec<WUnit>, MbsToWcError>;

    fn wide_to_locale(&self, src: &[WUnit], trap: Trap) -> Result<Vec<u8>, WcsToMbError>;
}

impl<'a, P> TextServices for &'a P where P: TextServices + ?Sized {
    fn probe_locale_mode(&self) -> LocaleMode {
        (**self).probe_locale_mode()
    }

    fn locale_to_wide(&self, src: &[u8], trap: Trap) -> Result<Vec<WUnit>, MbsToWcError> {
        (**self).locale_to_wide(src, trap)
    }

    fn wide_to_locale(&self, src: &[WUnit], trap: Trap) -> Result<Vec<u8>, WcsToMbError> {
        (**self).wide_to_locale(src, trap)
    }
}

/**
Converts between UTF-8, wide, and narrow text for one locale.

A `Transcoder` pairs a `TextServices` value with a `LocaleMode`.  The mode decides whether UTF-8/narrow conversions can be skipped entirely.  Supplying both explicitly makes conversions independent of the process environment:

```
use strcodec::encoding::LocaleMode;
use strcodec::encoding::conv::Transcoder;
use strcodec::encoding::conv::passthrough::Services;

let tc = Transcoder::new(Services, LocaleMode::Utf8);
assert_eq!(tc.locale_to_utf8(b"gar\xc3\xa7on"), b"gar\xc3\xa7on");
```
*/
#[derive(Clone, Debug)]
pub struct Transcoder<P> {
    services: P,
    mode: LocaleMode,
}

impl Transcoder<NativeServices> {
    /**
    Returns a transcoder for the ambient locale of the current process.

    The locale mode is the cached `LocaleMode::current()`.
    */
    pub fn native() -> Self {
        Transcoder::new(NativeServices::ambient(), LocaleMode::current())
    }
}

impl<P> Transcoder<P> where P: TextServices {
    pub fn new(services: P, mode: LocaleMode) -> Self {
        Transcoder {
            services: services,
            mode: mode,
        }
    }

    /**
    Constructs a transcoder, asking `services` for the locale mode.
    */
    pub fn probed(services: P) -> Self {
        let mode = services.probe_locale_mode();
        Transcoder::new(services, mode)
    }

    pub fn mode(&self) -> LocaleMode {
        self.mode
    }

    pub fn services(&self) -> &P {
        &self.services
    }

    /// See the free function `utf8_to_wide`.
    pub fn utf8_to_wide(&self, src: &[u8]) -> Vec<WUnit> {
        utf8_to_wide(src)
    }

    /// See the free function `wide_to_utf8`.
    pub fn wide_to_utf8(&self, src: &[WUnit]) -> String {
        wide_to_utf8(src)
    }

    /**
    Converts narrow text to wide text.

    Undecodable sequences become U+FFFD.  If the services refuse the input as a whole, the result is empty.
    */
    pub fn locale_to_wide(&self, src: &[u8]) -> Vec<WUnit> {
        if src.is_empty() {
            return Vec::new();
        }
        self.services.locale_to_wide(src, Trap::Replace).unwrap_or_else(|_| Vec::new())
    }

    /**
    Converts narrow text to wide text.

    # Failure

    Fails on the first sequence that cannot be decoded in the narrow encoding.
    */
    pub fn try_locale_to_wide(&self, src: &[u8]) -> Result<Vec<WUnit>, MbsToWcError> {
        if src.is_empty() {
            return Ok(Vec::new());
        }
        self.services.locale_to_wide(src, Trap::Strict)
    }

    /**
    Converts wide text to narrow text.

    Units the narrow encoding cannot represent become `?`.  If the services refuse the input as a whole, the result is empty.
    */
    pub fn wide_to_locale(&self, src: &[WUnit]) -> Vec<u8> {
        if src.is_empty() {
            return Vec::new();
        }
        self.services.wide_to_locale(src, Trap::Replace).unwrap_or_else(|_| Vec::new())
    }

    /**
    Converts wide text to narrow text.

    # Failure

    Fails on the first unit that cannot be represented in the narrow encoding.
    */
    pub fn try_wide_to_locale(&self, src: &[WUnit]) -> Result<Vec<u8>, WcsToMbError> {
        if src.is_empty() {
            return Ok(Vec::new());
        }
        self.services.wide_to_locale(src, Trap::Strict)
    }

    /**
    Converts UTF-8 to narrow text.

    If the locale is UTF-8, the input is returned unchanged, *including* any malformed sequences.  Otherwise, malformed UTF-8 becomes U+FFFD, and anything the narrow encoding cannot represent becomes `?`.
    */
    pub fn utf8_to_locale(&self, src: &[u8]) -> Vec<u8> {
        if self.mode.is_utf8() {
            return src.to_vec();
        }
        self.wide_to_locale(&utf8_to_wide(src))
    }

    /**
    Converts UTF-8 to narrow text.

    # Failure

    Fails if `src` is not valid UTF-8, or if it contains characters the narrow encoding cannot represent.
    */
    pub fn try_utf8_to_locale(&self, src: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        if self.mode.is_utf8() {
            str::from_utf8(src)?;
            return Ok(src.to_vec());
        }
        let wide = try_utf8_to_wide(src)?;
        Ok(self.try_wide_to_locale(&wide)?)
    }

    /**
    Converts narrow text to UTF-8.

    If the locale is UTF-8, the input is returned unchanged, *including* any malformed sequences.  Otherwise, undecodable sequences become U+FFFD.
    */
    pub fn locale_to_utf8(&self, src: &[u8]) -> Vec<u8> {
        if self.mode.is_utf8() {
            return src.to_vec();
        }
        wide_to_utf8(&self.locale_to_wide(src)).into_bytes()
    }

    /**
    Converts narrow text to UTF-8.

    # Failure

    Fails if `src` cannot be decoded in the narrow encoding, or decodes to something that is not Unicode.
    */
    pub fn try_locale_to_utf8(&self, src: &[u8]) -> Result<String, TranscodeError> {
        if self.mode.is_utf8() {
            return Ok(str::from_utf8(src)?.to_owned());
        }
        let wide = self.try_locale_to_wide(src)?;
        Ok(try_wide_to_utf8(&wide)?)
    }
}

/**
Converts UTF-8 to wide text.

Malformed UTF-8 sequences become U+FFFD.
*/
pub fn utf8_to_wide(src: &[u8]) -> Vec<WUnit> {
    let mut out = Vec::new();
    if !src.is_empty() {
        wide::encode_str(&mut out, &String::from_utf8_lossy(src));
    }
    out
}

/**
Converts UTF-8 to wide text.

# Failure

Fails if `src` is not valid UTF-8.
*/
pub fn try_utf8_to_wide(src: &[u8]) -> Result<Vec<WUnit>, Utf8Error> {
    let s = str::from_utf8(src)?;
    let mut out = Vec::new();
    wide::encode_str(&mut out, s);
    Ok(out)
}

/**
Converts wide text to UTF-8.

Units that do not decode to a Unicode scalar value (lone surrogates, values past U+10FFFF) become U+FFFD.
*/
pub fn wide_to_utf8(src: &[WUnit]) -> String {
    wide::WcToUniIter::new(src.iter().cloned())
        .map(|r| r.unwrap_or('\u{fffd}'))
        .collect()
}

/**
Converts wide text to UTF-8.

# Failure

Fails on the first unit that does not decode to a Unicode scalar value.
*/
pub fn try_wide_to_utf8(src: &[WUnit]) -> Result<String, WcToUniError> {
    wide::WcToUniIter::new(src.iter().cloned()).collect()
}

/**
Converts narrow text in the ambient locale to wide text.  See `Transcoder::locale_to_wide`.
*/
pub fn locale_to_wide(src: &[u8]) -> Vec<WUnit> {
    Transcoder::native().locale_to_wide(src)
}

/**
Converts wide text to narrow text in the ambient locale.  See `Transcoder::wide_to_locale`.
*/
pub fn wide_to_locale(src: &[WUnit]) -> Vec<u8> {
    Transcoder::native().wide_to_locale(src)
}

/**
Converts UTF-8 to narrow text in the ambient locale.  See `Transcoder::utf8_to_locale`.
*/
pub fn utf8_to_locale(src: &[u8]) -> Vec<u8> {
    Transcoder::native().utf8_to_locale(src)
}

/**
Converts narrow text in the ambient locale to UTF-8.  See `Transcoder::locale_to_utf8`.
*/
pub fn locale_to_utf8(src: &[u8]) -> Vec<u8> {
    Transcoder::native().locale_to_utf8(src)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WcToUniError {
    InvalidAt(usize),
    Incomplete,
}

impl fmt::Display for WcToUniError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WcToUniError::InvalidAt(at) => write!(fmt, "invalid unit at offset {}", at),
            WcToUniError::Incomplete => write!(fmt, "incomplete unit"),
        }
    }
}

impl StdError for WcToUniError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MbsToWcError {
    InvalidAt(usize),
    Incomplete,
    OutOfBufferAt(usize),
    /// The platform refused the input without saying where.
    Rejected,
}

impl fmt::Display for MbsToWcError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MbsToWcError::InvalidAt(at) => write!(fmt, "invalid unit at offset {}", at),
            MbsToWcError::Incomplete => write!(fmt, "incomplete unit"),
            MbsToWcError::OutOfBufferAt(at) => write!(fmt, "character too large to transcode at offset {}", at),
            MbsToWcError::Rejected => write!(fmt, "input contains invalid units"),
        }
    }
}

impl StdError for MbsToWcError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WcsToMbError {
    InvalidAt(usize),
    /// The platform refused the input without saying where.
    Rejected,
}

impl fmt::Display for WcsToMbError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WcsToMbError::InvalidAt(at) => write!(fmt, "unrepresentable unit at offset {}", at),
            WcsToMbError::Rejected => write!(fmt, "input contains unrepresentable units"),
        }
    }
}

impl StdError for WcsToMbError {}

/**
An error from a strict conversion between UTF-8 and narrow text.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TranscodeError {
    /// The UTF-8 side was malformed; this is the length of the valid prefix.
    InvalidUtf8At(usize),
    /// The narrow side could not be decoded.
    Decode(MbsToWcError),
    /// The narrow encoding cannot represent some character.
    Encode(WcsToMbError),
    /// The narrow side decoded to wide units that are not Unicode.
    Wide(WcToUniError),
}

impl From<Utf8Error> for TranscodeError {
    fn from(v: Utf8Error) -> Self {
        TranscodeError::InvalidUtf8At(v.valid_up_to())
    }
}

impl From<MbsToWcError> for TranscodeError {
    fn from(v: MbsToWcError) -> Self {
        TranscodeError::Decode(v)
    }
}

impl From<WcsToMbError> for TranscodeError {
    fn from(v: WcsToMbError) -> Self {
        TranscodeError::Encode(v)
    }
}

impl From<WcToUniError> for TranscodeError {
    fn from(v: WcToUniError) -> Self {
        TranscodeError::Wide(v)
    }
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TranscodeError::InvalidUtf8At(at) => write!(fmt, "invalid UTF-8 at offset {}", at),
            TranscodeError::Decode(ref err) => write!(fmt, "could not decode narrow text: {}", err),
            TranscodeError::Encode(ref err) => write!(fmt, "could not encode narrow text: {}", err),
            TranscodeError::Wide(ref err) => write!(fmt, "could not decode wide text: {}", err),
        }
    }
}

impl StdError for TranscodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            TranscodeError::InvalidUtf8At(_) => None,
            TranscodeError::Decode(ref err) => Some(err),
            TranscodeError::Encode(ref err) => Some(err),
            TranscodeError::Wide(ref err) => Some(err),
        }
    }
}
