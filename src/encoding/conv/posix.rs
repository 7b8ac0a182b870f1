/*!
Text services built on the C runtime's `mbrtowc` and `wcrtomb`.

The narrow encoding is the `LC_CTYPE` category of a C locale.  Rather than changing the process-wide locale with `setlocale`, every conversion installs its own locale handle on the calling thread with `uselocale`, and restores the previous one before returning.
*/
use std::cmp;
use std::error::Error as StdError;
use std::ffi::CString;
use std::fmt;
use std::ptr;
use libc::{self, c_char, locale_t, size_t, wchar_t};
use encoding::{LocaleMode, WUnit, replacement_unit};
use ffi::{ILLEGAL, INCOMPLETE, MB_LEN_MAX, STORED, mbrtowc, mbstate_t, wcrtomb};
use super::{MbsToWcError, Trap, TextServices, WcsToMbError};

/**
Conversions through the narrow encoding of a C locale.

The locale handle is owned, and freed on drop.
*/
pub struct Services {
    /// `None` means "whatever the calling thread is already using".
    locale: Option<locale_t>,
    mode: LocaleMode,
}

// Locale objects are not tied to the thread that created them.
unsafe impl Send for Services {}

impl Services {
    /**
    Services for the locale named by the environment, as `setlocale(LC_CTYPE, "")` would choose it.

    If that locale is not installed, conversions use the calling thread's current locale instead.
    */
    pub fn ambient() -> Self {
        Services {
            locale: unsafe { new_ctype_locale(b"\0".as_ptr() as *const c_char) },
            mode: LocaleMode::from_env(),
        }
    }

    /**
    Services for a named locale, such as `"C.UTF-8"` or `"de_DE.ISO-8859-1"`.

    # Failure

    Fails if the name contains a zero byte, or if the C runtime does not know the locale.
    */
    pub fn with_locale(name: &str) -> Result<Self, LocaleError> {
        let c_name = match CString::new(name) {
            Ok(c_name) => c_name,
            Err(_) => return Err(LocaleError::InvalidName(name.to_owned())),
        };

        match unsafe { new_ctype_locale(c_name.as_ptr()) } {
            Some(locale) => Ok(Services {
                locale: Some(locale),
                mode: LocaleMode::from_locale_name(name),
            }),
            None => Err(LocaleError::Unavailable(name.to_owned())),
        }
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Services")
            .field("locale", &self.locale)
            .field("mode", &self.mode)
            .finish()
    }
}

impl Drop for Services {
    fn drop(&mut self) {
        if let Some(locale) = self.locale.take() {
            unsafe { libc::freelocale(locale) };
        }
    }
}

impl TextServices for Services {
    fn probe_locale_mode(&self) -> LocaleMode {
        self.mode
    }

    fn locale_to_wide(&self, src: &[u8], trap: Trap) -> Result<Vec<WUnit>, MbsToWcError> {
        let _guard = UseLocale::install(self.locale);

        let mut out = Vec::with_capacity(src.len());
        let mut state = mbstate_t::initial();
        let mut at = 0;

        while at < src.len() {
            let avail = cmp::min(src.len() - at, MB_LEN_MAX);
            let mut wc: wchar_t = 0;

            let r = unsafe {
                mbrtowc(&mut wc,
                    src[at..].as_ptr() as *const c_char,
                    avail,
                    &mut state)
            };

            let err = match classify(r, avail) {
                Step::Char(len) => {
                    out.push(WUnit::new(wc));
                    at += len;
                    continue;
                },
                Step::Illegal => MbsToWcError::InvalidAt(at),
                Step::Incomplete => MbsToWcError::Incomplete,
                Step::OutOfBuffer => MbsToWcError::OutOfBufferAt(at),
            };

            if trap == Trap::Strict {
                return Err(err);
            }

            out.push(replacement_unit());
            state = mbstate_t::initial();
            at = match err {
                MbsToWcError::Incomplete => src.len(),
                _ => at + 1,
            };
        }

        Ok(out)
    }

    fn wide_to_locale(&self, src: &[WUnit], trap: Trap) -> Result<Vec<u8>, WcsToMbError> {
        let _guard = UseLocale::install(self.locale);

        let mut out = Vec::with_capacity(src.len());
        let mut state = mbstate_t::initial();
        let mut buf = [0 as c_char; MB_LEN_MAX];

        for (at, wcu) in src.iter().enumerate() {
            match unsafe { wcrtomb(buf.as_mut_ptr(), wcu.raw(), &mut state) } {
                ILLEGAL => {
                    if trap == Trap::Strict {
                        return Err(WcsToMbError::InvalidAt(at));
                    }
                    out.push(b'?');
                    state = mbstate_t::initial();
                },
                len if len > MB_LEN_MAX => {
                    // We can *probably* assume memory corruption.
                    panic!("wcrtomb has corrupted memory");
                },
                len => out.extend(buf[..len].iter().map(|&u| u as u8)),
            }
        }

        Ok(out)
    }
}

/// What a single `mbrtowc` call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    /// Produced a character from this many units.  Zero means it was left over from an earlier call.
    Char(usize),
    Illegal,
    Incomplete,
    OutOfBuffer,
}

fn classify(r: size_t, avail: usize) -> Step {
    match r {
        ILLEGAL => Step::Illegal,

        // We handed over every remaining unit, so the input ends mid-character.
        INCOMPLETE if avail < MB_LEN_MAX => Step::Incomplete,

        INCOMPLETE => Step::OutOfBuffer,

        STORED => Step::Char(0),

        // The null character; one unit in every encoding we can meet here.
        0 => Step::Char(1),

        len => Step::Char(len),
    }
}

unsafe fn new_ctype_locale(name: *const c_char) -> Option<locale_t> {
    let locale = libc::newlocale(libc::LC_CTYPE_MASK, name, ptr::null_mut());
    if locale.is_null() {
        None
    } else {
        Some(locale)
    }
}

/**
Installs a locale on the calling thread until dropped.
*/
struct UseLocale {
    prev: Option<locale_t>,
}

impl UseLocale {
    fn install(locale: Option<locale_t>) -> Self {
        let prev = match locale {
            Some(locale) => {
                let prev = unsafe { libc::uselocale(locale) };
                if prev.is_null() { None } else { Some(prev) }
            },
            None => None,
        };
        UseLocale { prev: prev }
    }
}

impl Drop for UseLocale {
    fn drop(&mut self) {
        if let Some(prev) = self.prev {
            unsafe { libc::uselocale(prev) };
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleError {
    InvalidName(String),
    Unavailable(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LocaleError::InvalidName(ref name) => write!(fmt, "invalid locale name {:?}", name),
            LocaleError::Unavailable(ref name) => write!(fmt, "locale {:?} is not available", name),
        }
    }
}

impl StdError for LocaleError {}
