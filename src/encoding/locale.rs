/*!
Classification of the ambient narrow encoding.
*/
use std::env;
use std::ffi::OsString;
use once_cell::sync::OnceCell;
use encoding::conv::{NativeServices, TextServices};

/// Environment variables consulted by `LocaleMode::from_env`, highest priority first.
pub const LOCALE_VARS: [&'static str; 3] = ["LC_CTYPE", "LC_ALL", "LANG"];

static CURRENT: OnceCell<LocaleMode> = OnceCell::new();

/**
Whether the ambient narrow ("ANSI") encoding is UTF-8.

When it is, converting between narrow text and UTF-8 is the identity, and a `Transcoder` skips the round trip through wide text.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LocaleMode {
    Utf8,
    Ansi,
}

impl LocaleMode {
    /**
    Returns the mode of the current process.

    This is computed by the platform's `TextServices` on first use, and cached for the lifetime of the process.  Later changes to the environment are *not* observed.
    */
    pub fn current() -> LocaleMode {
        *CURRENT.get_or_init(|| NativeServices::ambient().probe_locale_mode())
    }

    /**
    Classifies the locale described by the process environment.

    See `from_vars`.
    */
    pub fn from_env() -> LocaleMode {
        LocaleMode::from_vars(|name| env::var_os(name))
    }

    /**
    Classifies a locale from environment-style variables, looked up through `var`.

    The first of `LC_CTYPE`, `LC_ALL`, and `LANG` that is set to a non-empty value decides: the locale is UTF-8 if that value contains `utf` in any case.  If none of them is set, the locale is assumed to be UTF-8.
    */
    pub fn from_vars<F>(mut var: F) -> LocaleMode where F: FnMut(&str) -> Option<OsString> {
        for &name in LOCALE_VARS.iter() {
            match var(name) {
                Some(ref value) if !value.is_empty() => {
                    return LocaleMode::from_locale_name(&value.to_string_lossy());
                },
                _ => (),
            }
        }
        LocaleMode::Utf8
    }

    /**
    Classifies a locale by name, such as `en_US.UTF-8` or `de_DE.ISO-8859-1`.
    */
    pub fn from_locale_name(name: &str) -> LocaleMode {
        if name.to_ascii_lowercase().contains("utf") {
            LocaleMode::Utf8
        } else {
            LocaleMode::Ansi
        }
    }

    #[inline]
    pub fn is_utf8(self) -> bool {
        self == LocaleMode::Utf8
    }
}

/**
Returns `true` if the ambient narrow encoding of this process is UTF-8.

Equivalent to `LocaleMode::current().is_utf8()`.
*/
pub fn locale_is_utf8() -> bool {
    LocaleMode::current().is_utf8()
}
