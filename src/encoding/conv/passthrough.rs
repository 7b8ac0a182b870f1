/*!
Text services for targets with no narrow encoding of their own.

Narrow text is taken to be UTF-8, so conversions reduce to UTF-8/wide conversions.  Also useful wherever conversions must not depend on the environment.
*/
use encoding::{LocaleMode, WUnit};
use super::{MbsToWcError, Trap, TextServices, WcsToMbError, WcToUniError};
use super::{try_utf8_to_wide, utf8_to_wide, wide};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Services;

impl Services {
    pub fn ambient() -> Self {
        Services
    }
}

impl TextServices for Services {
    fn probe_locale_mode(&self) -> LocaleMode {
        LocaleMode::Utf8
    }

    fn locale_to_wide(&self, src: &[u8], trap: Trap) -> Result<Vec<WUnit>, MbsToWcError> {
        match trap {
            Trap::Replace => Ok(utf8_to_wide(src)),
            Trap::Strict => try_utf8_to_wide(src).map_err(|err| match err.error_len() {
                Some(_) => MbsToWcError::InvalidAt(err.valid_up_to()),
                None => MbsToWcError::Incomplete,
            }),
        }
    }

    fn wide_to_locale(&self, src: &[WUnit], trap: Trap) -> Result<Vec<u8>, WcsToMbError> {
        let mut out = String::with_capacity(src.len());
        for r in wide::WcToUniIter::new(src.iter().cloned()) {
            match (r, trap) {
                (Ok(c), _) => out.push(c),
                (Err(_), Trap::Replace) => out.push('?'),
                (Err(WcToUniError::InvalidAt(at)), Trap::Strict) => return Err(WcsToMbError::InvalidAt(at)),
                (Err(WcToUniError::Incomplete), Trap::Strict) => return Err(WcsToMbError::InvalidAt(src.len() - 1)),
            }
        }
        Ok(out.into_bytes())
    }
}
