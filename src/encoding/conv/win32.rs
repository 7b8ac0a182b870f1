/*!
Text services built on the Windows code page functions.

The narrow encoding is a Windows code page; by default the ANSI code page, `CP_ACP`.  Note that this is *not* necessarily the same code page as the C runtime's multibyte encoding.
*/
use std::ptr;
use libc::{c_char, c_int, c_uint, wchar_t};
use encoding::{LocaleMode, WUnit};
use ffi::{CP_ACP, CP_UTF8, GetACP, MB_ERR_INVALID_CHARS, MultiByteToWideChar, WC_ERR_INVALID_CHARS, WideCharToMultiByte};
use super::{MbsToWcError, Trap, TextServices, WcsToMbError};

/**
Conversions through a Windows code page.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Services {
    code_page: c_uint,
}

impl Services {
    /// Services for the current ANSI code page.
    pub fn ambient() -> Self {
        Services::with_code_page(CP_ACP)
    }

    /// Services for an explicit code page, such as `1252` or `936`.
    pub fn with_code_page(code_page: c_uint) -> Self {
        Services { code_page: code_page }
    }

    /// The code page actually in effect, with `CP_ACP` resolved.
    pub fn code_page(&self) -> c_uint {
        match self.code_page {
            CP_ACP => unsafe { GetACP() },
            cp => cp,
        }
    }
}

impl TextServices for Services {
    fn probe_locale_mode(&self) -> LocaleMode {
        if self.code_page() == CP_UTF8 {
            LocaleMode::Utf8
        } else {
            LocaleMode::Ansi
        }
    }

    fn locale_to_wide(&self, src: &[u8], trap: Trap) -> Result<Vec<WUnit>, MbsToWcError> {
        if src.is_empty() {
            return Ok(Vec::new());
        }
        if src.len() > c_int::max_value() as usize {
            return Err(MbsToWcError::OutOfBufferAt(0));
        }

        let flags = match trap {
            Trap::Strict => MB_ERR_INVALID_CHARS,
            Trap::Replace => 0,
        };
        let src_ptr = src.as_ptr() as *const c_char;
        let src_len = src.len() as c_int;

        unsafe {
            let dest_len = MultiByteToWideChar(self.code_page, flags, src_ptr, src_len, ptr::null_mut(), 0);
            if dest_len <= 0 {
                return Err(MbsToWcError::Rejected);
            }

            let mut dest: Vec<wchar_t> = vec![0; dest_len as usize];
            let dest_len = MultiByteToWideChar(self.code_page, flags, src_ptr, src_len, dest.as_mut_ptr(), dest_len);
            if dest_len <= 0 {
                return Err(MbsToWcError::Rejected);
            }
            dest.truncate(dest_len as usize);

            Ok(dest.into_iter().map(WUnit::new).collect())
        }
    }

    fn wide_to_locale(&self, src: &[WUnit], trap: Trap) -> Result<Vec<u8>, WcsToMbError> {
        if src.is_empty() {
            return Ok(Vec::new());
        }
        if src.len() > c_int::max_value() as usize {
            return Err(WcsToMbError::Rejected);
        }

        let src_units: Vec<wchar_t> = src.iter().map(|wcu| wcu.raw()).collect();
        let src_ptr = src_units.as_ptr();
        let src_len = src_units.len() as c_int;

        // The UTF-8 code page refuses a default character, and reports failure through a flag instead.
        let is_utf8 = self.code_page() == CP_UTF8;
        let flags = match (trap, is_utf8) {
            (Trap::Strict, true) => WC_ERR_INVALID_CHARS,
            _ => 0,
        };
        let default_char: &[u8; 2] = b"?\0";
        let default_ptr = if is_utf8 { ptr::null() } else { default_char.as_ptr() as *const c_char };

        unsafe {
            let dest_len = WideCharToMultiByte(self.code_page, flags, src_ptr, src_len,
                ptr::null_mut(), 0, default_ptr, ptr::null_mut());
            if dest_len <= 0 {
                return Err(WcsToMbError::Rejected);
            }

            let mut used_default: c_int = 0;
            let used_default_ptr = if is_utf8 { ptr::null_mut() } else { &mut used_default as *mut c_int };

            let mut dest: Vec<u8> = vec![0; dest_len as usize];
            let dest_len = WideCharToMultiByte(self.code_page, flags, src_ptr, src_len,
                dest.as_mut_ptr() as *mut c_char, dest_len, default_ptr, used_default_ptr);
            if dest_len <= 0 {
                return Err(WcsToMbError::Rejected);
            }
            if trap == Trap::Strict && used_default != 0 {
                return Err(WcsToMbError::Rejected);
            }
            dest.truncate(dest_len as usize);

            Ok(dest)
        }
    }
}
