#[cfg(unix)]
pub use self::posix::*;

#[cfg(windows)]
pub use self::win32::*;

#[cfg(unix)]
mod posix {
    use libc::{c_char, size_t, wchar_t};

    // TODO: move into libc

    /*
    We have no way of knowing what encodings we'll have to deal with, so 16 was chosen as a (hopefully) excessive upper bound.

    Keep in mind that there are serious encodings in existence (though probably *not* being used as the C MB encoding) that can require up to *12 bytes* for a single character.

    Normally, you would get this from `limits.h`, except it's not even necessarily a compile-time constant.  Bah!
    */
    pub const MB_LEN_MAX: usize = 16;

    pub const ILLEGAL: size_t = -1isize as size_t;
    pub const INCOMPLETE: size_t = -2isize as size_t;
    /// A character was produced without consuming input; only some stateful encodings do this.
    pub const STORED: size_t = -3isize as size_t;

    extern "C" {
        pub fn mbrtowc(dest: *mut wchar_t, src: *const c_char, n: size_t, mbs: *mut mbstate_t) -> size_t;
        pub fn wcrtomb(dest: *mut c_char, src: wchar_t, mbs: *mut mbstate_t) -> size_t;
    }

    /*
    The real layout differs between C runtimes: 8 bytes for glibc and musl, 128 for Darwin.  The state is only ever zero-initialised and passed by pointer, so an over-sized buffer is fine everywhere.
    */
    #[derive(Copy, Clone)]
    #[repr(C)]
    pub struct mbstate_t {
        _data: [u64; 16]
    }

    impl mbstate_t {
        pub fn initial() -> Self {
            mbstate_t { _data: [0; 16] }
        }
    }
}

#[cfg(windows)]
mod win32 {
    use libc::{c_char, c_int, c_uint, wchar_t};

    pub const CP_ACP: c_uint = 0;
    pub const CP_UTF8: c_uint = 65001;

    pub const MB_ERR_INVALID_CHARS: u32 = 0x0000_0008;
    pub const WC_ERR_INVALID_CHARS: u32 = 0x0000_0080;

    #[link(name="kernel32")]
    extern "system" {
        pub fn GetACP() -> c_uint;

        pub fn MultiByteToWideChar(
            code_page: c_uint,
            flags: u32,
            mb_str: *const c_char,
            mb_len: c_int,
            wc_str: *mut wchar_t,
            wc_len: c_int,
        ) -> c_int;

        pub fn WideCharToMultiByte(
            code_page: c_uint,
            flags: u32,
            wc_str: *const wchar_t,
            wc_len: c_int,
            mb_str: *mut c_char,
            mb_len: c_int,
            default_char: *const c_char,
            used_default_char: *mut c_int,
        ) -> c_int;
    }
}
