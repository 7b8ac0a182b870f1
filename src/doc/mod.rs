/*!
Additional documentation.

# Components

These tables summarise the provided components.

## Codecs

| Module | Direction | Policy | Notes |
| ------ | --------- | ------ | ----- |
| `base64` | both | Strict decode | RFC 4648 standard alphabet, `=` padding.  Decoding stops after the first padded group. |
| `percent` | both | Lenient decode | Escapes everything outside printable ASCII, plus space and ``$&+,/:;=?@"<>#%{}|\^~[]` ``.  `+` decodes to space. |
| `xml` | escape only | Lenient | Output is always well-formed UTF-8 made of XML 1.0 characters. |

## Text forms

| Form | Rust type | Encoding |
| ---- | --------- | -------- |
| UTF-8 | `[u8]`, `str` | Possibly invalid UTF-8 on input; always valid on output from a lenient function. |
| Narrow | `[u8]` | The `LC_CTYPE` encoding of a C locale on POSIX, or a Windows code page. |
| Wide | `[WUnit]` | UTF-32 on POSIX, UTF-16 on Windows.  Possibly invalid. |

## Text services

See the `encoding::conv` module.

| Type | Platform | Narrow encoding |
| ---- | -------- | --------------- |
| `posix::Services` | Unix | A C locale, via `newlocale`/`uselocale`, `mbrtowc`, and `wcrtomb`. |
| `win32::Services` | Windows | A code page, via `MultiByteToWideChar` and `WideCharToMultiByte`. |
| `passthrough::Services` | Any | UTF-8. |

# Common Misconceptions and Mistakes

* *"Decoding never fails."*  Base64 decoding does.  Percent decoding and XML escaping don't.  Check which one you are calling.

* *"`percent::encode` produces `application/x-www-form-urlencoded`."*  Space is encoded as `%20`, not `+`.  `percent::decode` accepts both.

* *"The locale is UTF-8 if `LANG` says so."*  `LC_CTYPE` and `LC_ALL` are consulted first.  If none of the three is set, the locale is *assumed* to be UTF-8.

* *"Changing `LANG` at runtime changes the locale mode."*  It's computed once per process.  Build a `Transcoder` with an explicit `LocaleMode` if you need something else.

* *"The narrow encoding and Windows ANSI are the same thing."*  On Windows, the C runtime's multibyte encoding and the ANSI code page can be set independently.  This crate uses the ANSI code page.

* *"Wide text is UTF-32."*  On Windows, it's UTF-16.

* *"Wide text is valid Unicode."*  Foreign code is free to hand over lone surrogates.  The lenient conversions replace them; the strict ones report them.

* *"`locale_to_utf8` always returns valid UTF-8."*  When the locale is UTF-8, it returns its input unchanged.
*/
