//! CSRF token lookup from a cookie header.
//!
//! The server issues the token in the `csrftoken` cookie and expects it back
//! on every mutating request, either as the `csrfmiddlewaretoken` form field
//! or the `X-CSRFToken` header.

/// Name of the cookie carrying the token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Form field the server reads the token from.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Header the server reads the token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Opaque CSRF credential.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Extract the token from a `Cookie` header value.
    #[must_use]
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        cookie_value(header, CSRF_COOKIE_NAME).map(Self)
    }

    /// The raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CsrfToken([REDACTED])")
    }
}

/// Return the percent-decoded value of cookie `name`, if present.
///
/// The header is split on `;` and each pair trimmed; the first pair starting
/// with `name=` wins.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .and_then(percent_decode)
}

fn percent_decode(input: &str) -> Option<String> {
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return None;
                }
                let hi = (bytes[i + 1] as char).to_digit(16)? as u8;
                let lo = (bytes[i + 2] as char).to_digit(16)? as u8;
                out.push((hi << 4) | lo);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}
