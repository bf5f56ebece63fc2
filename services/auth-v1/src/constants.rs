use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Prefix of the auth string and the `Authorization` header.
pub const BCE_AUTH_VERSION: &str = "bce-auth-v1";
/// Signature expiration used when the caller does not pass one.
pub const DEFAULT_EXPIRATION_IN_SECONDS: u64 = 1800;

// Headers used in bce services.
pub const X_BCE_DATE: &str = "x-bce-date";
pub const X_BCE_SECURITY_TOKEN: &str = "x-bce-security-token";
pub const X_BCE_REQUEST_ID: &str = "x-bce-request-id";
pub const X_BCE_PREFIX: &str = "x-bce-";
pub const CONTENT_MD5: &str = "content-md5";

// Env values used in bce services.
pub const BCE_ACCESS_KEY_ID: &str = "BCE_ACCESS_KEY_ID";
pub const BCE_SECRET_ACCESS_KEY: &str = "BCE_SECRET_ACCESS_KEY";
pub const BCE_SESSION_TOKEN: &str = "BCE_SESSION_TOKEN";

/// AsciiSet for BCE UriEncode.
///
/// Every byte is encoded except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static BCE_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// [`BCE_URI_ENCODE_SET`] that keeps `/`, used for the canonical URI.
pub static BCE_PATH_ENCODE_SET: AsciiSet = BCE_URI_ENCODE_SET.remove(b'/');
