use std::borrow::Cow;
use std::mem;

use http::uri::Authority;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

use crate::{Error, Result};

/// Signing context for request.
///
/// The URI of the request is left untouched; only the headers are taken out
/// while signing and handed back by [`SigningRequest::apply`].
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, as sent on the wire.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let authority = parts.uri.authority().cloned().ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;

        Ok(SigningRequest {
            method: parts.method.clone(),
            authority,
            path: parts.uri.path().to_string(),
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        Ok(())
    }

    /// Get the path percent decoded.
    pub fn path_percent_decoded(&self) -> Cow<str> {
        percent_encoding::percent_decode_str(&self.path).decode_utf8_lossy()
    }

    /// Normalize header value by trimming surrounding whitespace.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let starting_index = bs
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(bs.len());
        let ending_offset = bs
            .iter()
            .rev()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(0);
        let ending_index = (bs.len() - ending_offset).max(starting_index);

        // This can't fail because we started with a valid HeaderValue and then only trimmed whitespace
        *v = HeaderValue::from_bytes(&bs[starting_index..ending_index])
            .expect("invalid header value")
    }

    /// Get `(lowercase name, value)` pairs of headers accepted by filter.
    ///
    /// Header names in [`HeaderMap`] are always lowercase already.
    pub fn header_to_vec_with_filter(
        &self,
        filter: impl Fn(&str) -> bool,
    ) -> Result<Vec<(String, String)>> {
        self.headers
            .iter()
            .filter(|(k, _)| filter(k.as_str()))
            .map(|(k, v)| Ok((k.as_str().to_string(), v.to_str()?.to_string())))
            .collect()
    }

    /// Convert sorted headers to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(mut headers: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via header name.
        headers.sort();

        for (idx, (k, v)) in headers.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::put(uri)
            .header("Content-Type", "application/json")
            .header("x-bce-date", "  2015-04-27T08:23:49Z\t")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_build_and_apply() -> Result<()> {
        let mut p = parts("http://vcr.bj.baidubce.com/v1/text?a=1&b=%2Fx&flag");
        let mut req = SigningRequest::build(&mut p)?;

        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.authority.as_str(), "vcr.bj.baidubce.com");
        assert_eq!(req.path, "/v1/text");
        assert_eq!(
            req.query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "/x".to_string()),
                ("flag".to_string(), "".to_string()),
            ]
        );
        assert!(p.headers.is_empty());

        req.headers.insert("x-bce-security-token", "token".parse()?);
        req.apply(&mut p)?;

        assert_eq!(p.headers.len(), 3);
        assert_eq!(
            p.uri.to_string(),
            "http://vcr.bj.baidubce.com/v1/text?a=1&b=%2Fx&flag"
        );
        Ok(())
    }

    #[test]
    fn test_build_without_authority() {
        let mut p = parts("/v1/text");
        let err = SigningRequest::build(&mut p).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_header_value_normalize() {
        let cases = vec![
            ("  2015-04-27T08:23:49Z\t", "2015-04-27T08:23:49Z"),
            ("text/plain", "text/plain"),
            ("   ", ""),
            ("", ""),
        ];

        for (input, expected) in cases {
            let mut v = HeaderValue::from_str(input).unwrap();
            SigningRequest::header_value_normalize(&mut v);
            assert_eq!(v.to_str().unwrap(), expected, "Failed on input: {input:?}");
        }
    }

    #[test]
    fn test_header_to_string() -> Result<()> {
        let mut p = parts("http://vcr.bj.baidubce.com/v1/text");
        let req = SigningRequest::build(&mut p)?;

        let headers = req.header_to_vec_with_filter(|k| k.starts_with("x-bce-") || k == "content-type")?;
        assert_eq!(
            SigningRequest::header_to_string(headers, ":", "\n"),
            "content-type:application/json\nx-bce-date:  2015-04-27T08:23:49Z\t"
        );
        Ok(())
    }
}
