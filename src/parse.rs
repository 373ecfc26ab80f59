//! Parsing of the raw HTTP/1.x header lines delivered by curl's header
//! callback. Each line arrives with its trailing CRLF intact.

use http::header::{HeaderName, HeaderValue};
use http::{StatusCode, Version};

/// Parse a response status line, with or without a reason phrase.
pub(crate) fn parse_status_line(mut line: &[u8]) -> Option<(Version, StatusCode)> {
    if let Some(stripped) = line.strip_suffix(b"\r\n") {
        line = stripped;
    }

    if !line.starts_with(b"HTTP/") {
        return None;
    }

    let mut parts = line.splitn(3, |&byte| byte == b' ');

    let version = match parts.next()? {
        b"HTTP/2" | b"HTTP/2.0" => Version::HTTP_2,
        b"HTTP/1.1" => Version::HTTP_11,
        b"HTTP/1.0" => Version::HTTP_10,
        b"HTTP/0.9" => Version::HTTP_09,
        _ => Version::default(),
    };

    let status = StatusCode::from_bytes(parts.next()?).ok()?;

    Some((version, status))
}

/// Parse a `name: value` header line.
pub(crate) fn parse_header(mut line: &[u8]) -> Option<(HeaderName, HeaderValue)> {
    if let Some(stripped) = line.strip_suffix(b"\r\n") {
        line = stripped;
    }

    let colon = line.iter().position(|&byte| byte == b':')?;

    let name = HeaderName::from_bytes(&line[..colon]).ok()?;

    let mut value = &line[colon + 1..];
    while let Some(trimmed) = value.strip_prefix(b" ") {
        value = trimmed;
    }

    Some((name, HeaderValue::from_bytes(value).ok()?))
}
