//! Interpretation of raw HTTP response header text.

/// Status codes whose Content-Length is trusted: 200, or the redirect range
/// 301-308. The redirect range covers transports that do not auto-follow;
/// the advertised length then describes the redirect page, not the resource.
fn trusted_status(status: u16) -> bool {
    status == 200 || (301..=308).contains(&status)
}

/// Extracts the byte size advertised by raw HTTP response header text.
///
/// `raw` holds status line(s) plus header lines of a header-only response;
/// redirect-following transports concatenate one block per hop, and the
/// first status line and first `Content-Length` header win. Returns 0 when
/// the status line is missing, the status is untrusted, or the header is
/// absent or unparseable. Pure function; same input, same output.
pub fn content_size(raw: &str) -> u64 {
    let status = status_code(raw).unwrap_or(0);
    if !trusted_status(status) {
        return 0;
    }
    content_length(raw).unwrap_or(0)
}

/// First `HTTP/1.0` or `HTTP/1.1` status line code, e.g. 200 from
/// "HTTP/1.1 200 OK". None if no such line is present.
fn status_code(raw: &str) -> Option<u16> {
    for line in raw.lines() {
        let line = line.trim();
        let rest = match line
            .strip_prefix("HTTP/1.1 ")
            .or_else(|| line.strip_prefix("HTTP/1.0 "))
        {
            Some(rest) => rest,
            None => continue,
        };
        let bytes = rest.as_bytes();
        if bytes.len() >= 3 && bytes[..3].iter().all(u8::is_ascii_digit) {
            if let Ok(code) = rest[..3].parse::<u16>() {
                return Some(code);
            }
        }
    }
    None
}

/// First `Content-Length` header value. None if the header is absent or its
/// value does not parse as u64 (garbage, negative, or overflowing).
fn content_length(raw: &str) -> Option<u64> {
    for line in raw.lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                return value.trim().parse::<u64>().ok();
            }
        }
    }
    None
}
