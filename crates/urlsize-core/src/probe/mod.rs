//! Header-only HTTP probing.
//!
//! Uses the curl crate (libcurl) to fetch response headers without a body
//! and interpret `Content-Length` into a byte size for the target.

mod interpret;

pub use interpret::content_size;

use std::str;
use std::time::Duration;

use url::Url;

use crate::config::UrlsizeConfig;
use crate::error::InspectError;
use crate::target::Target;

/// Inspects the target's URL with one header-only request and returns the
/// target with either its size or an error filled in.
///
/// Exactly one outbound request per call; no retries. Transport failures are
/// recorded on the target instead of aborting the batch. A URL that does not
/// parse is rejected before any network I/O.
pub fn inspect(mut target: Target, cfg: &UrlsizeConfig) -> Target {
    if let Err(err) = Url::parse(target.url()) {
        target.add_error(InspectError::Transport(err.to_string()).to_string());
        return target;
    }

    match fetch_headers(target.url(), cfg) {
        Ok(raw) => {
            let size = content_size(&raw);
            tracing::debug!("probed {}: {} bytes", target.url(), size);
            target.set_size(size);
        }
        Err(err) => {
            tracing::debug!("probe of {} failed: {}", target.url(), err);
            target.add_error(err.to_string());
        }
    }
    target
}

/// Returns the empty-invocation target: no URL, one explanatory error.
pub fn inspect_none() -> Target {
    let mut target = Target::default();
    target.add_error(InspectError::NoTarget.to_string());
    target
}

/// Performs the HEAD request and returns the raw header text. Redirect hops
/// contribute one header block each when `follow_redirects` is on.
fn fetch_headers(url: &str, cfg: &UrlsizeConfig) -> Result<String, InspectError> {
    let mut raw = String::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.nobody(true).map_err(transport)?; // HEAD request
    easy.follow_location(cfg.follow_redirects).map_err(transport)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .map_err(transport)?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))
        .map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    raw.push_str(s);
                }
                true
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    Ok(raw)
}

/// Maps a curl error to the transport arm, falling back to the unknown arm
/// when curl has no diagnostic at all.
fn transport(err: curl::Error) -> InspectError {
    let reason = err.to_string();
    if reason.is_empty() {
        InspectError::UnknownTransport
    } else {
        InspectError::Transport(reason)
    }
}
