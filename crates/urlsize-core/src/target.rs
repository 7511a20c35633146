//! Target model: one URL under inspection plus its resulting size or errors.

use crate::format::format_size;

/// One URL under inspection. A target either ends up with a usable size or
/// with at least one explanatory error, never a mix: `size()` is meaningful
/// only while `has_errors()` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    url: String,
    size: u64,
    errors: Vec<String>,
}

impl Target {
    /// Creates a target for `url` with size 0 and no errors.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: 0,
            errors: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Size in bytes. Meaningful only when `has_errors()` is false.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Human-readable size, e.g. "2.00 KB".
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }

    pub(crate) fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    /// Appends a failure message. The error log is append-only and ordered.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
