//! Shared primitives used across NetFX crates.

use core::fmt;

use nfx_dom::DomError;

/// Result alias used across the workspace.
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Top-level error type for the page pipeline and the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserError {
    pub code: &'static str,
    pub message: String,
}

impl BrowserError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The location could not be turned into markup (missing file, unsupported scheme).
    pub fn source_unavailable(location: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            "source.unavailable",
            format!("no markup available for `{location}`: {reason}"),
        )
    }
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BrowserError {}

impl From<DomError> for BrowserError {
    fn from(error: DomError) -> Self {
        let code = match error {
            DomError::AlreadyRooted => "dom.already_rooted",
            DomError::InvalidParent(_) => "dom.invalid_parent",
            DomError::InvalidNode(_) => "dom.invalid_node",
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::BrowserError;
    use nfx_dom::DomError;

    #[test]
    fn display_includes_code_and_message() {
        let error = BrowserError::new("source.unavailable", "nothing here");
        assert_eq!(error.to_string(), "source.unavailable: nothing here");
    }

    #[test]
    fn dom_errors_keep_their_kind_as_code() {
        let error = BrowserError::from(DomError::AlreadyRooted);
        assert_eq!(error.code, "dom.already_rooted");
        assert!(error.message.contains("root"));
    }

    #[test]
    fn source_unavailable_names_the_location() {
        let error = BrowserError::source_unavailable("file:///missing.html", "not found");
        assert_eq!(error.code, "source.unavailable");
        assert!(error.message.contains("file:///missing.html"));
    }
}
