//! Command output type.

/// What a command produced.
///
/// `Clear` is a signal, not text: the session erases its transcript instead
/// of appending a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to display under the submitted command.
    Text(String),
    /// Erase the whole transcript.
    Clear,
}

impl CommandOutput {
    /// Create a text output.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns the text, or `None` for the clear signal.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Clear => None,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }
}
