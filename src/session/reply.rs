use std::fmt;

/// Outcome of one user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Trimmed text from the model
    Model(String),
    /// Turn limit reached; fixed farewell
    Closing(String),
    /// The completion call failed; carries the user-facing error line
    Failed(String),
}

impl Reply {
    pub(crate) fn text(&self) -> &str {
        match self {
            Reply::Model(text) | Reply::Closing(text) | Reply::Failed(text) => text.as_str(),
        }
    }

    pub(crate) fn is_closing(&self) -> bool {
        matches!(self, Reply::Closing(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
