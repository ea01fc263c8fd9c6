//! Re-entrancy guard for outstanding rewrite requests.

/// The request currently awaiting a response.
///
/// While a value is held by the app, further submit and retry events are
/// ignored. It is cleared when the completion message arrives, whatever the
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InFlight {
    /// A rewrite submitted from the input panel.
    Rewrite,
    /// A retry with a different theme.
    Retry,
}

impl InFlight {
    /// Label shown on the triggering control while the request runs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rewrite => "Rewriting...",
            Self::Retry => "Trying...",
        }
    }
}
