//! Microphone permission outcome and its failure modes.

/// Why the microphone could not be opened. Every variant is handled the same
/// way: frequency input stays silent and a notice is shown once.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MicError {
    /// Page is not served from a secure context (https or localhost)
    #[error("microphone requires a secure context")]
    InsecureContext,

    /// Browser exposes no media devices
    #[error("media devices unavailable: {reason}")]
    Unsupported { reason: String },

    /// User or browser rejected the permission request
    #[error("microphone permission denied: {reason}")]
    PermissionDenied { reason: String },

    /// Stream was granted but could not be wired to the analyser
    #[error("audio graph error: {reason}")]
    AudioGraph { reason: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MicStatus {
    #[default]
    Pending,
    Live,
    Denied,
}

impl MicStatus {
    pub fn on_granted(&mut self) {
        *self = MicStatus::Live;
    }

    /// Record a failure. Returns `true` only on the first transition into
    /// `Denied`, i.e. when the notice should be shown.
    pub fn on_denied(&mut self) -> bool {
        let first = *self != MicStatus::Denied;
        *self = MicStatus::Denied;
        first
    }

    pub fn is_live(&self) -> bool {
        matches!(self, MicStatus::Live)
    }
}
