use crate::reveal::RevealPhase;

/// `MediaError.code` values reported by the browser.
pub const MEDIA_ERR_ABORTED: u16 = 1;
pub const MEDIA_ERR_NETWORK: u16 = 2;
pub const MEDIA_ERR_DECODE: u16 = 3;
pub const MEDIA_ERR_SRC_NOT_SUPPORTED: u16 = 4;

/// Audio failures surfaced in the status notification. `Display` is the
/// user-facing banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    #[error("Audio loading was aborted.")]
    Aborted,
    #[error("Network error while loading audio.")]
    Network,
    #[error("Audio file could not be decoded.")]
    Decode,
    #[error("Audio format not supported or file not found.")]
    SourceUnsupported,
    #[error("Audio playback error occurred.")]
    Unknown,
    #[error("Could not start audio. Please click Play again.")]
    StartRejected,
}

impl AudioError {
    /// Maps the resource's error code at the time `error` fired. A missing
    /// error object counts as unknown.
    pub fn from_media_code(code: Option<u16>) -> Self {
        match code {
            Some(MEDIA_ERR_ABORTED) => AudioError::Aborted,
            Some(MEDIA_ERR_NETWORK) => AudioError::Network,
            Some(MEDIA_ERR_DECODE) => AudioError::Decode,
            Some(MEDIA_ERR_SRC_NOT_SUPPORTED) => AudioError::SourceUnsupported,
            _ => AudioError::Unknown,
        }
    }

    /// Error for a rejected `play()` call. Prefers whatever the resource
    /// itself reports.
    pub fn from_start_failure(code: Option<u16>) -> Self {
        match code {
            Some(_) => Self::from_media_code(code),
            None => AudioError::StartRejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    #[error("the proposal has not been accepted yet")]
    NotAccepted,
    #[error("reveal requires the covered phase, found {found:?}")]
    NotCovered { found: RevealPhase },
    #[error("the message has not been revealed yet")]
    NotRevealed,
}
