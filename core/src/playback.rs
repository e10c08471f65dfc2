use crate::error::AudioError;

/// Notifications the media resource emits. Payloads carry the resource's own
/// state read at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    Error { code: Option<u16> },
    Stalled,
    Waiting,
    CanPlay,
    LoadedMetadata,
    VolumeChange { muted: bool },
}

impl MediaEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MediaEvent::Play => "play",
            MediaEvent::Pause => "pause",
            MediaEvent::Ended => "ended",
            MediaEvent::Error { .. } => "error",
            MediaEvent::Stalled => "stalled",
            MediaEvent::Waiting => "waiting",
            MediaEvent::CanPlay => "canplay",
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::VolumeChange { .. } => "volumechange",
        }
    }
}

/// What the controller should ask the resource to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackRequest {
    Play,
    Pause,
    SetMuted(bool),
}

impl PlaybackRequest {
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackRequest::Play => "play",
            PlaybackRequest::Pause => "pause",
            PlaybackRequest::SetMuted(true) => "mute",
            PlaybackRequest::SetMuted(false) => "unmute",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub last_error: Option<AudioError>,
}

impl PlaybackState {
    /// Play/pause is only requested here; `is_playing` moves when the
    /// resource reports back.
    pub fn toggle_playback(&mut self) -> PlaybackRequest {
        if self.is_playing {
            self.last_error = None;
            PlaybackRequest::Pause
        } else {
            PlaybackRequest::Play
        }
    }

    pub fn toggle_mute(&mut self) -> PlaybackRequest {
        self.is_muted = !self.is_muted;
        PlaybackRequest::SetMuted(self.is_muted)
    }

    pub fn start_failed(&mut self, media_code: Option<u16>) {
        self.last_error = Some(AudioError::from_start_failure(media_code));
        self.is_playing = false;
    }

    pub fn dismiss(&mut self) {
        self.last_error = None;
    }

    /// Reconciles with a resource notification. Returns whether anything
    /// visible changed.
    pub fn apply(&mut self, event: MediaEvent) -> bool {
        let before = *self;
        match event {
            MediaEvent::Play => {
                self.is_playing = true;
                self.last_error = None;
            }
            MediaEvent::Pause | MediaEvent::Ended => {
                self.is_playing = false;
            }
            MediaEvent::Error { code } => {
                self.last_error = Some(AudioError::from_media_code(code));
                self.is_playing = false;
            }
            MediaEvent::VolumeChange { muted } => {
                self.is_muted = muted;
            }
            MediaEvent::Stalled
            | MediaEvent::Waiting
            | MediaEvent::CanPlay
            | MediaEvent::LoadedMetadata => {}
        }
        before != *self
    }
}
