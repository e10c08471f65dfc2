use crate::evade::Size;
use crate::playback::{MediaEvent, PlaybackRequest};

#[derive(Clone, Debug)]
pub enum PageAction {
    Accept,
    PlaceDecline {
        container: Size,
        target: Size,
    },
    DeclineApproached {
        container: Size,
        target: Size,
    },
    Reveal {
        now_ms: f64,
    },
    SettleReveal {
        now_ms: f64,
    },
    FinishReveal,
    Confirm,
    TogglePlayback,
    ToggleMute,
    PlaybackRejected {
        media_code: Option<u16>,
    },
    Media(MediaEvent),
    DismissStatus,
}

/// Side effects the runtime performs after a reducer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEffect {
    ScheduleReveal { delay_ms: u32 },
    Playback(PlaybackRequest),
}
