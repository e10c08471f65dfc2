use valentine_core::error::{MEDIA_ERR_ABORTED, MEDIA_ERR_DECODE, MEDIA_ERR_NETWORK, MEDIA_ERR_SRC_NOT_SUPPORTED};
use valentine_core::{AudioError, MediaEvent, PlaybackRequest, PlaybackState};

#[test]
fn toggle_only_requests_play() {
    let mut state = PlaybackState::default();
    assert_eq!(state.toggle_playback(), PlaybackRequest::Play);
    assert!(!state.is_playing);
    assert!(state.apply(MediaEvent::Play));
    assert!(state.is_playing);
    assert_eq!(state.toggle_playback(), PlaybackRequest::Pause);
    assert!(state.is_playing);
    state.apply(MediaEvent::Pause);
    assert!(!state.is_playing);
}

#[test]
fn failed_start_sets_error_and_dismiss_keeps_flags() {
    let mut state = PlaybackState::default();
    state.toggle_playback();
    state.start_failed(None);
    assert!(!state.is_playing);
    assert_eq!(state.last_error, Some(AudioError::StartRejected));
    state.dismiss();
    assert_eq!(state.last_error, None);
    assert!(!state.is_playing);
}

#[test]
fn failed_start_prefers_resource_error() {
    let mut state = PlaybackState::default();
    state.start_failed(Some(MEDIA_ERR_DECODE));
    assert_eq!(
        state.last_error.map(|err| err.to_string()).as_deref(),
        Some("Audio file could not be decoded.")
    );
}

#[test]
fn error_event_maps_codes() {
    let cases = [
        (Some(MEDIA_ERR_ABORTED), "Audio loading was aborted."),
        (Some(MEDIA_ERR_NETWORK), "Network error while loading audio."),
        (Some(MEDIA_ERR_DECODE), "Audio file could not be decoded."),
        (Some(MEDIA_ERR_SRC_NOT_SUPPORTED), "Audio format not supported or file not found."),
        (Some(9), "Audio playback error occurred."),
        (None, "Audio playback error occurred."),
    ];
    for (code, message) in cases {
        let mut state = PlaybackState {
            is_playing: true,
            ..PlaybackState::default()
        };
        assert!(state.apply(MediaEvent::Error { code }));
        assert!(!state.is_playing);
        assert_eq!(state.last_error.map(|err| err.to_string()).as_deref(), Some(message));
    }
}

#[test]
fn play_event_clears_error() {
    let mut state = PlaybackState::default();
    state.start_failed(None);
    state.apply(MediaEvent::Play);
    assert!(state.is_playing);
    assert_eq!(state.last_error, None);
}

#[test]
fn ended_stops_playing() {
    let mut state = PlaybackState::default();
    state.apply(MediaEvent::Play);
    assert!(state.apply(MediaEvent::Ended));
    assert!(!state.is_playing);
}

#[test]
fn external_volume_change_updates_mute() {
    let mut state = PlaybackState::default();
    assert!(state.apply(MediaEvent::VolumeChange { muted: true }));
    assert!(state.is_muted);
    assert_eq!(state.toggle_mute(), PlaybackRequest::SetMuted(false));
    assert!(!state.is_muted);
    assert!(!state.apply(MediaEvent::VolumeChange { muted: false }));
}

#[test]
fn informational_events_change_nothing() {
    let mut state = PlaybackState::default();
    for event in [
        MediaEvent::Stalled,
        MediaEvent::Waiting,
        MediaEvent::CanPlay,
        MediaEvent::LoadedMetadata,
    ] {
        assert!(!state.apply(event), "{} changed state", event.name());
    }
    assert_eq!(state, PlaybackState::default());
}
