use valentine_core::error::MEDIA_ERR_DECODE;
use valentine_core::{
    ConfirmationView, InteractionError, MediaEvent, PageAction, PageEffect, PageState, PageView,
    PlaybackRequest, Position, RevealPhase, Size, SplitMix, EVADE_MARGIN,
};

const CONTAINER: Size = Size {
    width: 640.0,
    height: 256.0,
};
const TARGET: Size = Size {
    width: 120.0,
    height: 56.0,
};

fn page() -> PageState {
    PageState::new(Box::new(SplitMix::new(11)))
}

fn revealed_page() -> PageState {
    let mut state = page();
    state.apply(PageAction::Accept);
    state.apply(PageAction::Reveal { now_ms: 0.0 });
    state.apply(PageAction::SettleReveal { now_ms: 700.0 });
    state
}

#[test]
fn fresh_load_shows_proposal() {
    let state = page();
    let snapshot = state.snapshot();
    assert!(!snapshot.accepted);
    assert_eq!(snapshot.view(), PageView::Proposal);
    assert!(!snapshot.playback.is_playing);
}

#[test]
fn accept_then_reveal_then_wait() {
    let mut state = page();
    assert!(state.apply(PageAction::Accept).changed);
    assert_eq!(state.snapshot().view(), PageView::Cover { exiting: false });

    let applied = state.apply(PageAction::Reveal { now_ms: 50.0 });
    assert!(applied.changed);
    assert_eq!(applied.effect, Some(PageEffect::ScheduleReveal { delay_ms: 600 }));
    assert_eq!(state.snapshot().view(), PageView::Cover { exiting: true });

    assert!(!state.apply(PageAction::SettleReveal { now_ms: 600.0 }).changed);
    assert_eq!(state.snapshot().phase, RevealPhase::Revealing);

    assert!(state.apply(PageAction::SettleReveal { now_ms: 750.0 }).changed);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.phase, RevealPhase::Revealed);
    assert_eq!(snapshot.confirmation.value(), 0);
    assert_eq!(
        snapshot.view(),
        PageView::Message {
            confirmation: ConfirmationView::Prompt("aur bhi kuch h👉👈")
        }
    );
}

#[test]
fn double_accept_matches_single_accept() {
    let mut once = page();
    once.apply(PageAction::Accept);
    let mut twice = page();
    twice.apply(PageAction::Accept);
    assert!(!twice.apply(PageAction::Accept).changed);
    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn reveal_before_accept_is_rejected() {
    let mut state = page();
    let applied = state.apply(PageAction::Reveal { now_ms: 0.0 });
    assert_eq!(applied.rejected, Some(InteractionError::NotAccepted));
    assert_eq!(applied.effect, None);
    state.apply(PageAction::FinishReveal);
    assert_eq!(state.snapshot().view(), PageView::Proposal);
}

#[test]
fn timer_completion_reveals() {
    let mut state = page();
    state.apply(PageAction::Accept);
    state.apply(PageAction::Reveal { now_ms: 0.0 });
    assert!(state.apply(PageAction::FinishReveal).changed);
    assert_eq!(state.snapshot().phase, RevealPhase::Revealed);
    assert!(!state.apply(PageAction::FinishReveal).changed);
}

#[test]
fn three_confirmations_reach_final_view() {
    let mut state = revealed_page();
    for _ in 0..3 {
        assert!(state.apply(PageAction::Confirm).changed);
    }
    let snapshot = state.snapshot();
    assert_eq!(snapshot.confirmation.value(), 3);
    let final_view = PageView::Message {
        confirmation: ConfirmationView::Final,
    };
    assert_eq!(snapshot.view(), final_view);
    assert!(!state.apply(PageAction::Confirm).changed);
    assert_eq!(state.snapshot().view(), final_view);
}

#[test]
fn confirm_before_reveal_is_rejected() {
    let mut state = page();
    state.apply(PageAction::Accept);
    let applied = state.apply(PageAction::Confirm);
    assert_eq!(applied.rejected, Some(InteractionError::NotRevealed));
}

#[test]
fn decline_starts_centered_and_evades_within_bounds() {
    let mut state = page();
    state.apply(PageAction::PlaceDecline {
        container: CONTAINER,
        target: TARGET,
    });
    assert_eq!(state.decline(), Position { x: 240.0, y: 80.0 });
    let max_x = CONTAINER.width - TARGET.width - EVADE_MARGIN;
    let max_y = CONTAINER.height - TARGET.height - EVADE_MARGIN;
    for _ in 0..50 {
        state.apply(PageAction::DeclineApproached {
            container: CONTAINER,
            target: TARGET,
        });
        let pos = state.decline();
        assert!((0.0..=max_x).contains(&pos.x));
        assert!((0.0..=max_y).contains(&pos.y));
    }
}

#[test]
fn decline_is_frozen_after_accept() {
    let mut state = page();
    state.apply(PageAction::PlaceDecline {
        container: CONTAINER,
        target: TARGET,
    });
    state.apply(PageAction::Accept);
    let before = state.decline();
    let applied = state.apply(PageAction::DeclineApproached {
        container: CONTAINER,
        target: TARGET,
    });
    assert!(!applied.changed);
    assert_eq!(state.decline(), before);
}

#[test]
fn toggle_playback_waits_for_resource() {
    let mut state = page();
    let applied = state.apply(PageAction::TogglePlayback);
    assert_eq!(applied.effect, Some(PageEffect::Playback(PlaybackRequest::Play)));
    assert!(!state.playback().is_playing);
    state.apply(PageAction::Media(MediaEvent::Play));
    assert!(state.playback().is_playing);
    let applied = state.apply(PageAction::TogglePlayback);
    assert_eq!(applied.effect, Some(PageEffect::Playback(PlaybackRequest::Pause)));
    assert!(state.playback().is_playing);
}

#[test]
fn decode_error_on_first_toggle() {
    let mut state = page();
    state.apply(PageAction::TogglePlayback);
    state.apply(PageAction::Media(MediaEvent::Error {
        code: Some(MEDIA_ERR_DECODE),
    }));
    state.apply(PageAction::PlaybackRejected {
        media_code: Some(MEDIA_ERR_DECODE),
    });
    let playback = state.playback();
    assert!(!playback.is_playing);
    assert_eq!(
        playback.last_error.map(|err| err.to_string()).as_deref(),
        Some("Audio file could not be decoded.")
    );
}

#[test]
fn dismiss_clears_only_error() {
    let mut state = page();
    state.apply(PageAction::TogglePlayback);
    state.apply(PageAction::PlaybackRejected { media_code: None });
    assert!(state.playback().last_error.is_some());
    assert!(state.apply(PageAction::DismissStatus).changed);
    assert_eq!(state.playback().last_error, None);
    assert!(!state.playback().is_playing);
    assert!(!state.apply(PageAction::DismissStatus).changed);
}

#[test]
fn mute_mirrors_immediately_and_reconciles() {
    let mut state = page();
    let applied = state.apply(PageAction::ToggleMute);
    assert_eq!(applied.effect, Some(PageEffect::Playback(PlaybackRequest::SetMuted(true))));
    assert!(state.playback().is_muted);
    state.apply(PageAction::Media(MediaEvent::VolumeChange { muted: false }));
    assert!(!state.playback().is_muted);
}

#[test]
fn audio_failures_leave_interaction_alone() {
    let mut state = revealed_page();
    state.apply(PageAction::Confirm);
    let before = state.snapshot();
    state.apply(PageAction::Media(MediaEvent::Error { code: None }));
    let after = state.snapshot();
    assert_eq!(after.view(), before.view());
    assert_eq!(after.confirmation, before.confirmation);
}
