use crate::action::{PageAction, PageEffect};
use crate::confirm::ConfirmationStep;
use crate::error::InteractionError;
use crate::evade::{initial_position, on_proximity, Position, SplitMix, UnitSource};
use crate::playback::PlaybackState;
use crate::reveal::{Interaction, RevealPhase, REVEAL_DELAY_MS};

pub const DEFAULT_EVADE_SEED: u64 = 0x5EED_1402;

/// Which top-level view the composer renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Proposal,
    Cover { exiting: bool },
    Message { confirmation: ConfirmationView },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmationView {
    Prompt(&'static str),
    Final,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageSnapshot {
    pub accepted: bool,
    pub phase: RevealPhase,
    pub decline: Position,
    pub confirmation: ConfirmationStep,
    pub playback: PlaybackState,
}

impl PageSnapshot {
    pub fn view(&self) -> PageView {
        if !self.accepted {
            return PageView::Proposal;
        }
        match self.phase {
            RevealPhase::Covered => PageView::Cover { exiting: false },
            RevealPhase::Revealing => PageView::Cover { exiting: true },
            RevealPhase::Revealed => {
                let confirmation = match self.confirmation.prompt() {
                    Some(label) => ConfirmationView::Prompt(label),
                    None => ConfirmationView::Final,
                };
                PageView::Message { confirmation }
            }
        }
    }
}

/// Outcome of one reducer step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Applied {
    pub changed: bool,
    pub effect: Option<PageEffect>,
    pub rejected: Option<InteractionError>,
}

impl Applied {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }

    fn with_effect(changed: bool, effect: PageEffect) -> Self {
        Self {
            changed,
            effect: Some(effect),
            rejected: None,
        }
    }

    fn rejected(err: InteractionError) -> Self {
        Self {
            changed: false,
            effect: None,
            rejected: Some(err),
        }
    }
}

/// Single source of truth for the page. Locally initiated playback calls are
/// requests; only resource notifications (and a failed start) move playback
/// flags.
pub struct PageState {
    interaction: Interaction,
    decline: Position,
    playback: PlaybackState,
    source: Box<dyn UnitSource>,
}

impl PageState {
    pub fn new(source: Box<dyn UnitSource>) -> Self {
        Self {
            interaction: Interaction::new(),
            decline: Position::default(),
            playback: PlaybackState::default(),
            source,
        }
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn decline(&self) -> Position {
        self.decline
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            accepted: self.interaction.accepted(),
            phase: self.interaction.phase(),
            decline: self.decline,
            confirmation: self.interaction.confirmation(),
            playback: self.playback,
        }
    }

    pub fn apply(&mut self, action: PageAction) -> Applied {
        match action {
            PageAction::Accept => Applied::changed(self.interaction.accept()),
            PageAction::PlaceDecline { container, target } => {
                if self.interaction.accepted() {
                    return Applied::changed(false);
                }
                self.move_decline(initial_position(container, target))
            }
            PageAction::DeclineApproached { container, target } => {
                if self.interaction.accepted() {
                    return Applied::changed(false);
                }
                let next = on_proximity(container, target, self.source.as_mut());
                self.move_decline(next)
            }
            PageAction::Reveal { now_ms } => match self.interaction.reveal(now_ms) {
                Ok(()) => Applied::with_effect(
                    true,
                    PageEffect::ScheduleReveal {
                        delay_ms: REVEAL_DELAY_MS,
                    },
                ),
                Err(err) => Applied::rejected(err),
            },
            PageAction::SettleReveal { now_ms } => Applied::changed(self.interaction.settle(now_ms)),
            PageAction::FinishReveal => Applied::changed(self.interaction.finish_reveal()),
            PageAction::Confirm => match self.interaction.confirm() {
                Ok(changed) => Applied::changed(changed),
                Err(err) => Applied::rejected(err),
            },
            PageAction::TogglePlayback => {
                let before = self.playback;
                let request = self.playback.toggle_playback();
                Applied::with_effect(before != self.playback, PageEffect::Playback(request))
            }
            PageAction::ToggleMute => {
                let request = self.playback.toggle_mute();
                Applied::with_effect(true, PageEffect::Playback(request))
            }
            PageAction::PlaybackRejected { media_code } => {
                let before = self.playback;
                self.playback.start_failed(media_code);
                Applied::changed(before != self.playback)
            }
            PageAction::Media(event) => Applied::changed(self.playback.apply(event)),
            PageAction::DismissStatus => {
                let had_error = self.playback.last_error.is_some();
                self.playback.dismiss();
                Applied::changed(had_error)
            }
        }
    }

    fn move_decline(&mut self, next: Position) -> Applied {
        let changed = next != self.decline;
        self.decline = next;
        Applied::changed(changed)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Box::new(SplitMix::new(DEFAULT_EVADE_SEED)))
    }
}
