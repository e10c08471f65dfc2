use crate::confirm::ConfirmationStep;
use crate::error::InteractionError;

pub const REVEAL_DELAY_MS: u32 = 600;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Covered,
    Revealing,
    Revealed,
}

/// Accept → cover → reveal progression plus the post-reveal confirmation
/// counter. All transitions are forward-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    accepted: bool,
    phase: RevealPhase,
    reveal_started_at: Option<f64>,
    confirmation: ConfirmationStep,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn confirmation(&self) -> ConfirmationStep {
        self.confirmation
    }

    /// Returns `true` only on the first call.
    pub fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        self.phase = RevealPhase::Covered;
        self.reveal_started_at = None;
        true
    }

    pub fn reveal(&mut self, now_ms: f64) -> Result<(), InteractionError> {
        if !self.accepted {
            return Err(InteractionError::NotAccepted);
        }
        if self.phase != RevealPhase::Covered {
            return Err(InteractionError::NotCovered { found: self.phase });
        }
        self.phase = RevealPhase::Revealing;
        self.reveal_started_at = Some(now_ms);
        Ok(())
    }

    /// Completes a pending reveal once the delay has elapsed at `now_ms`.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        let Some(started_at) = self.reveal_started_at else {
            return false;
        };
        if self.phase != RevealPhase::Revealing {
            return false;
        }
        if now_ms - started_at < f64::from(REVEAL_DELAY_MS) {
            return false;
        }
        self.finish_reveal()
    }

    /// Timer-driven completion; the caller owns the timing.
    pub fn finish_reveal(&mut self) -> bool {
        if self.phase != RevealPhase::Revealing {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        self.reveal_started_at = None;
        true
    }

    /// Advances the confirmation counter. `Ok(false)` once terminal.
    pub fn confirm(&mut self) -> Result<bool, InteractionError> {
        if self.phase != RevealPhase::Revealed {
            return Err(InteractionError::NotRevealed);
        }
        Ok(self.confirmation.advance())
    }
}
