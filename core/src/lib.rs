pub mod action;
pub mod attribution;
pub mod config;
pub mod confirm;
pub mod error;
pub mod evade;
pub mod playback;
pub mod reveal;
pub mod state;

pub use action::{PageAction, PageEffect};
pub use attribution::attribution_url;
pub use config::PageConfig;
pub use confirm::{ConfirmationStep, CONFIRMATION_FINAL_STEP};
pub use error::{AudioError, InteractionError};
pub use evade::{
    initial_position, on_proximity, travel_limits, Position, Size, SplitMix, UnitSource, EVADE_MARGIN,
};
pub use playback::{MediaEvent, PlaybackRequest, PlaybackState};
pub use reveal::{Interaction, RevealPhase, REVEAL_DELAY_MS};
pub use state::{Applied, ConfirmationView, PageSnapshot, PageState, PageView};
