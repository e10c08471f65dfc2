use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use valentine_core::{
    MediaEvent, PageAction, PageConfig, PageEffect, PageSnapshot, PageState, PlaybackRequest,
};

use crate::audio::{AudioController, MediaSink};
use crate::input::MathRandom;

pub(crate) type PageSubscriber = Rc<dyn Fn()>;

/// Owns the page state and everything with a lifetime: subscribers, the
/// pending reveal timer and the audio controller. Views only read snapshots
/// and send actions.
pub(crate) struct PageCore {
    this: Weak<PageCore>,
    config: PageConfig,
    state: RefCell<PageState>,
    snapshot: RefCell<PageSnapshot>,
    subscribers: Rc<RefCell<Vec<PageSubscriber>>>,
    audio: RefCell<Option<AudioController>>,
    reveal_timer: RefCell<Option<Timeout>>,
}

impl PageCore {
    pub(crate) fn new(config: PageConfig) -> Rc<Self> {
        let core = Rc::new_cyclic(|this| {
            let state = PageState::new(Box::new(MathRandom));
            let snapshot = state.snapshot();
            Self {
                this: this.clone(),
                config,
                state: RefCell::new(state),
                snapshot: RefCell::new(snapshot),
                subscribers: Rc::new(RefCell::new(Vec::new())),
                audio: RefCell::new(None),
                reveal_timer: RefCell::new(None),
            }
        });
        core.attach_audio();
        core
    }

    pub(crate) fn config(&self) -> &PageConfig {
        &self.config
    }

    pub(crate) fn snapshot(&self) -> PageSnapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self, subscriber: PageSubscriber) -> PageSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        PageSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn dispatch(&self, action: PageAction) {
        if let PageAction::Media(event) = &action {
            self.log_media_event(*event);
        }
        let reports_error = matches!(
            action,
            PageAction::PlaybackRejected { .. } | PageAction::Media(MediaEvent::Error { .. })
        );
        let applied = self.state.borrow_mut().apply(action);
        if let Some(err) = applied.rejected {
            gloo::console::warn!("page action ignored", err.to_string());
        }
        if applied.changed {
            self.refresh_snapshot();
        }
        if reports_error {
            if let Some(err) = self.snapshot.borrow().playback.last_error {
                gloo::console::error!("Audio error:", err.to_string());
            }
        }
        if let Some(effect) = applied.effect {
            self.run_effect(effect);
        }
        if applied.changed {
            self.notify_subscribers();
        }
    }

    /// Releases the timer and the audio subscriptions. A reveal still pending
    /// is dropped without touching state.
    pub(crate) fn shutdown(&self) {
        self.reveal_timer.borrow_mut().take();
        self.audio.borrow_mut().take();
        self.subscribers.borrow_mut().clear();
    }

    #[cfg(test)]
    pub(crate) fn reveal_pending(&self) -> bool {
        self.reveal_timer.borrow().is_some()
    }

    fn attach_audio(&self) {
        let this = self.this.clone();
        let sink: MediaSink = Rc::new(move |event| {
            if let Some(core) = this.upgrade() {
                core.dispatch(PageAction::Media(event));
            }
        });
        match AudioController::new(&self.config.audio_src, sink) {
            Ok(controller) => {
                if self.config.debug {
                    gloo::console::log!(
                        "audio attached",
                        self.config.audio_src.clone(),
                        controller.listener_count()
                    );
                }
                *self.audio.borrow_mut() = Some(controller);
            }
            Err(err) => {
                gloo::console::error!("failed to create audio element", err);
            }
        }
    }

    fn run_effect(&self, effect: PageEffect) {
        match effect {
            PageEffect::ScheduleReveal { delay_ms } => {
                let this = self.this.clone();
                let timer = Timeout::new(delay_ms, move || {
                    if let Some(core) = this.upgrade() {
                        core.dispatch(PageAction::FinishReveal);
                    }
                });
                *self.reveal_timer.borrow_mut() = Some(timer);
            }
            PageEffect::Playback(request) => self.request_playback(request),
        }
    }

    fn request_playback(&self, request: PlaybackRequest) {
        if self.config.debug {
            gloo::console::log!("playback request", request.label());
        }
        if self.audio.borrow().is_none() {
            if request == PlaybackRequest::Play {
                self.dispatch(PageAction::PlaybackRejected { media_code: None });
            }
            return;
        }
        let audio = self.audio.borrow();
        let Some(audio) = audio.as_ref() else {
            return;
        };
        match request {
            PlaybackRequest::Play => {
                let this = self.this.clone();
                audio.play(move |media_code| {
                    if let Some(core) = this.upgrade() {
                        core.dispatch(PageAction::PlaybackRejected { media_code });
                    }
                });
            }
            PlaybackRequest::Pause => audio.pause(),
            PlaybackRequest::SetMuted(muted) => audio.set_muted(muted),
        }
    }

    fn log_media_event(&self, event: MediaEvent) {
        match event {
            MediaEvent::Stalled => gloo::console::warn!("Audio loading stalled"),
            MediaEvent::Waiting => gloo::console::warn!("Audio buffering"),
            MediaEvent::CanPlay if self.config.debug => gloo::console::log!("Audio can play"),
            MediaEvent::LoadedMetadata if self.config.debug => {
                gloo::console::log!("Audio metadata loaded")
            }
            _ if self.config.debug => gloo::console::log!("audio event", event.name()),
            _ => {}
        }
    }

    fn refresh_snapshot(&self) {
        let next = self.state.borrow().snapshot();
        *self.snapshot.borrow_mut() = next;
    }

    fn notify_subscribers(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct PageSubscription {
    subscriber: PageSubscriber,
    subscribers: Rc<RefCell<Vec<PageSubscriber>>>,
}

impl Drop for PageSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
