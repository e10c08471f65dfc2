use std::rc::Rc;

use gloo::events::EventListener;
use valentine_core::MediaEvent;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

pub(crate) type MediaSink = Rc<dyn Fn(MediaEvent)>;

const MEDIA_EVENTS: &[&str] = &[
    "play",
    "pause",
    "ended",
    "error",
    "stalled",
    "waiting",
    "canplay",
    "loadedmetadata",
    "volumechange",
];

/// Owns the background track and its listener set. Listeners live exactly as
/// long as the controller; dropping it detaches them and stops playback.
pub(crate) struct AudioController {
    element: HtmlAudioElement,
    listeners: Vec<EventListener>,
}

impl AudioController {
    pub(crate) fn new(src: &str, sink: MediaSink) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        element.set_loop(true);
        element.set_preload("auto");
        let listeners = subscribe(&element, &sink);
        Ok(Self { element, listeners })
    }

    #[cfg(test)]
    pub(crate) fn element(&self) -> &HtmlAudioElement {
        &self.element
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// `play()` may reject asynchronously; the callback then receives the
    /// resource's current error code, if it has one.
    pub(crate) fn play<F>(&self, on_rejected: F)
    where
        F: FnOnce(Option<u16>) + 'static,
    {
        let element = self.element.clone();
        let promise = match self.element.play() {
            Ok(promise) => promise,
            Err(err) => {
                gloo::console::error!("Audio playback failed:", err);
                on_rejected(media_error_code(&element));
                return;
            }
        };
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                gloo::console::error!("Audio playback failed:", err);
                on_rejected(media_error_code(&element));
            }
        });
    }

    pub(crate) fn pause(&self) {
        if let Err(err) = self.element.pause() {
            gloo::console::warn!("audio pause failed", err);
        }
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }
}

impl Drop for AudioController {
    fn drop(&mut self) {
        self.listeners.clear();
        let _ = self.element.pause();
    }
}

fn subscribe(element: &HtmlAudioElement, sink: &MediaSink) -> Vec<EventListener> {
    MEDIA_EVENTS
        .iter()
        .copied()
        .map(|name| {
            let source = element.clone();
            let sink = sink.clone();
            EventListener::new(element, name, move |_event| {
                if let Some(event) = read_media_event(name, &source) {
                    sink(event);
                }
            })
        })
        .collect()
}

/// Builds the notification from the element's live state, so handlers never
/// depend on what the page last believed.
fn read_media_event(name: &str, element: &HtmlAudioElement) -> Option<MediaEvent> {
    let event = match name {
        "play" => MediaEvent::Play,
        "pause" => MediaEvent::Pause,
        "ended" => MediaEvent::Ended,
        "error" => MediaEvent::Error {
            code: media_error_code(element),
        },
        "stalled" => MediaEvent::Stalled,
        "waiting" => MediaEvent::Waiting,
        "canplay" => MediaEvent::CanPlay,
        "loadedmetadata" => MediaEvent::LoadedMetadata,
        "volumechange" => MediaEvent::VolumeChange {
            muted: element.muted(),
        },
        _ => return None,
    };
    Some(event)
}

fn media_error_code(element: &HtmlAudioElement) -> Option<u16> {
    element.error().map(|err| err.code())
}
