use std::rc::Rc;

use valentine_core::{AudioError, PageAction, PageView, PlaybackState};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::app_router;
use crate::app_runtime;
use crate::message_view::{CoverView, MessageView};
use crate::page_core::PageCore;
use crate::proposal_view::ProposalView;

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<PageCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let page_core = props.core.clone();
    let snapshot = use_state(|| page_core.snapshot());

    {
        let page_core = page_core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_cb = page_core.clone();
            let subscription = page_core.subscribe(Rc::new({
                let snapshot = snapshot.clone();
                move || snapshot.set(core_for_cb.snapshot())
            }));
            // Children run their mount effects first; catch what they sent.
            snapshot.set(page_core.snapshot());
            move || {
                drop(subscription);
                page_core.shutdown();
            }
        });
    }

    let on_action = {
        let page_core = page_core.clone();
        Callback::from(move |action: PageAction| page_core.dispatch(action))
    };
    let config = page_core.config();
    let snapshot_value = (*snapshot).clone();
    let content = match snapshot_value.view() {
        PageView::Proposal => html! {
            <ProposalView
                decline={snapshot_value.decline}
                debug={config.debug}
                on_action={on_action.clone()}
            />
        },
        PageView::Cover { exiting } => html! {
            <CoverView
                {exiting}
                cover_src={AttrValue::from(config.cover_src.clone())}
                on_action={on_action.clone()}
            />
        },
        PageView::Message { confirmation } => html! {
            <MessageView
                {confirmation}
                surprise_src={AttrValue::from(config.surprise_src.clone())}
                on_action={on_action.clone()}
            />
        },
    };

    html! {
        <main class="page">
            <AudioControls playback={snapshot_value.playback} on_action={on_action} />
            {content}
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct AudioControlsProps {
    playback: PlaybackState,
    on_action: Callback<PageAction>,
}

#[function_component(AudioControls)]
fn audio_controls(props: &AudioControlsProps) -> Html {
    let playback = props.playback;
    let on_toggle_playback = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(PageAction::TogglePlayback))
    };
    let on_toggle_mute = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(PageAction::ToggleMute))
    };
    let on_dismiss = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: ()| on_action.emit(PageAction::DismissStatus))
    };
    let (play_glyph, play_label) = if playback.is_playing {
        ("❚❚", "Pause music")
    } else {
        ("▶", "Play music")
    };
    let (mute_glyph, mute_label) = if playback.is_muted {
        ("🔇", "Unmute music")
    } else {
        ("🔊", "Mute music")
    };

    html! {
        <div class="audio-controls">
            <div class="audio-buttons">
                <button class="btn btn-icon" aria-label={play_label} onclick={on_toggle_playback}>
                    {play_glyph}
                </button>
                <button class="btn btn-icon" aria-label={mute_label} onclick={on_toggle_mute}>
                    {mute_glyph}
                </button>
            </div>
            if let Some(error) = playback.last_error {
                <StatusNotification {error} on_dismiss={on_dismiss} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatusNotificationProps {
    error: AudioError,
    on_dismiss: Callback<()>,
}

#[function_component(StatusNotification)]
fn status_notification(props: &StatusNotificationProps) -> Html {
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    html! {
        <div class="status" role="status">
            <span class="status-icon">{"!"}</span>
            <p class="status-message">{props.error.to_string()}</p>
            <button class="btn btn-ghost status-dismiss" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let href = app_router::attribution_href();
    let year = app_router::current_year();
    html! {
        <footer class="footer">
            <p>
                {format!("© {year} · Built with ")}
                <span class="heart">{"♥"}</span>
                {" using "}
                <a {href} target="_blank" rel="noopener noreferrer">{"caffeine.ai"}</a>
            </p>
        </footer>
    }
}

pub(crate) fn run() {
    let config = app_runtime::page_config();
    if config.debug {
        gloo::console::log!("page config", format!("{config:?}"));
    }
    let core = PageCore::new(config);
    yew::Renderer::<App>::with_props(AppProps { core }).render();
}
