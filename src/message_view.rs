use valentine_core::{ConfirmationView, PageAction};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::*;
use crate::yew_app::Footer;

#[derive(Properties, PartialEq)]
pub(crate) struct CoverViewProps {
    pub(crate) exiting: bool,
    pub(crate) cover_src: AttrValue,
    pub(crate) on_action: Callback<PageAction>,
}

/// Sealed envelope. While the exit animation runs it is inert.
#[function_component(CoverView)]
pub(crate) fn cover_view(props: &CoverViewProps) -> Html {
    let on_reveal = if props.exiting {
        None
    } else {
        let on_action = props.on_action.clone();
        Some(Callback::from(move |_: MouseEvent| {
            on_action.emit(PageAction::Reveal {
                now_ms: js_sys::Date::now(),
            })
        }))
    };
    let class = classes!("cover", props.exiting.then_some("cover-exit"));

    html! {
        <section {class}>
            <div class="cover-card" onclick={on_reveal.clone()}>
                <img src={props.cover_src.clone()} alt="Message Cover" />
                <span class="cover-heart">{"♥"}</span>
                <span class="cover-sparkle">{"✦"}</span>
            </div>
            <div class="cover-call">
                <h2>{COVER_TITLE}</h2>
                <p>{COVER_SUBTITLE}</p>
                <button class="btn btn-primary btn-large" onclick={on_reveal} disabled={props.exiting}>
                    {COVER_ACTION}
                </button>
            </div>
            <HeartRow />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MessageViewProps {
    pub(crate) confirmation: ConfirmationView,
    pub(crate) surprise_src: AttrValue,
    pub(crate) on_action: Callback<PageAction>,
}

#[function_component(MessageView)]
pub(crate) fn message_view(props: &MessageViewProps) -> Html {
    let paragraphs: Html = LETTER_PARAGRAPHS
        .iter()
        .map(|paragraph| html! { <p>{*paragraph}</p> })
        .collect();
    let shayari: Html = SHAYARI_LINES
        .iter()
        .map(|line| html! { <p>{*line}</p> })
        .collect();

    html! {
        <section class="message message-reveal">
            <div class="message-heart">{"♥"}</div>
            <article class="letter">
                {paragraphs}
                <blockquote class="shayari">
                    <p class="shayari-intro">{SHAYARI_INTRO}</p>
                    {shayari}
                </blockquote>
                <p class="letter-closing">{LETTER_CLOSING}</p>
            </article>
            <HeartRow />
            <ConfirmationPanel
                confirmation={props.confirmation}
                surprise_src={props.surprise_src.clone()}
                on_action={props.on_action.clone()}
            />
            <Footer />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmationPanelProps {
    confirmation: ConfirmationView,
    surprise_src: AttrValue,
    on_action: Callback<PageAction>,
}

#[function_component(ConfirmationPanel)]
fn confirmation_panel(props: &ConfirmationPanelProps) -> Html {
    match props.confirmation {
        ConfirmationView::Prompt(label) => {
            let on_action = props.on_action.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_action.emit(PageAction::Confirm));
            html! {
                <div class="confirmation">
                    <button class="btn btn-primary confirmation-prompt" {onclick}>{label}</button>
                </div>
            }
        }
        ConfirmationView::Final => html! {
            <div class="confirmation confirmation-final">
                <img src={props.surprise_src.clone()} alt="Special moment" />
                <p>{SURPRISE_NOTE}</p>
                <HeartRow />
            </div>
        },
    }
}

#[function_component(HeartRow)]
fn heart_row() -> Html {
    html! {
        <div class="hearts hearts-pulse">
            <span class="heart">{"♥"}</span>
            <span class="heart heart-large">{"♥"}</span>
            <span class="heart">{"♥"}</span>
        </div>
    }
}
