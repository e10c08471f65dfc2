use valentine_core::{PageAction, Position};
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::content::*;
use crate::input::{proximity_bounds, ProximityTrigger};
use crate::yew_app::Footer;

#[derive(Properties, PartialEq)]
pub(crate) struct ProposalViewProps {
    pub(crate) decline: Position,
    pub(crate) debug: bool,
    pub(crate) on_action: Callback<PageAction>,
}

#[function_component(ProposalView)]
pub(crate) fn proposal_view(props: &ProposalViewProps) -> Html {
    let container_ref = use_node_ref();
    let decline_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let decline_ref = decline_ref.clone();
        let on_action = props.on_action.clone();
        use_effect_with((), move |_| {
            if let Some((container, target)) = proximity_bounds(&container_ref, &decline_ref) {
                on_action.emit(PageAction::PlaceDecline { container, target });
            }
            || ()
        });
    }

    let evade = {
        let container_ref = container_ref.clone();
        let decline_ref = decline_ref.clone();
        let on_action = props.on_action.clone();
        let debug = props.debug;
        Callback::from(move |trigger: ProximityTrigger| {
            let Some((container, target)) = proximity_bounds(&container_ref, &decline_ref) else {
                return;
            };
            if debug {
                gloo::console::log!("decline approached", trigger.label());
            }
            on_action.emit(PageAction::DeclineApproached { container, target });
        })
    };
    let on_mouse_enter = {
        let evade = evade.clone();
        Callback::from(move |_: MouseEvent| evade.emit(ProximityTrigger::PointerEnter))
    };
    let on_touch_start = {
        let evade = evade.clone();
        Callback::from(move |_: TouchEvent| evade.emit(ProximityTrigger::TouchStart))
    };
    let on_accept = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(PageAction::Accept))
    };

    let decline_style = format!(
        "position: absolute; left: {:.1}px; top: {:.1}px; transition: all 0.3s ease-out;",
        props.decline.x, props.decline.y
    );

    html! {
        <section class="proposal">
            <div class="proposal-heading">
                <div class="hearts hearts-bounce">
                    <span class="heart">{"♥"}</span>
                    <span class="heart heart-large">{"♥"}</span>
                    <span class="heart">{"♥"}</span>
                </div>
                <h1>
                    {PROPOSAL_TITLE}
                    <br />
                    <span class="accent">{PROPOSAL_TITLE_ACCENT}</span>
                </h1>
                <p class="subtitle">{PROPOSAL_SUBTITLE}</p>
            </div>
            <div class="proposal-stage" ref={container_ref}>
                <div class="proposal-buttons">
                    <button class="btn btn-primary btn-large" onclick={on_accept}>
                        {ACCEPT_LABEL}
                    </button>
                    <button
                        class="btn btn-muted btn-decline"
                        ref={decline_ref}
                        style={decline_style}
                        onmouseenter={on_mouse_enter}
                        ontouchstart={on_touch_start}
                    >
                        {DECLINE_LABEL}
                    </button>
                </div>
            </div>
            <p class="hint">{PROPOSAL_HINT}</p>
            <Footer />
        </section>
    }
}
