use valentine_core::{Size, UnitSource};
use web_sys::{DomRect, Element};
use yew::NodeRef;

/// Pointer or touch getting near the decline control. Both are handled the
/// same way; the kind only shows up in debug logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProximityTrigger {
    PointerEnter,
    TouchStart,
}

impl ProximityTrigger {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ProximityTrigger::PointerEnter => "pointer-enter",
            ProximityTrigger::TouchStart => "touch-start",
        }
    }
}

pub(crate) struct MathRandom;

impl UnitSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

fn rect_size(rect: &DomRect) -> Size {
    Size::new(rect.width().max(0.0), rect.height().max(0.0))
}

pub(crate) fn element_size(node: &NodeRef) -> Option<Size> {
    let element = node.cast::<Element>()?;
    Some(rect_size(&element.get_bounding_client_rect()))
}

/// Container and target sizes, or `None` while either is not mounted.
pub(crate) fn proximity_bounds(container: &NodeRef, target: &NodeRef) -> Option<(Size, Size)> {
    Some((element_size(container)?, element_size(target)?))
}
