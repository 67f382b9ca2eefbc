use dioxus::prelude::*;
use quantum_types::{PresenceEvent, PresenceState};

use super::dom;

/// Keep content mounted while `open`, and for the length of its exit animation
/// after closing.
///
/// Returns whether the content should be present, plus the handler to wire to
/// the element's `animationend` / `transitionend`.
pub fn use_presence(open: Memo<bool>, node_id: String) -> (Memo<bool>, Callback<()>) {
    let mut state = use_signal(|| PresenceState::initial(*open.peek()));

    use_effect(move || {
        let is_open = open();
        let current = *state.peek();
        if is_open {
            let next = current.next(PresenceEvent::Open);
            if next != current {
                state.set(next);
            }
            return;
        }
        if current != PresenceState::Present {
            return;
        }
        let id = node_id.clone();
        spawn(async move {
            let animated = dom::exit_animation(&id).await;
            // Reopened while the computed style was being read.
            if *open.peek() {
                return;
            }
            let next = state.peek().next(PresenceEvent::Close { animated });
            state.set(next);
        });
    });

    let present = use_memo(move || state().is_present());
    let on_animation_end = use_callback(move |_: ()| {
        let current = *state.peek();
        let next = current.next(PresenceEvent::AnimationEnd);
        if next != current {
            state.set(next);
        }
    });

    (present, on_animation_end)
}

/// Height of the element `id`, re-measured whenever `trigger` changes.
pub fn use_content_height<T>(id: String, trigger: Memo<T>) -> Signal<Option<f64>>
where
    T: Clone + PartialEq + 'static,
{
    let mut height = use_signal(|| None::<f64>);
    use_effect(move || {
        let _ = trigger();
        let id = id.clone();
        spawn(async move {
            let measured = dom::element_height(&id).await;
            if *height.peek() != measured {
                height.set(measured);
            }
        });
    });
    height
}
