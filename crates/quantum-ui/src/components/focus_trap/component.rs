use dioxus::prelude::*;

use crate::hooks::{dom, use_unique_id};

/// Keep keyboard focus inside `children`.
///
/// While active, the first tabbable descendant receives focus and Tab /
/// Shift+Tab cycle through the tabbable descendants instead of leaving.
#[component]
pub fn FocusTrap(
    #[props(default = true)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let trap_id = use_unique_id("focus-trap");

    let initial_id = trap_id.clone();
    use_effect(use_reactive((&active,), move |(active,)| {
        if !active {
            return;
        }
        let id = initial_id.clone();
        spawn(async move {
            dom::focus_first_tabbable(&id).await;
        });
    }));

    let cycle_id = trap_id.clone();
    rsx! {
        div {
            id: "{trap_id}",
            "data-quantum-focus-trap": "",
            onkeydown: move |evt: KeyboardEvent| {
                if !active || evt.key() != Key::Tab {
                    return;
                }
                evt.prevent_default();
                let backwards = evt.modifiers().contains(Modifiers::SHIFT);
                let id = cycle_id.clone();
                spawn(async move {
                    dom::cycle_focus(&id, backwards).await;
                });
            },
            ..attributes,
            {children}
        }
    }
}
