use dioxus::core::Task;
use dioxus::prelude::*;

use super::dom::{self, ListenerSlot};
use super::id::use_unique_id;

/// Keep one document listener alive while `active`, calling `on_event` for
/// every message it sends.
fn use_document_listener(
    prefix: &'static str,
    active: Memo<bool>,
    install: impl Fn(&str) -> document::Eval + 'static,
    on_event: Callback<()>,
) {
    let token = use_unique_id(prefix);
    let slot = use_hook(|| ListenerSlot::new(token));
    let mut listener = use_signal(|| None::<Task>);

    let effect_slot = slot.clone();
    use_effect(move || {
        let is_active = active();
        if let Some(task) = listener.write().take() {
            task.cancel();
        }
        if !is_active {
            effect_slot.release();
            return;
        }

        effect_slot.claim();
        let mut events = install(effect_slot.token());
        let token = effect_slot.token().to_string();
        let task = spawn(async move {
            while events.recv::<bool>().await.is_ok() {
                tracing::debug!(token = %token, "document listener fired");
                on_event.call(());
            }
        });
        listener.set(Some(task));
    });

    use_drop(move || slot.release());
}

/// Call `on_outside` for every mouse press outside all elements in `ids`
/// while `active` is true.
pub fn use_outside_click(active: Memo<bool>, ids: Vec<String>, on_outside: Callback<()>) {
    use_document_listener(
        "dismiss",
        active,
        move |token| dom::outside_press(token, &ids),
        on_outside,
    );
}

/// Call `on_escape` whenever Escape is pressed anywhere while `active`,
/// wherever focus happens to be.
pub fn use_escape_key(active: Memo<bool>, on_escape: Callback<()>) {
    use_document_listener("escape", active, dom::escape_press, on_escape);
}

/// Mark everything outside the element `id` as `aria-hidden` while `active`.
pub fn use_hide_others(active: Memo<bool>, id: String) {
    let token = use_unique_id("hide-others");
    let slot = use_hook(|| ListenerSlot::new(token));

    let effect_slot = slot.clone();
    use_effect(move || {
        if active() {
            effect_slot.claim();
            dom::hide_others(effect_slot.token(), &id);
        } else {
            effect_slot.release();
        }
    });

    use_drop(move || slot.release());
}
