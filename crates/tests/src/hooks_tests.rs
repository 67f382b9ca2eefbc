use std::time::Duration;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use quantum_ui::hooks::dom::ListenerSlot;
use quantum_ui::hooks::use_debounce;

use crate::common::{Harness, ScriptedDocument};

#[tokio::test]
async fn debounced_value_follows_the_source_after_the_delay() {
    fn app() -> Element {
        let mut source = use_signal(String::new);
        let settled = use_debounce(source, Duration::from_millis(40));
        use_effect(move || source.set("ab".to_string()));
        rsx! { "settled:{settled}" }
    }

    let harness = Harness::mount(app, ScriptedDocument::new()).await;
    assert!(harness.html().contains("settled:ab"));
    assert!(harness.document.ran("setTimeout(resolve, 40)") >= 1);
}

#[tokio::test]
async fn claiming_a_slot_twice_releases_the_first_listener() {
    fn app() -> Element {
        let slot = use_hook(|| ListenerSlot::new("slot-token".to_string()));
        use_effect(move || {
            slot.claim();
            assert!(slot.is_registered());
            slot.claim();
            slot.release();
            assert!(!slot.is_registered());
            slot.release();
        });
        rsx! {}
    }

    let harness = Harness::mount(app, ScriptedDocument::new()).await;
    assert_eq!(harness.document.ran(r#"delete window.__quantumListeners["slot-token"]"#), 2);
}
