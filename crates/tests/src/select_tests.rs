use dioxus::prelude::*;
use quantum_ui::*;

use crate::common::{count, render, Harness, ScriptedDocument};

#[test]
fn trigger_shows_placeholder_until_something_is_selected() {
    fn app() -> Element {
        rsx! {
            SelectRoot {
                SelectTrigger { placeholder: "Pick a court",
                    SelectValue {}
                }
                SelectContent {
                    SelectItem { value: "d9", SelectItemText { text: "District 9" } }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="combobox""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("Pick a court"));
    assert!(html.contains(r#"role="listbox""#));
    assert!(html.contains("display: none;"));
}

#[test]
fn selected_item_is_marked_and_value_renders_through_callback() {
    fn app() -> Element {
        rsx! {
            SelectRoot { default_value: "d12", default_open: true,
                SelectTrigger {
                    SelectValue { render: move |value: String| rsx! { "court:{value}" } }
                }
                SelectContent {
                    SelectItem { value: "d9", SelectItemText { text: "District 9" } }
                    SelectItem { value: "d12", SelectItemText { text: "District 12" } }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("court:d12"));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert_eq!(count(&html, r#"role="option""#), 2);
    assert_eq!(count(&html, r#"aria-selected="true""#), 1);
    assert!(html.contains("District 12"));
}

#[test]
fn value_placeholder_when_empty() {
    fn app() -> Element {
        rsx! {
            SelectRoot {
                SelectTrigger {
                    SelectValue { placeholder: "None yet" }
                }
            }
        }
    }

    assert!(render(app).contains("None yet"));
}

#[test]
fn named_select_renders_native_select() {
    fn app() -> Element {
        rsx! {
            SelectRoot { name: "court", required: true,
                SelectTrigger { "Court" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<select"));
    assert!(html.contains(r#"name="court""#));
}

#[test]
fn disabled_root_disables_trigger() {
    fn app() -> Element {
        rsx! {
            SelectRoot { disabled: true,
                SelectTrigger { "Court" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("data-disabled"));
    assert!(!html.contains("<select"));
}

#[tokio::test]
async fn item_text_is_mirrored_into_the_value_and_the_native_select() {
    fn app() -> Element {
        rsx! {
            SelectRoot { name: "court", default_value: "d12",
                SelectTrigger { SelectValue { placeholder: "Court" } }
                SelectContent {
                    SelectItem { value: "d9", SelectItemText { text: "District 9" } }
                    SelectItem { value: "d12", SelectItemText { text: "District 12" } }
                }
            }
        }
    }

    let html = Harness::mount(app, ScriptedDocument::new()).await.html();
    assert_eq!(count(&html, "District 12"), 3);
    assert_eq!(count(&html, "District 9"), 2);
    assert_eq!(count(&html, "<option"), 3);
    assert_eq!(count(&html, "selected=true"), 1);
    assert!(!html.contains("Court"));
}

#[tokio::test]
async fn press_outside_closes_the_list() {
    fn app() -> Element {
        rsx! {
            SelectRoot { default_open: true,
                SelectTrigger { "Court" }
                SelectContent {
                    SelectItem { value: "d9", SelectItemText { text: "District 9" } }
                }
            }
        }
    }

    let document = ScriptedDocument::new().message(r#"addEventListener("mousedown""#, serde_json::json!(true));
    let html = Harness::mount(app, document).await.html();
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("hidden=true"));
}

fn closing_select() -> Element {
    let mut open = use_signal(|| Some(true));
    use_effect(move || open.set(Some(false)));
    rsx! {
        SelectRoot { open,
            SelectTrigger { "Court" }
            SelectContent {
                SelectItem { value: "d9", SelectItemText { text: "District 9" } }
            }
        }
    }
}

#[tokio::test]
async fn closing_without_exit_animation_hides_the_list_at_once() {
    let html = Harness::mount(closing_select, ScriptedDocument::new()).await.html();
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("hidden=true"));
}

#[tokio::test]
async fn closing_with_exit_animation_keeps_the_list_until_it_ends() {
    let document = ScriptedDocument::new().reply(
        "getComputedStyle",
        serde_json::json!({ "animation_name": "fade-out", "transition_duration": "0s" }),
    );
    let html = Harness::mount(closing_select, document).await.html();
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"role="listbox""#));
    assert!(!html.contains("hidden=true"));
    assert!(!html.contains("display: none;"));
}
