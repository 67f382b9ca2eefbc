use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use quantum_ui::*;

use crate::common::{count, render, Harness, ScriptedDocument};

#[test]
fn closed_dialog_renders_only_the_trigger() {
    fn app() -> Element {
        rsx! {
            DialogRoot {
                DialogTrigger { "Open" }
                DialogPortal {
                    DialogOverlay {}
                    DialogContent {
                        DialogTitle { "Title" }
                    }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"aria-haspopup="dialog""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"data-state="closed""#));
    assert!(!html.contains(r#"role="dialog""#));
    assert!(!html.contains("Title"));
}

#[test]
fn open_dialog_renders_modal_content_linked_to_its_title() {
    fn app() -> Element {
        rsx! {
            DialogRoot { default_open: true,
                DialogTrigger { "Open" }
                DialogPortal {
                    DialogOverlay { class: "overlay" }
                    DialogContent {
                        DialogTitle { "Delete case" }
                        DialogDescription { "This cannot be undone." }
                        DialogCloseButton { "Close" }
                    }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains("data-quantum-focus-trap"));
    assert!(html.contains("Delete case"));
    assert!(html.contains("This cannot be undone."));
    assert_eq!(count(&html, r#"aria-hidden="true""#), 1);
    assert!(html.contains(r#"aria-labelledby="quantum-dialog-title-"#));
    assert!(html.contains(r#"<h1 id="quantum-dialog-title-"#));
}

#[test]
fn controlled_open_prop_wins_over_default() {
    fn app() -> Element {
        rsx! {
            DialogRoot { open: Some(false), default_open: true,
                DialogContent { "Body" }
            }
        }
    }

    let html = render(app);
    assert!(!html.contains("Body"));
}

#[tokio::test]
async fn escape_anywhere_closes_a_dialog_without_focusable_content() {
    fn app() -> Element {
        rsx! {
            DialogRoot { default_open: true,
                DialogTrigger { "Open" }
                DialogPortal {
                    DialogContent {
                        DialogTitle { "Nothing to focus" }
                    }
                }
            }
        }
    }

    let document = ScriptedDocument::new().message(r#"addEventListener("keydown""#, serde_json::json!(true));
    let harness = Harness::mount(app, document).await;
    let html = harness.html();
    assert!(!html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert_eq!(harness.document.ran(r#"delete window.__quantumListeners["quantum-escape-"#), 1);
}

#[tokio::test]
async fn press_outside_closes_the_dialog() {
    fn app() -> Element {
        rsx! {
            DialogRoot { default_open: true,
                DialogTrigger { "Open" }
                DialogContent { "Body" }
            }
        }
    }

    let document = ScriptedDocument::new().message(r#"addEventListener("mousedown""#, serde_json::json!(true));
    let html = Harness::mount(app, document).await.html();
    assert!(!html.contains("Body"));
    assert!(html.contains(r#"data-state="closed""#));
}
