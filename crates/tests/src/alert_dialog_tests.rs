use dioxus::prelude::*;
use quantum_ui::*;

use crate::common::{render, Harness, ScriptedDocument};

#[test]
fn open_alert_dialog_uses_alertdialog_role() {
    fn app() -> Element {
        rsx! {
            AlertDialogRoot { default_open: true,
                AlertDialogTrigger { "Remove" }
                AlertDialogPortal {
                    AlertDialogOverlay {}
                    AlertDialogContent {
                        AlertDialogTitle { "Remove attorney?" }
                        AlertDialogDescription { "They lose access immediately." }
                        AlertDialogCloseButton { "Cancel" }
                    }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="alertdialog""#));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains("Remove attorney?"));
    assert!(!html.contains(r#"role="dialog""#));
}

#[test]
fn closed_alert_dialog_hides_overlay_and_content() {
    fn app() -> Element {
        rsx! {
            AlertDialogRoot {
                AlertDialogTrigger { "Remove" }
                AlertDialogOverlay { class: "backdrop" }
                AlertDialogContent { "Body" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Remove"));
    assert!(!html.contains("backdrop"));
    assert!(!html.contains("Body"));
}

#[tokio::test]
async fn escape_closes_the_alert_dialog_but_outside_presses_do_not() {
    fn app() -> Element {
        rsx! {
            AlertDialogRoot { default_open: true,
                AlertDialogTrigger { "Remove" }
                AlertDialogContent { "Sure?" }
            }
        }
    }

    let outside = ScriptedDocument::new().message(r#"addEventListener("mousedown""#, serde_json::json!(true));
    assert!(Harness::mount(app, outside).await.html().contains("Sure?"));

    let escape = ScriptedDocument::new().message(r#"addEventListener("keydown""#, serde_json::json!(true));
    assert!(!Harness::mount(app, escape).await.html().contains("Sure?"));
}
