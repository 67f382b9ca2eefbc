use dioxus::prelude::*;
use quantum_ui::*;

use crate::common::{render, Harness, ScriptedDocument};

#[test]
fn field_wires_label_to_input() {
    fn app() -> Element {
        rsx! {
            FormRoot {
                FormField { name: "email",
                    FormLabel { "Email" }
                    FormInput { input_type: "email", required: true }
                    FormMessage { matches: ValidityKey::ValueMissing, "Required" }
                    FormMessage { matches: ValidityKey::TypeMismatch, "Not an email" }
                }
                FormSubmitButton { "Send" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<form"));
    assert!(html.contains(r#"for="quantum-form-field-"#));
    assert!(html.contains(r#"id="quantum-form-field-"#));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains(r#"aria-invalid="false""#));
    assert!(!html.contains("Required"));
    assert!(!html.contains("Not an email"));
}

#[test]
fn custom_message_stays_hidden_before_the_first_submit() {
    fn app() -> Element {
        let always = Callback::new(|_: ()| true);
        rsx! {
            FormRoot {
                FormField { name: "code",
                    FormInput {}
                    FormMessage { matches: always, "Bad code" }
                }
            }
        }
    }

    assert!(!render(app).contains("Bad code"));
}

#[component]
fn CheckOnMount() -> Element {
    let field = use_form_field();
    use_effect(move || {
        let field = field.clone();
        spawn(async move { field.record_validity().await });
    });
    rsx! {}
}

fn required_field() -> Element {
    rsx! {
        FormRoot {
            FormField { name: "email",
                FormInput { input_type: "email", required: true }
                FormMessage { matches: ValidityKey::ValueMissing, "Required" }
                FormMessage { matches: ValidityKey::TypeMismatch, "Not an email" }
                CheckOnMount {}
            }
        }
    }
}

#[tokio::test]
async fn failed_constraint_shows_its_message() {
    let document = ScriptedDocument::new().reply("node.validity", serde_json::json!({ "valueMissing": true }));
    let harness = Harness::mount(required_field, document).await;
    let html = harness.html();
    assert!(html.contains("Required"));
    assert!(!html.contains("Not an email"));
    assert!(html.contains(r#"aria-invalid="true""#));
    assert_eq!(harness.document.ran("node.validity"), 1);
}

#[tokio::test]
async fn valid_input_keeps_messages_hidden() {
    let document = ScriptedDocument::new().reply("node.validity", serde_json::json!({ "valid": true }));
    let html = Harness::mount(required_field, document).await.html();
    assert!(!html.contains("Required"));
    assert!(html.contains(r#"aria-invalid="false""#));
}
