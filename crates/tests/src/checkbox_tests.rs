use dioxus::prelude::*;
use quantum_ui::*;

use crate::common::render;

#[test]
fn unchecked_checkbox_reports_state_and_hides_indicator() {
    fn app() -> Element {
        rsx! {
            CheckboxRoot {
                CheckboxButton {
                    CheckboxIndicator { "✓" }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="checkbox""#));
    assert!(html.contains(r#"aria-checked="false""#));
    assert!(html.contains(r#"data-state="unchecked""#));
    assert!(!html.contains("✓"));
    assert!(!html.contains(r#"type="checkbox""#));
}

#[test]
fn default_checked_shows_indicator() {
    fn app() -> Element {
        rsx! {
            CheckboxRoot { default_checked: true,
                CheckboxButton { required: true,
                    CheckboxIndicator { "✓" }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"aria-checked="true""#));
    assert!(html.contains(r#"aria-required="true""#));
    assert!(html.contains(r#"data-state="checked""#));
    assert!(html.contains("✓"));
}

#[test]
fn named_checkbox_renders_hidden_native_input() {
    fn app() -> Element {
        rsx! {
            CheckboxRoot { checked: Some(true),
                CheckboxButton { name: "terms", value: "accepted" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"type="checkbox""#));
    assert!(html.contains(r#"name="terms""#));
    assert!(html.contains(r#"value="accepted""#));
}

#[test]
fn checkbox_inside_form_renders_native_input_without_name() {
    fn app() -> Element {
        rsx! {
            FormRoot {
                CheckboxRoot {
                    CheckboxButton {}
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"type="checkbox""#));
    assert!(html.contains(r#"value="on""#));
}

#[test]
fn role_attribute_replaces_default_role() {
    fn app() -> Element {
        rsx! {
            CheckboxRoot {
                CheckboxButton { role: "switch" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="switch""#));
    assert!(!html.contains(r#"role="checkbox""#));
}
