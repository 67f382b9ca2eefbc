use dioxus::prelude::*;
use quantum_ui::*;

use crate::common::{count, render};

#[test]
fn group_marks_the_selected_item() {
    fn app() -> Element {
        rsx! {
            RadioGroupRoot { default_value: "civil",
                RadioGroupItem { value: "civil", "Civil" }
                RadioGroupItem { value: "criminal", "Criminal" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="radiogroup""#));
    assert_eq!(count(&html, r#"role="radio""#), 2);
    assert_eq!(count(&html, r#"aria-checked="true""#), 1);
    assert_eq!(count(&html, r#"data-state="checked""#), 1);
    assert_eq!(count(&html, r#"data-state="unchecked""#), 1);
    assert!(!html.contains(r#"type="radio""#));
}

#[test]
fn only_the_selected_item_is_in_tab_order() {
    fn app() -> Element {
        rsx! {
            RadioGroupRoot { value: Some("b".to_string()),
                RadioGroupItem { value: "a", "A" }
                RadioGroupItem { value: "b", "B" }
                RadioGroupItem { value: "c", "C" }
            }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, r#"tabindex="0""#), 1);
    assert_eq!(count(&html, r#"tabindex="-1""#), 2);
}

#[test]
fn disabled_item_and_named_group() {
    fn app() -> Element {
        rsx! {
            RadioGroupRoot { name: Some("kind".to_string()), required: true,
                RadioGroupItem { value: "a", "A" }
                RadioGroupItem { value: "b", disabled: true, "B" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"aria-required="true""#));
    assert_eq!(count(&html, r#"type="radio""#), 2);
    assert_eq!(count(&html, r#"name="kind""#), 2);
    assert_eq!(count(&html, r#"aria-disabled="true""#), 1);
}
