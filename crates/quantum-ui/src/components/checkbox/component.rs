use dioxus::prelude::*;

use crate::components::aria::{checked_state, flag, NATIVE_CONTROL_STYLE};
use crate::components::form::use_form;
use crate::hooks::use_controlled;

#[derive(Clone, Copy, PartialEq)]
pub struct CheckboxContext {
    pub checked: Memo<bool>,
    pub set_checked: Callback<bool>,
}

pub fn use_checkbox() -> CheckboxContext {
    use_context::<CheckboxContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxRootProps {
    #[props(default)]
    pub checked: ReadSignal<Option<bool>>,

    #[props(default)]
    pub default_checked: bool,

    #[props(default)]
    pub on_checked_change: Callback<bool>,

    pub children: Element,
}

#[component]
pub fn CheckboxRoot(props: CheckboxRootProps) -> Element {
    let (checked, set_checked) = use_controlled(props.checked, props.default_checked, props.on_checked_change);
    use_context_provider(|| CheckboxContext {
        checked,
        set_checked,
    });

    rsx! {
        {props.children}
    }
}

/// The clickable box. A `role` attribute replaces the default `checkbox`.
///
/// Inside a `FormRoot`, or when given a `name`, a hidden native checkbox
/// carries the state into form submission.
#[component]
pub fn CheckboxButton(
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] name: Option<String>,
    #[props(default)] value: Option<String>,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_checkbox();
    let in_form = use_form().is_some();
    let checked = (ctx.checked)();
    let custom_role = attributes.iter().any(|attr| attr.name == "role");
    let native = in_form || name.is_some();

    rsx! {
        button {
            r#type: "button",
            role: (!custom_role).then_some("checkbox"),
            "aria-checked": flag(checked),
            "aria-disabled": flag(disabled),
            "aria-required": flag(required),
            "data-state": checked_state(checked),
            "data-disabled": disabled.then_some(""),
            disabled,
            onclick: move |evt| {
                if !disabled {
                    ctx.set_checked.call(!checked);
                }
                onclick.call(evt);
            },
            ..attributes,
            {children}
        }
        if native {
            input {
                r#type: "checkbox",
                "aria-hidden": "true",
                tabindex: "-1",
                name: name.clone().unwrap_or_default(),
                value: value.clone().unwrap_or_else(|| "on".to_string()),
                checked,
                required,
                disabled,
                style: NATIVE_CONTROL_STYLE,
            }
        }
    }
}

/// Renders its children only while the checkbox is checked.
#[component]
pub fn CheckboxIndicator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_checkbox();
    let checked = (ctx.checked)();

    rsx! {
        span {
            "data-state": checked_state(checked),
            ..attributes,
            if checked {
                {children}
            }
        }
    }
}
