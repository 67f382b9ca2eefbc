use dioxus::prelude::*;
use quantum_types::focus::next_enabled;

use crate::components::aria::{checked_state, flag, NATIVE_CONTROL_STYLE};
use crate::components::form::use_form;
use crate::hooks::{dom, use_controlled_option, use_unique_id};

#[derive(Clone, PartialEq)]
struct RadioEntry {
    id: String,
    value: String,
    disabled: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub struct RadioGroupContext {
    pub value: Memo<Option<String>>,
    pub set_value: Callback<String>,
    pub disabled: ReadSignal<bool>,
    pub required: ReadSignal<bool>,
    pub name: ReadSignal<Option<String>>,
    entries: Signal<Vec<RadioEntry>>,
}

impl RadioGroupContext {
    fn register(&mut self, entry: RadioEntry) {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }

    fn unregister(&mut self, id: &str) {
        if let Ok(mut entries) = self.entries.try_write() {
            entries.retain(|entry| entry.id != id);
        };
    }

    /// Select the next (or previous) enabled item and focus it.
    fn step(&self, forward: bool) {
        let group_disabled = *self.disabled.peek();
        let entries = self.entries.peek().to_vec();
        let enabled: Vec<bool> = entries
            .iter()
            .map(|entry| !group_disabled && !entry.disabled)
            .collect();
        let current = (*self.value.peek())
            .clone()
            .and_then(|value| entries.iter().position(|entry| entry.value == value));
        if let Some(next) = next_enabled(&enabled, current, forward) {
            let entry = &entries[next];
            self.set_value.call(entry.value.clone());
            dom::focus_element(&entry.id);
        }
    }
}

pub fn use_radio_group() -> RadioGroupContext {
    use_context::<RadioGroupContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct RadioGroupRootProps {
    /// Controlled selection. Leave unset to let the group manage it.
    #[props(default)]
    pub value: ReadSignal<Option<String>>,

    #[props(default)]
    pub default_value: Option<String>,

    #[props(default)]
    pub on_value_change: Callback<String>,

    #[props(default)]
    pub disabled: ReadSignal<bool>,

    #[props(default)]
    pub required: ReadSignal<bool>,

    /// Name of the native radio inputs submitted with a form.
    #[props(default)]
    pub name: ReadSignal<Option<String>>,

    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,

    pub children: Element,
}

#[component]
pub fn RadioGroupRoot(props: RadioGroupRootProps) -> Element {
    let (value, set_value) = use_controlled_option(props.value, props.default_value.clone(), props.on_value_change);
    let ctx = use_context_provider(|| RadioGroupContext {
        value,
        set_value,
        disabled: props.disabled,
        required: props.required,
        name: props.name,
        entries: Signal::new(Vec::new()),
    });

    let disabled = (props.disabled)();
    let required = (props.required)();

    rsx! {
        div {
            role: "radiogroup",
            "aria-disabled": flag(disabled),
            "data-disabled": disabled.then_some(""),
            "aria-required": flag(required),
            "data-required": required.then_some(""),
            onkeydown: move |evt: KeyboardEvent| {
                let forward = match evt.key() {
                    Key::ArrowDown | Key::ArrowRight => true,
                    Key::ArrowUp | Key::ArrowLeft => false,
                    _ => return,
                };
                evt.prevent_default();
                ctx.step(forward);
            },
            ..props.attributes,
            {props.children}
        }
    }
}

#[component]
pub fn RadioGroupItem(
    value: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut ctx = use_radio_group();
    let in_form = use_form().is_some();
    let item_id = use_unique_id("radio-item");

    let entry_id = item_id.clone();
    use_effect(use_reactive((&value, &disabled), move |(value, disabled)| {
        ctx.register(RadioEntry {
            id: entry_id.clone(),
            value,
            disabled,
        });
    }));

    let drop_id = item_id.clone();
    use_drop(move || ctx.unregister(&drop_id));

    let checked = ctx.value.read().as_deref() == Some(value.as_str());
    let disabled = disabled || (ctx.disabled)();
    let name = (ctx.name)();
    let native = in_form || name.is_some();
    let required = (ctx.required)();
    let picked = value.clone();
    let tab_index = if checked || ctx.value.read().is_none() { "0" } else { "-1" };

    rsx! {
        button {
            r#type: "button",
            id: "{item_id}",
            role: "radio",
            "aria-checked": flag(checked),
            "aria-disabled": flag(disabled),
            "data-disabled": disabled.then_some(""),
            "data-state": checked_state(checked),
            tabindex: tab_index,
            disabled,
            onclick: move |evt| {
                if !disabled {
                    ctx.set_value.call(picked.clone());
                }
                onclick.call(evt);
            },
            ..attributes,
            {children}
        }
        if native {
            input {
                r#type: "radio",
                "aria-hidden": "true",
                tabindex: "-1",
                name: name.clone().unwrap_or_default(),
                value: "{value}",
                checked,
                required,
                disabled,
                style: NATIVE_CONTROL_STYLE,
            }
        }
    }
}
