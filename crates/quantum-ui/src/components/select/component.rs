use dioxus::prelude::*;
use quantum_types::Placement;

use crate::components::aria::{flag, hidden_style, open_state};
use crate::components::form::use_form;
use crate::components::popper::{PopperArrow, PopperContent, PopperRoot};
use crate::components::portal::Portal;
use crate::hooks::{
    use_content_height, use_controlled, use_controlled_option, use_outside_click, use_presence,
    use_unique_id,
};

/// One `option` of the hidden native `select`.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, PartialEq)]
pub struct SelectContext {
    pub open: Memo<bool>,
    pub set_open: Callback<bool>,
    pub value: Memo<Option<String>>,
    pub set_value: Callback<String>,
    pub disabled: ReadSignal<bool>,
    pub required: ReadSignal<bool>,
    /// Items in mount order, with the text registered by their `SelectItemText`.
    pub options: Signal<Vec<NativeOption>>,
    pub trigger_id: String,
    pub content_id: String,
}

impl SelectContext {
    fn register_option(&self, value: &str) {
        let mut registry = self.options;
        let mut options = registry.write();
        if !options.iter().any(|option| option.value == value) {
            options.push(NativeOption {
                value: value.to_string(),
                label: String::new(),
            });
        }
    }

    fn set_label(&self, value: &str, label: &str) {
        let mut registry = self.options;
        let mut options = registry.write();
        match options.iter_mut().find(|option| option.value == value) {
            Some(option) if option.label != label => option.label = label.to_string(),
            Some(_) => {}
            None => options.push(NativeOption {
                value: value.to_string(),
                label: label.to_string(),
            }),
        }
    }

    fn unregister_option(&self, value: &str) {
        let mut registry = self.options;
        if let Ok(mut options) = registry.try_write() {
            options.retain(|option| option.value != value);
        };
    }

    /// Text of the selected item, if it registered one.
    pub fn selected_label(&self) -> Option<String> {
        let value = self.value.read();
        let value = value.as_deref()?;
        self.options
            .read()
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.clone())
    }
}

pub fn use_select() -> SelectContext {
    use_context::<SelectContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectRootProps {
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,

    #[props(default)]
    pub default_open: bool,

    #[props(default)]
    pub on_open_change: Callback<bool>,

    /// Controlled selection. Leave unset to let the select manage it.
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

    /// Name of the hidden native `select` submitted with a form.
    #[props(default)]
    pub name: Option<String>,

    pub children: Element,
}

/// Owns open state and selection. Inside a `FormRoot`, or when given a
/// `name`, a hidden native `select` mirrors the selection.
#[component]
pub fn SelectRoot(props: SelectRootProps) -> Element {
    let (open, set_open) = use_controlled(props.open, props.default_open, props.on_open_change);
    let (value, set_value) = use_controlled_option(props.value, props.default_value.clone(), props.on_value_change);
    let trigger_id = use_unique_id("select-trigger");
    let content_id = use_unique_id("select-content");
    let in_form = use_form().is_some();

    let ctx = use_context_provider(|| SelectContext {
        open,
        set_open,
        value,
        set_value,
        disabled: props.disabled,
        required: props.required,
        options: Signal::new(Vec::new()),
        trigger_id: trigger_id.clone(),
        content_id,
    });

    let native = in_form || props.name.is_some();
    let options = ctx.options.read().to_vec();
    let selected = value().unwrap_or_default();

    rsx! {
        PopperRoot { anchor_id: trigger_id,
            {props.children}
        }
        if native {
            select {
                "aria-hidden": "true",
                tabindex: "-1",
                name: props.name.clone().unwrap_or_default(),
                required: (props.required)(),
                disabled: (props.disabled)(),
                value: "{selected}",
                style: "position: absolute; border: none; width: 1px; height: 1px; padding: 0px; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0);",
                option { value: "" }
                for option in options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.value == selected,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

/// Opens and closes the list on pointer-down, Space, Enter and the vertical
/// arrows. Shows `placeholder` instead of its children until something is
/// selected.
#[component]
pub fn SelectTrigger(
    #[props(default)] disabled: bool,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] onpointerdown: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_select();
    let open = (ctx.open)();
    let disabled = disabled || (ctx.disabled)();
    let set_open = ctx.set_open;
    let show_placeholder = ctx.value.read().is_none() && placeholder.is_some();

    rsx! {
        button {
            r#type: "button",
            id: "{ctx.trigger_id}",
            role: "combobox",
            "aria-controls": "{ctx.content_id}",
            "aria-expanded": flag(open),
            "data-state": open_state(open),
            "data-disabled": disabled.then_some(""),
            disabled,
            onpointerdown: move |evt| {
                if !disabled {
                    set_open.call(!open);
                }
                onpointerdown.call(evt);
            },
            onkeydown: move |evt: KeyboardEvent| {
                if disabled {
                    return;
                }
                if matches!(evt.code(), Code::Space | Code::Enter | Code::ArrowUp | Code::ArrowDown) {
                    evt.prevent_default();
                    set_open.call(!open);
                }
            },
            ..attributes,
            if show_placeholder {
                {placeholder.clone().unwrap_or_default()}
            } else {
                {children}
            }
        }
    }
}

/// The selected item's text, or `placeholder` when nothing is selected.
///
/// Pass `render` to show something other than the registered text.
#[component]
pub fn SelectValue(
    #[props(default)] placeholder: Option<String>,
    #[props(default)] render: Option<Callback<String, Element>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_select();
    let label = ctx.selected_label();

    let content = match ((ctx.value)(), render) {
        (None, _) => rsx! { {placeholder.unwrap_or_default()} },
        (Some(value), Some(render)) => render.call(value),
        (Some(value), None) => rsx! {
            span { style: "pointer-events: none;", {label.unwrap_or(value)} }
        },
    };

    rsx! {
        span { ..attributes, {content} }
    }
}

/// The option list.
///
/// While closed it stays mounted but hidden, so items keep their text
/// registered for `SelectValue` and the native `select`.
#[component]
pub fn SelectContent(
    #[props(default)] placement: Option<Placement>,
    #[props(default)] offset: Option<f64>,
    #[props(default)] detect_padding: Option<f64>,
    #[props(default)] hide_when_anchor_disappear: Option<bool>,
    #[props(default)] has_arrow: Option<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_select();
    let set_open = ctx.set_open;
    use_outside_click(
        ctx.open,
        vec![ctx.trigger_id.clone(), ctx.content_id.clone()],
        Callback::new(move |_| set_open.call(false)),
    );
    let (present, on_animation_end) = use_presence(ctx.open, ctx.content_id.clone());
    let height = use_content_height(ctx.content_id.clone(), ctx.open);

    let open = (ctx.open)();
    let present = present();
    let height = height().map(|height| format!("--select-content-height: {height}px;"));

    rsx! {
        Portal {
            PopperContent {
                placement,
                offset,
                detect_padding,
                hide_when_anchor_disappear,
                has_arrow,
                style: hidden_style(present),
                div {
                    id: "{ctx.content_id}",
                    role: "listbox",
                    "data-state": open_state(open),
                    hidden: !present,
                    style: height.unwrap_or_default(),
                    onanimationend: move |_| on_animation_end.call(()),
                    ontransitionend: move |_| on_animation_end.call(()),
                    ..attributes,
                    {children}
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SelectItemContext {
    pub value: String,
}

#[component]
pub fn SelectItem(
    value: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_select();
    use_context_provider(|| SelectItemContext { value: value.clone() });

    let register = ctx.clone();
    use_effect(use_reactive((&value,), move |(value,)| register.register_option(&value)));

    let unregister = ctx.clone();
    let registered = value.clone();
    use_drop(move || unregister.unregister_option(&registered));

    let selected = ctx.value.read().as_deref() == Some(value.as_str());
    let open = (ctx.open)();

    rsx! {
        div {
            role: "option",
            "aria-selected": flag(selected),
            "aria-disabled": flag(disabled),
            "data-state": flag(selected),
            "data-disabled": disabled.then_some(""),
            onclick: move |evt| {
                onclick.call(evt);
                if disabled {
                    return;
                }
                ctx.set_value.call(value.clone());
                ctx.set_open.call(!open);
            },
            ..attributes,
            {children}
        }
    }
}

/// Display text of the enclosing item, also used for `SelectValue` and the
/// native `option`.
#[component]
pub fn SelectItemText(
    text: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_select();
    let item = use_context::<SelectItemContext>();

    use_effect(use_reactive((&text,), move |(text,)| ctx.set_label(&item.value, &text)));

    rsx! {
        span { ..attributes, "{text}" }
    }
}

#[component]
pub fn SelectArrow(
    #[props(default)] x_offset: f64,
    #[props(default)] y_offset: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        PopperArrow { x_offset, y_offset, attributes, {children} }
    }
}
