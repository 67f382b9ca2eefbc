use std::time::Duration;

use dioxus::prelude::*;
use quantum_types::selection::{apply_selection, matches_search, merge_texts, toggle_value};
use quantum_types::{Placement, SelectionMode};

use crate::components::aria::{flag, hidden_style, open_state};
use crate::components::checkbox::{CheckboxButton, CheckboxRoot};
use crate::components::focus_trap::FocusTrap;
use crate::components::popper::{PopperArrow, PopperContent, PopperRoot};
use crate::components::portal::Portal;
use crate::components::radio_group::{RadioGroupItem, RadioGroupRoot};
use crate::config::use_quantum_config;
use crate::hooks::{
    use_content_height, use_controlled, use_debounce, use_outside_click, use_presence,
    use_unique_id,
};

#[derive(Clone, Copy, PartialEq)]
pub struct ComboboxContext {
    pub open: Memo<bool>,
    pub set_open: Callback<bool>,
    pub value: Memo<Vec<String>>,
    pub set_value: Callback<Vec<String>>,
    pub mode: ReadSignal<SelectionMode>,
    pub disabled: ReadSignal<bool>,
    /// Display text registered by each item, keyed by item value.
    labels: Signal<Vec<(String, String)>>,
    /// Whether a `ComboboxSearchInput` is mounted. Items only filter when one is.
    has_search: Signal<bool>,
    search: Signal<String>,
    trigger_id: Signal<String>,
    content_id: Signal<String>,
}

impl ComboboxContext {
    fn set_label(&self, value: &str, text: &str) {
        let mut registry = self.labels;
        let mut labels = registry.write();
        match labels.iter_mut().find(|(entry, _)| entry == value) {
            Some((_, existing)) if existing != text => *existing = text.to_string(),
            Some(_) => {}
            None => labels.push((value.to_string(), text.to_string())),
        }
    }

    fn remove_label(&self, value: &str) {
        let mut registry = self.labels;
        if let Ok(mut labels) = registry.try_write() {
            labels.retain(|(entry, _)| entry != value);
        };
    }

    /// Registered texts of the selected values, in selection order.
    pub fn selected_texts(&self) -> Vec<String> {
        let labels = self.labels.read();
        self.value
            .read()
            .iter()
            .filter_map(|value| {
                labels
                    .iter()
                    .find(|(entry, _)| entry == value)
                    .map(|(_, text)| text.clone())
            })
            .collect()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.read().iter().any(|selected| selected == value)
    }

    /// Whether an item with these searchable texts is filtered out.
    pub fn is_filtered_out(&self, texts: &[String]) -> bool {
        (self.has_search)() && !matches_search(texts, &self.search.read())
    }

    fn commit(&self, next: Vec<String>, content: Option<ComboboxContentContext>) {
        self.set_value.call(next);
        if content.is_some_and(|content| (content.destroy_when_value_change)()) {
            tracing::debug!("combobox closing after selection");
            self.set_open.call(false);
        }
    }
}

pub fn use_combobox() -> ComboboxContext {
    use_context::<ComboboxContext>()
}

/// Values handed to a `ComboboxValue` render callback.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxValueView {
    pub values: Vec<String>,
    pub texts: Vec<String>,
}

#[derive(Props, Clone, PartialEq)]
pub struct ComboboxRootProps {
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,

    #[props(default)]
    pub default_open: bool,

    #[props(default)]
    pub on_open_change: Callback<bool>,

    /// Controlled selection. Leave unset to let the combobox manage it.
    #[props(default)]
    pub value: ReadSignal<Option<Vec<String>>>,

    #[props(default)]
    pub default_value: Vec<String>,

    #[props(default)]
    pub on_value_change: Callback<Vec<String>>,

    /// Whether picking an item replaces the selection or toggles it.
    #[props(default)]
    pub mode: ReadSignal<SelectionMode>,

    #[props(default)]
    pub disabled: ReadSignal<bool>,

    pub children: Element,
}

#[component]
pub fn ComboboxRoot(props: ComboboxRootProps) -> Element {
    let (open, set_open) = use_controlled(props.open, props.default_open, props.on_open_change);
    let (value, set_value) = use_controlled(props.value, props.default_value.clone(), props.on_value_change);
    let trigger_id = use_unique_id("combobox-trigger");
    let content_id = use_unique_id("combobox-content");

    use_context_provider(|| ComboboxContext {
        open,
        set_open,
        value,
        set_value,
        mode: props.mode,
        disabled: props.disabled,
        labels: Signal::new(Vec::new()),
        has_search: Signal::new(false),
        search: Signal::new(String::new()),
        trigger_id: Signal::new(trigger_id.clone()),
        content_id: Signal::new(content_id),
    });

    rsx! {
        PopperRoot { anchor_id: trigger_id,
            {props.children}
        }
    }
}

/// Toggles the menu on pointer-down.
#[component]
pub fn ComboboxTrigger(
    #[props(default)] onpointerdown: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_combobox();
    let open = (ctx.open)();
    let disabled = (ctx.disabled)();

    rsx! {
        button {
            r#type: "button",
            id: "{ctx.trigger_id}",
            "aria-haspopup": "menu",
            "aria-expanded": flag(open),
            "aria-controls": "{ctx.content_id}",
            "aria-disabled": flag(disabled),
            "data-state": open_state(open),
            "data-disabled": disabled.then_some(""),
            onpointerdown: move |evt| {
                if !disabled {
                    ctx.set_open.call(!open);
                }
                onpointerdown.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}

/// Shows `placeholder` while nothing is selected, otherwise the output of
/// `render` or the selected items' texts.
#[component]
pub fn ComboboxValue(
    #[props(default)] placeholder: Option<String>,
    #[props(default)] render: Option<Callback<ComboboxValueView, Element>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_combobox();
    let values = ctx.value.read().clone();
    let texts = ctx.selected_texts();

    let content = match (values.is_empty(), placeholder, render) {
        (true, Some(placeholder), _) => rsx! { {placeholder} },
        (_, _, Some(render)) => render.call(ComboboxValueView { values, texts }),
        (_, _, None) => rsx! {
            for (index, text) in texts.into_iter().enumerate() {
                span { key: "{index}", style: "pointer-events: none;", "{text}" }
            }
        },
    };

    rsx! {
        span { style: "pointer-events: none;", ..attributes, {content} }
    }
}

/// Text field that filters the items by their registered texts.
///
/// Typing is debounced by `search.debounce_ms` from the configuration.
#[component]
pub fn ComboboxSearchInput(
    #[props(default)] placeholder: String,
    /// Query the field starts with.
    #[props(default)]
    default_value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_combobox();
    let delay = Duration::from_millis(use_quantum_config().search.debounce_ms);
    let mut query = use_signal(|| default_value.clone());
    let debounced = use_debounce(query, delay);

    let mut has_search = ctx.has_search;
    use_effect(move || has_search.set(true));
    use_drop(move || {
        if let Ok(mut has_search) = has_search.try_write() {
            *has_search = false;
        };
    });

    let mut search = ctx.search;
    use_effect(move || {
        let next = debounced();
        if *search.peek() != next {
            tracing::debug!(query = %next, "combobox search applied");
            search.set(next);
        }
    });

    let open = (ctx.open)();
    let disabled = (ctx.disabled)();

    rsx! {
        input {
            r#type: "text",
            role: "combobox",
            "aria-expanded": flag(open),
            "aria-controls": "{ctx.content_id}",
            "aria-disabled": flag(disabled),
            "data-disabled": disabled.then_some(""),
            "data-state": open_state(open),
            value: "{query}",
            placeholder,
            oninput: move |evt: FormEvent| {
                query.set(evt.value());
                oninput.call(evt);
            },
            ..attributes,
        }
    }
}

#[component]
pub fn ComboboxPortal(children: Element) -> Element {
    rsx! {
        Portal { {children} }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ComboboxContentContext {
    pub destroy_when_value_change: Signal<bool>,
}

/// The menu. Place it inside a `ComboboxPortal`.
///
/// Like `SelectContent` it stays mounted while closed so that items keep
/// their texts registered for `ComboboxValue`.
#[component]
pub fn ComboboxContent(
    #[props(default)] destroy_when_value_change: Option<bool>,
    #[props(default)] placement: Option<Placement>,
    #[props(default)] offset: Option<f64>,
    #[props(default)] detect_padding: Option<f64>,
    #[props(default)] hide_when_anchor_disappear: Option<bool>,
    #[props(default)] has_arrow: Option<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_combobox();
    let config = use_quantum_config();
    let destroy = destroy_when_value_change.unwrap_or(config.combobox.destroy_when_value_change);
    let content = use_context_provider(|| ComboboxContentContext {
        destroy_when_value_change: Signal::new(destroy),
    });
    let mut destroy_signal = content.destroy_when_value_change;
    use_effect(use_reactive((&destroy,), move |(destroy,)| {
        if *destroy_signal.peek() != destroy {
            destroy_signal.set(destroy);
        }
    }));

    let content_id = ctx.content_id.read().clone();
    let set_open = ctx.set_open;
    use_outside_click(
        ctx.open,
        vec![ctx.trigger_id.read().clone(), content_id.clone()],
        Callback::new(move |_| set_open.call(false)),
    );
    let (present, on_animation_end) = use_presence(ctx.open, content_id.clone());
    let search = ctx.search;
    let open_memo = ctx.open;
    let height_key = use_memo(move || (open_memo(), search()));
    let height = use_content_height(content_id.clone(), height_key);

    let open = (ctx.open)();
    let present = present();
    let height = height().map(|height| format!("--combobox-content-height: {height}px;"));

    rsx! {
        PopperContent {
            placement,
            offset,
            detect_padding,
            hide_when_anchor_disappear,
            has_arrow,
            style: hidden_style(present),
            FocusTrap { active: open,
                div {
                    id: "{content_id}",
                    role: "menu",
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

/// Per-row state shared with the row's text parts.
#[derive(Clone, Copy, PartialEq)]
pub struct ComboboxItemContext {
    pub value: Signal<String>,
    /// Visible text plus hidden aliases, matched against the search query.
    pub texts: Signal<Vec<String>>,
    pub disabled: Signal<bool>,
}

pub fn use_combobox_item() -> ComboboxItemContext {
    use_context::<ComboboxItemContext>()
}

fn use_item_context(value: &str, disabled: bool) -> ComboboxItemContext {
    let item = use_context_provider(|| ComboboxItemContext {
        value: Signal::new(value.to_string()),
        texts: Signal::new(Vec::new()),
        disabled: Signal::new(disabled),
    });

    let mut value_signal = item.value;
    let mut disabled_signal = item.disabled;
    use_effect(use_reactive((&value.to_string(), &disabled), move |(value, disabled)| {
        if *value_signal.peek() != value {
            value_signal.set(value);
        }
        if *disabled_signal.peek() != disabled {
            disabled_signal.set(disabled);
        }
    }));

    item
}

/// A selectable row. Rows that fail the current search stay mounted but hidden.
#[component]
pub fn ComboboxItem(
    value: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_combobox();
    let content = try_use_context::<ComboboxContentContext>();
    let item = use_item_context(&value, disabled);

    let disabled = disabled || (ctx.disabled)();
    let selected = ctx.is_selected(&value);
    let filtered_out = ctx.is_filtered_out(&item.texts.read());

    rsx! {
        div {
            role: "menuitem",
            "aria-disabled": flag(disabled),
            "data-disabled": disabled.then_some(""),
            "data-selected": flag(selected),
            hidden: filtered_out,
            onclick: move |evt| {
                if !disabled {
                    let next = apply_selection(&ctx.value.peek(), &value, *ctx.mode.peek());
                    ctx.commit(next, content);
                }
                onclick.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}

/// Registers `text` (and `hidden_text` aliases) for search and for
/// `ComboboxValue`, and renders `text`.
fn use_item_text(text: &str, hidden_text: &[String]) -> ComboboxItemContext {
    let ctx = use_combobox();
    let item = use_combobox_item();

    let mut texts = item.texts;
    let value = item.value;
    use_effect(use_reactive(
        (&text.to_string(), &hidden_text.to_vec()),
        move |(text, hidden_text)| {
            let mut incoming = vec![text.clone()];
            incoming.extend(hidden_text);
            let merged = merge_texts(&texts.peek(), &incoming);
            if *texts.peek() != merged {
                texts.set(merged);
            }
            ctx.set_label(&value.peek(), &text);
        },
    ));

    use_drop(move || {
        if let Ok(value) = value.try_read() {
            ctx.remove_label(&value);
        }
    });

    item
}

#[component]
pub fn ComboboxItemText(
    text: String,
    #[props(default)] hidden_text: Vec<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let item = use_item_text(&text, &hidden_text);
    let disabled = (item.disabled)();

    rsx! {
        span {
            "aria-disabled": flag(disabled),
            "data-disabled": disabled.then_some(""),
            ..attributes,
            "{text}"
        }
    }
}

/// A row with a checkbox that toggles `value` in the selection, whatever the
/// combobox mode.
#[component]
pub fn ComboboxCheckboxRoot(
    value: String,
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_combobox();
    let content = try_use_context::<ComboboxContentContext>();
    let item = use_item_context(&value, disabled);

    let selected = ctx.is_selected(&value);
    let filtered_out = ctx.is_filtered_out(&item.texts.read());

    rsx! {
        div {
            role: "menuitem",
            "aria-disabled": flag(disabled),
            "data-disabled": disabled.then_some(""),
            hidden: filtered_out,
            ..attributes,
            CheckboxRoot {
                checked: Some(selected),
                on_checked_change: move |_| {
                    let next = toggle_value(&ctx.value.peek(), &value);
                    ctx.commit(next, content);
                },
                {children}
            }
        }
    }
}

#[component]
pub fn ComboboxCheckbox(
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let item = use_combobox_item();
    let disabled = disabled || (item.disabled)();

    rsx! {
        CheckboxButton {
            disabled,
            role: "menuitemcheckbox",
            attributes,
            {children}
        }
    }
}

#[component]
pub fn ComboboxCheckboxText(
    text: String,
    #[props(default)] hidden_text: Vec<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        ComboboxItemText { text, hidden_text, attributes }
    }
}

/// Single-select rows built on `RadioGroupRoot`, bound to the first value.
#[component]
pub fn ComboboxRadioGroup(
    #[props(default)] name: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_combobox();
    let content = try_use_context::<ComboboxContentContext>();
    let current = ctx.value.read().first().cloned();

    rsx! {
        RadioGroupRoot {
            value: current,
            on_value_change: move |value: String| {
                if !value.is_empty() {
                    ctx.commit(vec![value], content);
                }
            },
            name,
            disabled,
            required,
            attributes,
            {children}
        }
    }
}

/// Scopes a radio row. Its button and text read `value` from here.
#[component]
pub fn ComboboxRadioItem(
    value: String,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let ctx = use_combobox();
    let item = use_item_context(&value, disabled);
    let filtered_out = ctx.is_filtered_out(&item.texts.read());

    rsx! {
        div {
            style: if filtered_out { "display: none;" } else { "display: contents;" },
            hidden: filtered_out,
            {children}
        }
    }
}

#[component]
pub fn ComboboxRadioItemButton(
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let item = use_combobox_item();
    let value = (item.value)();
    let disabled = disabled || (item.disabled)();

    rsx! {
        RadioGroupItem { value, disabled, attributes, {children} }
    }
}

#[component]
pub fn ComboboxRadioItemText(
    text: String,
    #[props(default)] hidden_text: Vec<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        ComboboxItemText { text, hidden_text, attributes }
    }
}

#[component]
pub fn ComboboxArrow(
    #[props(default)] x_offset: f64,
    #[props(default)] y_offset: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        PopperArrow { x_offset, y_offset, attributes, {children} }
    }
}
