use dioxus::prelude::*;

use crate::components::aria::{flag, open_state};
use crate::components::focus_trap::FocusTrap;
use crate::components::portal::Portal;
use crate::hooks::{use_controlled, use_escape_key, use_hide_others, use_outside_click, use_unique_id};

#[derive(Clone, PartialEq)]
pub struct DialogContext {
    pub open: Memo<bool>,
    pub set_open: Callback<bool>,
    pub trigger_id: String,
    pub content_id: String,
    pub title_id: String,
    pub description_id: String,
}

impl DialogContext {
    pub fn close(&self) {
        self.set_open.call(false);
    }

    pub fn toggle(&self) {
        self.set_open.call(!*self.open.peek());
    }
}

pub fn use_dialog() -> DialogContext {
    use_context::<DialogContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct DialogRootProps {
    /// Controlled open state. Leave unset to let the dialog manage it.
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,

    #[props(default)]
    pub default_open: bool,

    #[props(default)]
    pub on_open_change: Callback<bool>,

    pub children: Element,
}

/// Owns the open state. A mouse press outside both the trigger and the content
/// closes the dialog.
#[component]
pub fn DialogRoot(props: DialogRootProps) -> Element {
    let (open, set_open) = use_controlled(props.open, props.default_open, props.on_open_change);
    let trigger_id = use_unique_id("dialog-trigger");
    let content_id = use_unique_id("dialog-content");
    let title_id = use_unique_id("dialog-title");
    let description_id = use_unique_id("dialog-description");

    use_outside_click(
        open,
        vec![trigger_id.clone(), content_id.clone()],
        Callback::new(move |_| set_open.call(false)),
    );

    use_context_provider(|| DialogContext {
        open,
        set_open,
        trigger_id,
        content_id,
        title_id,
        description_id,
    });

    rsx! {
        {props.children}
    }
}

#[component]
pub fn DialogTrigger(
    #[props(default)] onpointerup: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dialog();
    let open = (ctx.open)();
    let toggle = ctx.clone();

    rsx! {
        button {
            r#type: "button",
            id: "{ctx.trigger_id}",
            "aria-haspopup": "dialog",
            "aria-expanded": flag(open),
            "aria-controls": "{ctx.content_id}",
            "data-state": open_state(open),
            onpointerup: move |evt| {
                toggle.toggle();
                onpointerup.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn DialogPortal(children: Element) -> Element {
    rsx! {
        Portal { {children} }
    }
}

/// Backdrop rendered only while the dialog is open.
#[component]
pub fn DialogOverlay(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dialog();
    if !(ctx.open)() {
        return rsx! {};
    }

    rsx! {
        div {
            "aria-hidden": "true",
            "data-state": "open",
            ..attributes,
            {children}
        }
    }
}

/// The modal surface.
///
/// Rendered only while open. Focus is trapped inside, Escape closes it
/// wherever focus is, and the rest of the page is hidden from assistive
/// technology meanwhile.
#[component]
pub fn DialogContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dialog();
    use_hide_others(ctx.open, ctx.content_id.clone());
    let set_open = ctx.set_open;
    use_escape_key(
        ctx.open,
        Callback::new(move |_| {
            tracing::debug!("escape pressed, closing dialog");
            set_open.call(false);
        }),
    );

    if !(ctx.open)() {
        return rsx! {};
    }

    rsx! {
        FocusTrap {
            div {
                id: "{ctx.content_id}",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "{ctx.title_id}",
                "aria-describedby": "{ctx.description_id}",
                "data-state": "open",
                ..attributes,
                {children}
            }
        }
    }
}

#[component]
pub fn DialogTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dialog();

    rsx! {
        h1 { id: "{ctx.title_id}", ..attributes, {children} }
    }
}

#[component]
pub fn DialogDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dialog();

    rsx! {
        div { id: "{ctx.description_id}", ..attributes, {children} }
    }
}

#[component]
pub fn DialogCloseButton(
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dialog();

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                ctx.close();
                onclick.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}
