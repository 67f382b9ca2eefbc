use dioxus::prelude::*;

use crate::components::aria::{flag, open_state};
use crate::components::focus_trap::FocusTrap;
use crate::components::portal::Portal;
use crate::hooks::{use_controlled, use_escape_key, use_hide_others, use_unique_id};

#[derive(Clone, PartialEq)]
pub struct AlertDialogContext {
    pub open: Memo<bool>,
    pub set_open: Callback<bool>,
    pub content_id: String,
    pub title_id: String,
    pub description_id: String,
}

pub fn use_alert_dialog() -> AlertDialogContext {
    use_context::<AlertDialogContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct AlertDialogRootProps {
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,

    #[props(default)]
    pub default_open: bool,

    #[props(default)]
    pub on_open_change: Callback<bool>,

    pub children: Element,
}

/// Like `DialogRoot`, but pressing outside never closes it: an alert dialog
/// waits for an explicit answer.
#[component]
pub fn AlertDialogRoot(props: AlertDialogRootProps) -> Element {
    let (open, set_open) = use_controlled(props.open, props.default_open, props.on_open_change);
    let content_id = use_unique_id("alert-dialog-content");
    let title_id = use_unique_id("alert-dialog-title");
    let description_id = use_unique_id("alert-dialog-description");

    use_context_provider(|| AlertDialogContext {
        open,
        set_open,
        content_id,
        title_id,
        description_id,
    });

    rsx! {
        {props.children}
    }
}

#[component]
pub fn AlertDialogTrigger(
    #[props(default)] onpointerup: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_alert_dialog();
    let open = (ctx.open)();
    let set_open = ctx.set_open;

    rsx! {
        button {
            r#type: "button",
            "aria-haspopup": "dialog",
            "aria-expanded": flag(open),
            "aria-controls": "{ctx.content_id}",
            "data-state": open_state(open),
            onpointerup: move |evt| {
                set_open.call(!open);
                onpointerup.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn AlertDialogPortal(children: Element) -> Element {
    rsx! {
        Portal { {children} }
    }
}

/// Backdrop rendered only while open. Clicking it closes the dialog unless
/// `destroy_dialog` is false.
#[component]
pub fn AlertDialogOverlay(
    #[props(default = true)] destroy_dialog: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_alert_dialog();
    if !(ctx.open)() {
        return rsx! {};
    }

    let set_open = ctx.set_open;
    rsx! {
        div {
            "aria-hidden": "true",
            "data-state": "open",
            onclick: move |_| {
                if destroy_dialog {
                    set_open.call(false);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn AlertDialogContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_alert_dialog();
    use_hide_others(ctx.open, ctx.content_id.clone());
    let set_open = ctx.set_open;
    use_escape_key(
        ctx.open,
        Callback::new(move |_| {
            tracing::debug!("escape pressed, closing alert dialog");
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
                role: "alertdialog",
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
pub fn AlertDialogTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_alert_dialog();

    rsx! {
        h1 { id: "{ctx.title_id}", ..attributes, {children} }
    }
}

#[component]
pub fn AlertDialogDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_alert_dialog();

    rsx! {
        div { id: "{ctx.description_id}", ..attributes, {children} }
    }
}

#[component]
pub fn AlertDialogCloseButton(
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let set_open = use_alert_dialog().set_open;

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                set_open.call(false);
                onclick.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}
