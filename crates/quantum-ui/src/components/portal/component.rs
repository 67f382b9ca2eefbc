use dioxus::prelude::*;

use crate::hooks::{dom, use_unique_id};

#[derive(Clone, PartialEq)]
struct PortalHostContext {
    host_id: String,
}

/// Outlet for every `Portal` below it.
///
/// Place it once near the application root. Portaled content is moved to the
/// end of the host element, in mount order.
#[component]
pub fn PortalHost(children: Element) -> Element {
    let host_id = use_unique_id("portal-host");
    use_context_provider(|| PortalHostContext {
        host_id: host_id.clone(),
    });

    rsx! {
        {children}
        div { id: "{host_id}", "data-quantum-portal-host": "" }
    }
}

/// Render `children` in the nearest `PortalHost`, or in place when there is none.
///
/// The children stay where they were declared in the component tree, so they
/// keep every context of their family; only their DOM node moves.
#[component]
pub fn Portal(children: Element) -> Element {
    let host = try_use_context::<PortalHostContext>();
    let id = use_unique_id("portal");

    let node_id = id.clone();
    use_effect(move || {
        if let Some(host) = &host {
            dom::move_into(&node_id, &host.host_id);
        }
    });

    rsx! {
        div {
            id: "{id}",
            "data-quantum-portal": "",
            style: "display: contents;",
            {children}
        }
    }
}
