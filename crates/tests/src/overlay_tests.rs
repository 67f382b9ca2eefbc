use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use quantum_ui::*;

use crate::common::{render, Harness, ScriptedDocument};

#[test]
fn portal_without_host_renders_in_place() {
    fn app() -> Element {
        rsx! {
            div { id: "outer",
                Portal { span { "inside" } }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<span>inside</span>"));
    assert!(!html.contains("data-quantum-portal-host"));
}

#[test]
fn portal_host_renders_its_outlet_after_children() {
    fn app() -> Element {
        rsx! {
            PortalHost {
                main { "page" }
            }
        }
    }

    let html = render(app);
    let page = html.find("page").unwrap_or(usize::MAX);
    let outlet = html.find("data-quantum-portal-host").unwrap_or(0);
    assert!(page < outlet);
}

#[tokio::test]
async fn portaled_dialog_keeps_its_context_and_moves_into_the_host() {
    fn app() -> Element {
        rsx! {
            PortalHost {
                DialogRoot { default_open: true,
                    DialogTrigger { "Open" }
                    DialogPortal {
                        DialogContent {
                            DialogTitle { "Portaled title" }
                        }
                    }
                }
            }
        }
    }

    let harness = Harness::mount(app, ScriptedDocument::new()).await;
    let html = harness.html();
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains("Portaled title"));
    assert!(html.contains("data-quantum-portal-host"));
    assert_eq!(harness.document.ran("host.appendChild(node)"), 1);
    assert_eq!(harness.document.ran(r#"getElementById("quantum-portal-host-"#), 1);
}

#[tokio::test]
async fn select_content_mounts_under_a_portal_host() {
    fn app() -> Element {
        rsx! {
            PortalHost {
                SelectRoot { default_open: true,
                    SelectTrigger { SelectValue { placeholder: "Court" } }
                    SelectContent {
                        SelectItem { value: "d9", SelectItemText { text: "District 9" } }
                    }
                }
            }
        }
    }

    let html = Harness::mount(app, ScriptedDocument::new()).await.html();
    assert!(html.contains(r#"role="listbox""#));
    assert!(html.contains(r#"role="option""#));
    assert!(html.contains("District 9"));
}

#[tokio::test]
async fn portal_without_host_never_moves_its_node() {
    fn app() -> Element {
        rsx! {
            Portal { span { "inside" } }
        }
    }

    let harness = Harness::mount(app, ScriptedDocument::new()).await;
    assert!(harness.html().contains("<span>inside</span>"));
    assert_eq!(harness.document.ran("appendChild"), 0);
}

#[test]
fn focus_trap_marks_its_container() {
    fn app() -> Element {
        rsx! {
            FocusTrap { class: "trap",
                button { "first" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("data-quantum-focus-trap"));
    assert!(html.contains(r#"id="quantum-focus-trap-"#));
    assert!(html.contains("trap"));
}

#[test]
fn popper_content_is_fixed_before_it_is_measured() {
    fn app() -> Element {
        rsx! {
            PopperRoot {
                PopperAnchor { "anchor" }
                PopperContent {
                    "floating"
                    PopperArrow {}
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("position: fixed;"));
    assert!(html.contains("min-width: max-content;"));
    assert!(html.contains(r#"data-side="bottom""#));
    assert!(html.contains(r#"id="quantum-popper-anchor-"#));
}

#[test]
fn popper_placement_prop_sets_the_initial_side() {
    fn app() -> Element {
        let placement: Placement = "top-end".parse().unwrap_or_default();
        rsx! {
            PopperRoot {
                PopperAnchor { "anchor" }
                PopperContent { placement, "floating" }
            }
        }
    }

    assert!(render(app).contains(r#"data-side="top""#));
}
