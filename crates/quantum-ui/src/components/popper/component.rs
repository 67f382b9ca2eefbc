use dioxus::prelude::*;
use dioxus_primitives::merge_attributes;
use quantum_types::placement::{arrow_style, compute_position, Position, PositionOptions};
use quantum_types::{Placement, Side};

use crate::config::use_quantum_config;
use crate::hooks::dom::{self, ListenerSlot};
use crate::hooks::use_unique_id;

#[derive(Clone, PartialEq)]
pub struct PopperContext {
    /// DOM id of the element the content is positioned against.
    pub anchor_id: String,
}

pub fn use_popper() -> PopperContext {
    use_context::<PopperContext>()
}

/// Shares one anchor between `PopperAnchor` (or a family trigger using
/// `anchor_id`) and `PopperContent`.
#[component]
pub fn PopperRoot(#[props(default)] anchor_id: Option<String>, children: Element) -> Element {
    let generated = use_unique_id("popper-anchor");
    use_context_provider(|| PopperContext {
        anchor_id: anchor_id.unwrap_or(generated),
    });

    rsx! {
        {children}
    }
}

#[component]
pub fn PopperAnchor(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let popper = use_popper();

    rsx! {
        div {
            id: "{popper.anchor_id}",
            ..attributes,
            {children}
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct PopperContentContext {
    pub arrow_id: String,
    pub position: Signal<Option<Position>>,
}

pub fn use_popper_content() -> PopperContentContext {
    use_context::<PopperContentContext>()
}

async fn reposition(
    anchor_id: &str,
    floating_id: &str,
    arrow_id: &str,
    options: PositionOptions,
    has_arrow: bool,
) -> Option<Position> {
    let measured = dom::measure_popper(anchor_id, floating_id, arrow_id).await?;
    let options = PositionOptions {
        arrow: if has_arrow {
            measured.arrow.map(|arrow| arrow.cross_size(options.placement.side))
        } else {
            None
        },
        ..options
    };
    Some(compute_position(
        measured.anchor,
        measured.floating,
        measured.viewport,
        options,
    ))
}

fn floating_style(position: Option<Position>) -> String {
    match position {
        Some(position) => format!(
            "position: fixed; left: {}px; top: {}px; min-width: max-content;{}",
            position.x,
            position.y,
            if position.reference_hidden {
                " opacity: 0;"
            } else {
                ""
            }
        ),
        None => "position: fixed; min-width: max-content;".to_string(),
    }
}

/// Floating content positioned next to the popper anchor.
///
/// Unset options fall back to the `popper` section of the configuration.
/// Position is recomputed on scroll, resize, and whenever the anchor or the
/// content changes size.
#[component]
pub fn PopperContent(
    #[props(default)] placement: Option<Placement>,
    #[props(default)] offset: Option<f64>,
    #[props(default)] detect_padding: Option<f64>,
    #[props(default)] hide_when_anchor_disappear: Option<bool>,
    #[props(default)] has_arrow: Option<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let popper = use_popper();
    let defaults = use_quantum_config().popper;
    let options = PositionOptions {
        placement: placement.unwrap_or(defaults.placement),
        offset: offset.unwrap_or(defaults.offset),
        detect_padding: detect_padding.unwrap_or(defaults.detect_padding),
        arrow: None,
        hide_when_detached: hide_when_anchor_disappear.unwrap_or(defaults.hide_when_anchor_disappear),
    };
    let has_arrow = has_arrow.unwrap_or(defaults.has_arrow);

    let floating_id = use_unique_id("popper-content");
    let arrow_id = use_unique_id("popper-arrow");
    let token = use_unique_id("popper-layout");
    let layout = use_hook(|| ListenerSlot::new(token));

    let mut position = use_signal(|| None::<Position>);
    let mut settings = use_signal(|| (options, has_arrow));
    use_context_provider(|| PopperContentContext {
        arrow_id: arrow_id.clone(),
        position,
    });

    let ids = (popper.anchor_id.clone(), floating_id.clone(), arrow_id.clone());
    let effect_ids = ids.clone();
    use_effect(use_reactive((&options, &has_arrow), move |(options, has_arrow)| {
        settings.set((options, has_arrow));
        let (anchor_id, floating_id, arrow_id) = effect_ids.clone();
        spawn(async move {
            if let Some(next) = reposition(&anchor_id, &floating_id, &arrow_id, options, has_arrow).await {
                position.set(Some(next));
            }
        });
    }));

    let release_layout = layout.clone();
    use_drop(move || release_layout.release());

    let current = position();
    let base = vec![Attribute::new("style", floating_style(current), None, false)];
    let merged = merge_attributes(vec![attributes, base]);
    let side = current.map(|position| position.placement.side).unwrap_or(options.placement.side);

    rsx! {
        div {
            id: "{floating_id}",
            "data-side": side.as_str(),
            onmounted: move |_| {
                let (anchor_id, floating_id, arrow_id) = ids.clone();
                let layout = layout.clone();
                async move {
                    layout.claim();
                    let mut changes = dom::layout_changes(layout.token(), &anchor_id, &floating_id);
                    while changes.recv::<bool>().await.is_ok() {
                        let (options, has_arrow) = *settings.peek();
                        if let Some(next) = reposition(&anchor_id, &floating_id, &arrow_id, options, has_arrow).await {
                            if *position.peek() != Some(next) {
                                position.set(Some(next));
                            }
                        }
                    }
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Arrow pointing from the content at its anchor.
#[component]
pub fn PopperArrow(
    #[props(default)] x_offset: f64,
    #[props(default)] y_offset: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let content = use_popper_content();
    let current = *content.position.read();
    let side = current.map(|position| position.placement.side).unwrap_or(Side::Bottom);
    let arrow = current.map(|position| position.arrow).unwrap_or_default();

    let base = vec![Attribute::new(
        "style",
        arrow_style(side, arrow, x_offset, y_offset),
        None,
        false,
    )];
    let merged = merge_attributes(vec![attributes, base]);

    rsx! {
        span {
            id: "{content.arrow_id}",
            "data-side": side.as_str(),
            ..merged,
            {children}
        }
    }
}
