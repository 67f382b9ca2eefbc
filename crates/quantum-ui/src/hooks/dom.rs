//! Browser glue over `document::eval`.
//!
//! Everything that needs the live DOM (computed styles, rectangles, focus,
//! document-level listeners) goes through these helpers. Scripts address
//! elements by the ids the components generate, and long-lived listeners are
//! stored under a token in `window.__quantumListeners` so they can be released
//! from Rust.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use quantum_types::focus::{resolve_tab, TabbableNode};
use quantum_types::placement::Rect;
use quantum_types::presence::has_exit_animation;
use quantum_types::{QuantumError, ValidityFlags};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const LISTENERS: &str = "window.__quantumListeners = window.__quantumListeners || {};";

fn js_str(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Run `script` and decode what it returns.
async fn query<T: DeserializeOwned>(script: &str) -> Result<T, QuantumError> {
    let value = document::eval(script)
        .await
        .map_err(|err| QuantumError::Document(err.to_string()))?;
    Ok(serde_json::from_value(value)?)
}

/// Run the release function stored under `token`, if any. Fire-and-forget.
pub fn release(token: &str) {
    let token = js_str(token);
    let _ = document::eval(&format!(
        r#"
        {LISTENERS}
        const release = window.__quantumListeners[{token}];
        if (release) {{
            release();
            delete window.__quantumListeners[{token}];
        }}
        "#
    ));
}

/// One document-level listener, addressed by its token.
///
/// Claiming the slot releases whatever was registered under the token before,
/// so a listener is never installed twice.
#[derive(Debug, Clone)]
pub struct ListenerSlot {
    token: String,
    registered: Rc<Cell<bool>>,
}

impl ListenerSlot {
    pub fn new(token: String) -> Self {
        Self {
            token,
            registered: Rc::new(Cell::new(false)),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }

    /// Release the previous listener, if any, before the caller installs a new one.
    pub fn claim(&self) {
        if self.registered.replace(true) {
            release(&self.token);
        }
    }

    pub fn release(&self) {
        if self.registered.replace(false) {
            release(&self.token);
        }
    }
}

/// Listen for `mousedown` anywhere outside the elements with `ids`.
///
/// Every outside press sends `true` through the returned eval channel.
pub fn outside_press(token: &str, ids: &[String]) -> document::Eval {
    let token = js_str(token);
    let ids = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    document::eval(&format!(
        r#"
        {LISTENERS}
        const ids = {ids};
        const listener = (event) => {{
            const inside = ids.some((id) => {{
                const node = document.getElementById(id);
                return node !== null && node.contains(event.target);
            }});
            if (!inside) {{
                dioxus.send(true);
            }}
        }};
        document.addEventListener("mousedown", listener);
        window.__quantumListeners[{token}] = () => document.removeEventListener("mousedown", listener);
        "#
    ))
}

/// Listen for Escape anywhere in the document.
///
/// Every press sends `true` through the returned eval channel.
pub fn escape_press(token: &str) -> document::Eval {
    let token = js_str(token);
    document::eval(&format!(
        r#"
        {LISTENERS}
        const listener = (event) => {{
            if (event.key === "Escape") {{
                dioxus.send(true);
            }}
        }};
        document.addEventListener("keydown", listener);
        window.__quantumListeners[{token}] = () => document.removeEventListener("keydown", listener);
        "#
    ))
}

/// Move the element `id` to the end of the element `host_id`.
///
/// The node keeps its place in the component tree; only its DOM parent changes.
pub fn move_into(id: &str, host_id: &str) {
    let _ = document::eval(&format!(
        r#"
        const node = document.getElementById({});
        const host = document.getElementById({});
        if (node && host && node.parentElement !== host) host.appendChild(node);
        "#,
        js_str(id),
        js_str(host_id)
    ));
}

/// Hide every element outside `id` from assistive technology until released.
pub fn hide_others(token: &str, id: &str) {
    let token = js_str(token);
    let id = js_str(id);
    let _ = document::eval(&format!(
        r#"
        {LISTENERS}
        const target = document.getElementById({id});
        if (target) {{
            const touched = [];
            let node = target;
            while (node && node !== document.body && node.parentElement) {{
                const parent = node.parentElement;
                for (const sibling of parent.children) {{
                    if (sibling === node || sibling.contains(target)) continue;
                    if (sibling.tagName === "SCRIPT" || sibling.getAttribute("aria-live")) continue;
                    if (sibling.getAttribute("aria-hidden") === "true") continue;
                    sibling.setAttribute("aria-hidden", "true");
                    touched.push(sibling);
                }}
                node = parent;
            }}
            window.__quantumListeners[{token}] = () => touched.forEach((el) => el.removeAttribute("aria-hidden"));
        }}
        "#
    ));
}

/// Notify through the returned channel whenever layout around the popper
/// may have moved: scroll, resize, or either element changing size.
pub fn layout_changes(token: &str, anchor_id: &str, floating_id: &str) -> document::Eval {
    let token = js_str(token);
    let anchor_id = js_str(anchor_id);
    let floating_id = js_str(floating_id);
    document::eval(&format!(
        r#"
        {LISTENERS}
        const notify = () => dioxus.send(true);
        window.addEventListener("scroll", notify, true);
        window.addEventListener("resize", notify);
        const observer = typeof ResizeObserver === "undefined" ? null : new ResizeObserver(notify);
        for (const id of [{anchor_id}, {floating_id}]) {{
            const node = document.getElementById(id);
            if (node && observer) observer.observe(node);
        }}
        window.__quantumListeners[{token}] = () => {{
            window.removeEventListener("scroll", notify, true);
            window.removeEventListener("resize", notify);
            if (observer) observer.disconnect();
        }};
        "#
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PopperMeasurements {
    pub anchor: Rect,
    pub floating: Rect,
    pub viewport: Rect,
    #[serde(default)]
    pub arrow: Option<Rect>,
}

/// Client rectangles of the anchor, floating element, optional arrow and the viewport.
pub async fn measure_popper(anchor_id: &str, floating_id: &str, arrow_id: &str) -> Option<PopperMeasurements> {
    let script = format!(
        r#"
        const rect = (node) => {{
            const r = node.getBoundingClientRect();
            return {{ x: r.x, y: r.y, width: r.width, height: r.height }};
        }};
        const anchor = document.getElementById({});
        const floating = document.getElementById({});
        const arrow = document.getElementById({});
        if (!anchor || !floating) return null;
        return {{
            anchor: rect(anchor),
            floating: rect(floating),
            arrow: arrow ? rect(arrow) : null,
            viewport: {{ x: 0, y: 0, width: window.innerWidth, height: window.innerHeight }},
        }};
        "#,
        js_str(anchor_id),
        js_str(floating_id),
        js_str(arrow_id),
    );
    match query::<Option<PopperMeasurements>>(&script).await {
        Ok(measurements) => measurements,
        Err(err) => {
            tracing::warn!(error = %err, anchor = anchor_id, "popper measurement failed");
            None
        }
    }
}

/// Height of the element with `id`, in pixels.
pub async fn element_height(id: &str) -> Option<f64> {
    let script = format!(
        r#"
        const node = document.getElementById({});
        return node ? node.getBoundingClientRect().height : null;
        "#,
        js_str(id)
    );
    query::<Option<f64>>(&script).await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, id, "height measurement failed");
        None
    })
}

#[derive(Debug, Deserialize)]
struct ComputedMotion {
    #[serde(default)]
    animation_name: String,
    #[serde(default)]
    transition_duration: String,
}

/// Whether the element with `id` is about to play an exit animation.
pub async fn exit_animation(id: &str) -> bool {
    let script = format!(
        r#"
        const node = document.getElementById({});
        if (!node) return {{ animation_name: "none", transition_duration: "0s" }};
        const style = window.getComputedStyle(node);
        return {{ animation_name: style.animationName, transition_duration: style.transitionDuration }};
        "#,
        js_str(id)
    );
    match query::<ComputedMotion>(&script).await {
        Ok(motion) => has_exit_animation(&motion.animation_name, &motion.transition_duration),
        Err(err) => {
            tracing::debug!(error = %err, id, "no computed style, closing without animation");
            false
        }
    }
}

fn walk_script(container_id: &str) -> String {
    format!(
        r#"
        const container = document.getElementById({});
        const nodes = container ? Array.from(container.querySelectorAll("*")) : [];
        "#,
        js_str(container_id)
    )
}

/// Move focus to the first tabbable element inside `container_id`.
pub async fn focus_first_tabbable(container_id: &str) {
    let script = format!(
        r#"
        {}
        const first = nodes.find((node) => !node.disabled && !node.hidden && node.tabIndex >= 0);
        if (first) first.focus();
        "#,
        walk_script(container_id)
    );
    if let Err(err) = query::<serde_json::Value>(&script).await {
        tracing::warn!(error = %err, container = container_id, "initial focus failed");
    }
}

/// Handle Tab / Shift+Tab inside a focus trap.
pub async fn cycle_focus(container_id: &str, backwards: bool) {
    let walk = format!(
        r#"
        {}
        return nodes.map((node) => ({{
            tab_index: node.tabIndex,
            disabled: !!node.disabled,
            hidden: !!node.hidden,
            focused: node === document.activeElement,
        }}));
        "#,
        walk_script(container_id)
    );
    let nodes = match query::<Vec<TabbableNode>>(&walk).await {
        Ok(nodes) => nodes,
        Err(err) => {
            tracing::warn!(error = %err, container = container_id, "could not walk focus trap");
            return;
        }
    };
    let Some(target) = resolve_tab(&nodes, backwards) else {
        return;
    };
    let focus = format!(
        r#"
        {}
        const target = nodes[{target}];
        if (target) target.focus();
        "#,
        walk_script(container_id)
    );
    let _ = document::eval(&focus);
}

pub fn focus_element(id: &str) {
    let _ = document::eval(&format!(
        "const node = document.getElementById({}); if (node) node.focus();",
        js_str(id)
    ));
}

/// The input's current `ValidityState`.
pub async fn read_validity(id: &str) -> Option<ValidityFlags> {
    let script = format!(
        r#"
        const node = document.getElementById({});
        if (!node || !node.validity) return null;
        const flags = {{}};
        for (const key in node.validity) flags[key] = node.validity[key];
        return flags;
        "#,
        js_str(id)
    );
    match query::<Option<ValidityFlags>>(&script).await {
        Ok(flags) => flags,
        Err(err) => {
            tracing::warn!(error = %err, id, "could not read validity");
            None
        }
    }
}

pub fn set_custom_validity(id: &str, message: &str) {
    let _ = document::eval(&format!(
        "const node = document.getElementById({}); if (node && node.setCustomValidity) node.setCustomValidity({});",
        js_str(id),
        js_str(message)
    ));
}

/// Focus the first input inside `form_id` that failed constraint validation
/// and scroll its field into view.
pub fn focus_first_invalid(form_id: &str) {
    let _ = document::eval(&format!(
        r#"
        const form = document.getElementById({});
        const input = form ? form.querySelector("input:invalid") : null;
        if (input) {{
            input.focus();
            (input.closest('[data-invalid]') || input).scrollIntoView({{ block: "nearest" }});
        }}
        "#,
        js_str(form_id)
    ));
}

/// Wait for `delay` using the renderer's timer.
pub async fn sleep(delay: Duration) {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
        delay.as_millis()
    );
    if let Err(err) = query::<serde_json::Value>(&script).await {
        tracing::debug!(error = %err, "timer unavailable, continuing immediately");
    }
}
