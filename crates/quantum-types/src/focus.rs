use serde::Deserialize;

/// What the focus trap learns about each element of its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TabbableNode {
    pub tab_index: i32,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub focused: bool,
}

impl TabbableNode {
    pub fn is_tabbable(&self) -> bool {
        !self.disabled && !self.hidden && self.tab_index >= 0
    }
}

/// Indices (into the walked element list) of the tabbable nodes, in order.
pub fn tabbable_indices(nodes: &[TabbableNode]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_tabbable())
        .map(|(index, _)| index)
        .collect()
}

/// Position, within `len` tabbable nodes, that Tab (or Shift+Tab when
/// `backwards`) should move to from `current`.
///
/// Focus wraps around both ends. When focus is outside the trap it lands on the
/// first node, or the last one when moving backwards.
pub fn next_focus(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(index), false) if index + 1 >= len => 0,
        (Some(index), false) => index + 1,
        (Some(0), true) => len - 1,
        (Some(index), true) => (index - 1).min(len - 1),
    };
    Some(next)
}

/// Resolve a Tab press over a walked subtree to the element index to focus.
pub fn resolve_tab(nodes: &[TabbableNode], backwards: bool) -> Option<usize> {
    let tabbable = tabbable_indices(nodes);
    let current = tabbable.iter().position(|&index| nodes[index].focused);
    next_focus(current, tabbable.len(), backwards).map(|position| tabbable[position])
}

/// Arrow-key movement over a group of items, skipping disabled ones and
/// wrapping at both ends. `enabled[i]` is false for disabled items.
pub fn next_enabled(enabled: &[bool], current: Option<usize>, forward: bool) -> Option<usize> {
    let len = enabled.len();
    if len == 0 {
        return None;
    }
    let start = match (current, forward) {
        (Some(index), _) => index,
        (None, true) => len - 1,
        (None, false) => 0,
    };
    (1..=len)
        .map(|step| {
            if forward {
                (start + step) % len
            } else {
                (start + len * step - step) % len
            }
        })
        .find(|&index| enabled[index])
}
