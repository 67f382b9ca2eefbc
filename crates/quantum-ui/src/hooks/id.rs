use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A DOM id that stays the same for the lifetime of the calling component.
pub fn use_unique_id(prefix: &'static str) -> String {
    use_hook(move || format!("quantum-{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)))
}
