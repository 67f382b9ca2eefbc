use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use super::dom;

/// Follow `source`, but only after it has been stable for `delay`.
///
/// Every change cancels the pending update, so only the last value of a burst
/// comes through.
pub fn use_debounce<T>(source: Signal<T>, delay: Duration) -> Signal<T>
where
    T: Clone + PartialEq + 'static,
{
    let mut debounced = use_signal(|| source.peek().clone());
    let mut pending = use_signal(|| None::<Task>);

    use_effect(move || {
        let next = source();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            dom::sleep(delay).await;
            if *debounced.peek() != next {
                debounced.set(next);
            }
            pending.set(None);
        });
        pending.set(Some(task));
    });

    debounced
}
