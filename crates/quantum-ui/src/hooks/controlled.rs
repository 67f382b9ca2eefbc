use dioxus::prelude::*;

/// A value owned either by the caller (`prop` is `Some`) or by the component.
///
/// The returned setter always reports through `on_change`. It only writes the
/// internal state while the caller is not controlling the value, so a
/// controlled component keeps showing the caller's value until the caller
/// updates it.
pub fn use_controlled<T>(prop: ReadSignal<Option<T>>, default: T, on_change: Callback<T>) -> (Memo<T>, Callback<T>)
where
    T: Clone + PartialEq + 'static,
{
    let mut internal = use_signal(|| default);
    let value = use_memo(move || prop().unwrap_or_else(|| internal()));
    let set_value = use_callback(move |next: T| {
        if prop.peek().is_none() {
            internal.set(next.clone());
        }
        on_change.call(next);
    });
    (value, set_value)
}

/// Like [`use_controlled`] for values that may be absent, such as a selection
/// before anything is picked. A `Some` prop controls the value.
pub fn use_controlled_option<T>(
    prop: ReadSignal<Option<T>>,
    default: Option<T>,
    on_change: Callback<T>,
) -> (Memo<Option<T>>, Callback<T>)
where
    T: Clone + PartialEq + 'static,
{
    let mut internal = use_signal(|| default);
    let value = use_memo(move || prop().or_else(|| internal()));
    let set_value = use_callback(move |next: T| {
        if prop.peek().is_none() {
            internal.set(Some(next.clone()));
        }
        on_change.call(next);
    });
    (value, set_value)
}
