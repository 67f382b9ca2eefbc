//! Attribute values shared by every family.

pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn open_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

pub(crate) fn checked_state(checked: bool) -> &'static str {
    if checked {
        "checked"
    } else {
        "unchecked"
    }
}

/// Keeps native form controls out of sight and out of the pointer's way while
/// still submitting with the form.
pub(crate) const NATIVE_CONTROL_STYLE: &str = "transform: translateX(-100%); position: absolute; pointer-events: none; opacity: 0; margin: 0; width: 25px; height: 25px;";

/// Style for content that is closed but stays mounted.
pub(crate) fn hidden_style(present: bool) -> &'static str {
    if present {
        ""
    } else {
        "display: none;"
    }
}
