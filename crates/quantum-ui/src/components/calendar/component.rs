use dioxus::prelude::*;
use quantum_types::calendar::{format_date, today};
use quantum_types::{DayKind, MonthGrid, Placement};
use time::Date;

use crate::components::aria::{flag, open_state};
use crate::components::popper::{PopperArrow, PopperContent, PopperRoot};
use crate::components::portal::Portal;
use crate::config::use_quantum_config;
use crate::hooks::{
    use_calendar, use_content_height, use_controlled, use_controlled_option, use_outside_click,
    use_presence, use_unique_id, CalendarState,
};

#[derive(Clone, Copy, PartialEq)]
pub struct CalendarContext {
    pub open: Memo<bool>,
    pub set_open: Callback<bool>,
    pub value: Memo<Option<Date>>,
    pub set_value: Callback<Date>,
    pub disabled: ReadSignal<bool>,
    /// The month on display and its grid.
    pub calendar: CalendarState,
    trigger_id: Signal<String>,
    content_id: Signal<String>,
}

pub fn use_calendar_context() -> CalendarContext {
    use_context::<CalendarContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct CalendarRootProps {
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,

    #[props(default)]
    pub default_open: bool,

    #[props(default)]
    pub on_open_change: Callback<bool>,

    /// Controlled date. Leave unset to let the calendar manage it.
    #[props(default)]
    pub value: ReadSignal<Option<Date>>,

    #[props(default)]
    pub default_value: Option<Date>,

    #[props(default)]
    pub on_value_change: Callback<Date>,

    #[props(default)]
    pub disabled: ReadSignal<bool>,

    pub children: Element,
}

/// Date picker state. The first month shown is the one holding the value, or
/// the current month when there is none.
#[component]
pub fn CalendarRoot(props: CalendarRootProps) -> Element {
    let config = use_quantum_config();
    let (open, set_open) = use_controlled(props.open, props.default_open, props.on_open_change);
    let (value, set_value) = use_controlled_option(props.value, props.default_value, props.on_value_change);
    let calendar = use_calendar(*value.peek(), config.calendar.week_start);
    let trigger_id = use_unique_id("calendar-trigger");
    let content_id = use_unique_id("calendar-content");

    use_outside_click(
        open,
        vec![trigger_id.clone(), content_id.clone()],
        Callback::new(move |_| set_open.call(false)),
    );

    use_context_provider(|| CalendarContext {
        open,
        set_open,
        value,
        set_value,
        disabled: props.disabled,
        calendar,
        trigger_id: Signal::new(trigger_id.clone()),
        content_id: Signal::new(content_id),
    });

    rsx! {
        PopperRoot { anchor_id: trigger_id,
            {props.children}
        }
    }
}

/// Anchor of the popup. Toggles on pointer-down; while focused, Enter and
/// Space open and Escape closes.
#[component]
pub fn CalendarTrigger(
    #[props(default)] onpointerdown: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_calendar_context();
    let mut focused = use_signal(|| false);
    let open = (ctx.open)();
    let disabled = (ctx.disabled)();

    rsx! {
        button {
            r#type: "button",
            id: "{ctx.trigger_id}",
            "aria-expanded": flag(open),
            "aria-controls": "{ctx.content_id}",
            "aria-disabled": flag(disabled),
            "data-state": open_state(open),
            "data-disabled": disabled.then_some(""),
            onfocus: move |_| focused.set(true),
            onblur: move |_| focused.set(false),
            onpointerdown: move |evt| {
                if !disabled {
                    ctx.set_open.call(!open);
                }
                onpointerdown.call(evt);
            },
            onkeydown: move |evt: KeyboardEvent| {
                if !focused() || disabled {
                    return;
                }
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    ctx.set_open.call(false);
                } else if matches!(evt.code(), Code::Enter | Code::NumpadEnter | Code::Space) {
                    evt.prevent_default();
                    ctx.set_open.call(true);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn CalendarPortal(children: Element) -> Element {
    rsx! {
        Portal { {children} }
    }
}

/// The popup. Unmounted once closed and its exit animation has finished.
///
/// Exposes its measured height as `--popper-content-height`.
#[component]
pub fn CalendarContent(
    #[props(default)] placement: Option<Placement>,
    #[props(default)] offset: Option<f64>,
    #[props(default)] detect_padding: Option<f64>,
    #[props(default)] hide_when_anchor_disappear: Option<bool>,
    #[props(default)] has_arrow: Option<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_calendar_context();
    let content_id = ctx.content_id.read().clone();
    let (present, on_animation_end) = use_presence(ctx.open, content_id.clone());
    let cursor = ctx.calendar.cursor;
    let open_memo = ctx.open;
    let height_key = use_memo(move || (open_memo(), cursor()));
    let height = use_content_height(content_id.clone(), height_key);

    if !present() {
        return rsx! {};
    }

    let open = (ctx.open)();
    let height = height().map(|height| format!("--popper-content-height: {height}px;"));

    rsx! {
        PopperContent {
            placement,
            offset,
            detect_padding,
            hide_when_anchor_disappear,
            has_arrow,
            div {
                id: "{content_id}",
                role: "application",
                "aria-expanded": flag(open),
                "data-state": open_state(open),
                style: height.unwrap_or_default(),
                onanimationend: move |_| on_animation_end.call(()),
                ontransitionend: move |_| on_animation_end.call(()),
                ..attributes,
                {children}
            }
        }
    }
}

/// The selected date, formatted.
///
/// `format` is a `time` format description and defaults to
/// `calendar.value_format` from the configuration. `render` replaces the
/// formatted text.
#[component]
pub fn CalendarValue(
    #[props(default)] placeholder: Option<String>,
    #[props(default)] format: Option<String>,
    #[props(default)] render: Option<Callback<Date, Element>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_calendar_context();
    let config = use_quantum_config();
    let format = format.unwrap_or(config.calendar.value_format);

    let content = match ((ctx.value)(), render) {
        (None, _) => rsx! { {placeholder.unwrap_or_default()} },
        (Some(date), Some(render)) => render.call(date),
        (Some(date), None) => {
            let text = format_date(date, &format).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to ISO date");
                date.to_string()
            });
            rsx! { "{text}" }
        }
    };

    rsx! {
        span { style: "pointer-events: none;", ..attributes, {content} }
    }
}

#[component]
pub fn CalendarYear(
    #[props(default)] suffix: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_calendar_context();
    let year = ctx.calendar.year();

    rsx! {
        span { ..attributes, "{year}{suffix}" }
    }
}

#[component]
pub fn CalendarMonth(
    #[props(default)] suffix: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_calendar_context();
    let month = ctx.calendar.month();

    rsx! {
        span { ..attributes, "{month}{suffix}" }
    }
}

/// Hands the grid of the month on display to `render`.
#[component]
pub fn CalendarDays(render: Callback<MonthGrid, Element>) -> Element {
    let ctx = use_calendar_context();
    let grid = ctx.calendar.grid.read().clone();
    render.call(grid)
}

#[component]
pub fn CalendarWeek(
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            "data-disabled": disabled.then_some(""),
            "aria-disabled": flag(disabled),
            "aria-hidden": flag(disabled),
            ..attributes,
            {children}
        }
    }
}

/// One cell of the grid.
///
/// Pointer-down selects `day`; pointer-up toggles the popup and, for a day
/// outside the month on display, moves the calendar to that day's month.
#[component]
pub fn CalendarDay(
    day: Date,
    #[props(default)] disabled: bool,
    #[props(default)] render: Option<Callback<Date, Element>>,
    #[props(default)] onpointerdown: EventHandler<PointerEvent>,
    #[props(default)] onpointerup: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_calendar_context();
    let selected = (ctx.value)() == Some(day);
    let is_today = day == today();
    let this_month = ctx.calendar.cursor.read().contains(day);
    let open = (ctx.open)();

    let content = match render {
        Some(render) => render.call(day),
        None => {
            let number = day.day();
            rsx! { "{number}" }
        }
    };

    rsx! {
        span {
            "data-selected": flag(selected),
            "data-today": flag(is_today),
            "data-thismonth": flag(this_month),
            "data-state": DayKind::of(day).as_str(),
            "data-disabled": disabled.then_some(""),
            "aria-disabled": flag(disabled),
            "aria-hidden": flag(disabled),
            onpointerdown: move |evt| {
                if !disabled {
                    ctx.set_value.call(day);
                }
                onpointerdown.call(evt);
            },
            onpointerup: move |evt| {
                if !disabled {
                    ctx.set_open.call(!open);
                    if !this_month {
                        ctx.calendar.show(day);
                    }
                }
                onpointerup.call(evt);
            },
            ..attributes,
            {content}
        }
    }
}

/// What a `CalendarButton` does on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    GoBackAMonth,
    GoForwardAMonth,
    GoBackAYear,
    GoForwardAYear,
    /// Show the current month and select today.
    ResetToday,
}

/// Moves the month on display by `by` months or years, or resets to today.
#[component]
pub fn CalendarButton(
    action: CalendarAction,
    #[props(default = 1)] by: u32,
    #[props(default)] onpointerup: EventHandler<PointerEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_calendar_context();
    let calendar = ctx.calendar;
    let years = i32::try_from(by).unwrap_or(i32::MAX);

    rsx! {
        button {
            r#type: "button",
            onpointerup: move |evt| {
                match action {
                    CalendarAction::GoBackAMonth => calendar.go_back_by_month(by),
                    CalendarAction::GoForwardAMonth => calendar.go_forward_by_month(by),
                    CalendarAction::GoBackAYear => calendar.go_back_by_year(years),
                    CalendarAction::GoForwardAYear => calendar.go_forward_by_year(years),
                    CalendarAction::ResetToday => {
                        calendar.reset_to_today();
                        ctx.set_value.call(today());
                    }
                }
                onpointerup.call(evt);
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn CalendarArrow(
    #[props(default)] x_offset: f64,
    #[props(default)] y_offset: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        PopperArrow { x_offset, y_offset, attributes, {children} }
    }
}
