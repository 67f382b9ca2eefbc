use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use quantum_types::config::CalendarConfig;
use quantum_types::MonthGrid;
use quantum_ui::*;
use time::macros::date;
use time::Date;

use crate::common::{count, render, Harness, ScriptedDocument};

#[test]
fn value_uses_the_default_format() {
    fn app() -> Element {
        rsx! {
            CalendarRoot { default_value: date!(2024 - 03 - 05),
                CalendarTrigger {
                    CalendarValue { placeholder: "Pick a date" }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("24-03-05"));
    assert!(!html.contains("Pick a date"));
}

#[test]
fn value_shows_placeholder_without_a_date() {
    fn app() -> Element {
        rsx! {
            CalendarRoot {
                CalendarTrigger {
                    CalendarValue { placeholder: "Pick a date" }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Pick a date"));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn explicit_format_and_render_callback() {
    fn app() -> Element {
        rsx! {
            CalendarRoot { value: Some(date!(2024 - 12 - 31)),
                CalendarValue { format: "[day]/[month]/[year]" }
                CalendarValue {
                    render: move |day: Date| {
                        let weekday = day.weekday();
                        rsx! { "weekday:{weekday}" }
                    },
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("31/12/2024"));
    assert!(html.contains("weekday:Tuesday"));
}

#[test]
fn configured_format_applies_to_every_value() {
    fn app() -> Element {
        let config = QuantumConfig {
            calendar: CalendarConfig {
                value_format: "[year].[month].[day]".to_string(),
                ..CalendarConfig::default()
            },
            ..QuantumConfig::default()
        };
        rsx! {
            ConfigProvider { config,
                CalendarRoot { default_value: date!(2023 - 01 - 09),
                    CalendarValue {}
                }
            }
        }
    }

    assert!(render(app).contains("2023.01.09"));
}

#[test]
fn year_and_month_follow_the_value() {
    fn app() -> Element {
        rsx! {
            CalendarRoot { default_value: date!(2024 - 02 - 10),
                CalendarYear { suffix: "년" }
                CalendarMonth { suffix: "월" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("2024년"));
    assert!(html.contains("2월"));
}

#[test]
fn closed_content_is_not_rendered() {
    fn app() -> Element {
        rsx! {
            CalendarRoot {
                CalendarTrigger { "Open" }
                CalendarContent { "Grid" }
            }
        }
    }

    assert!(!render(app).contains("Grid"));
}

#[test]
fn open_content_renders_the_month_grid() {
    fn app() -> Element {
        rsx! {
            CalendarRoot { default_open: true, default_value: date!(2024 - 02 - 14),
                CalendarTrigger { "Open" }
                CalendarContent {
                    CalendarButton { action: CalendarAction::GoBackAMonth, "Prev" }
                    CalendarDays {
                        render: move |grid: MonthGrid| rsx! {
                            for (index, week) in grid.into_iter().enumerate() {
                                CalendarWeek { key: "{index}",
                                    for day in week {
                                        CalendarDay { key: "{day}", day }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="application""#));
    assert!(html.contains(r#"data-state="open""#));
    // February 2024 starts on a Thursday and spans five Sunday-first weeks.
    assert_eq!(count(&html, "data-thismonth=\"true\""), 29);
    assert_eq!(count(&html, "data-thismonth=\"false\""), 6);
    assert_eq!(count(&html, r#"data-selected="true""#), 1);
    assert_eq!(count(&html, r#"data-state="sunday""#), 5);
    assert_eq!(count(&html, r#"data-state="saturday""#), 5);
    assert!(html.contains("Prev"));
}

#[test]
fn monday_weeks_shift_the_grid() {
    fn app() -> Element {
        let config = QuantumConfig {
            calendar: CalendarConfig {
                week_start: WeekStart::Monday,
                ..CalendarConfig::default()
            },
            ..QuantumConfig::default()
        };
        rsx! {
            ConfigProvider { config,
                CalendarRoot { default_value: date!(2024 - 09 - 01),
                    CalendarDays {
                        render: move |grid: MonthGrid| {
                            let first = grid
                                .first()
                                .and_then(|week| week.first())
                                .map(|day| day.to_string())
                                .unwrap_or_default();
                            rsx! { "first:{first}" }
                        },
                    }
                }
            }
        }
    }

    assert!(render(app).contains("first:2024-08-26"));
}

#[component]
fn JumpToAugust2021() -> Element {
    let ctx = use_calendar_context();
    use_effect(move || {
        ctx.calendar.change_year(2021);
        ctx.calendar.change_month(8);
        ctx.calendar.change_month(13);
    });
    rsx! {}
}

#[tokio::test]
async fn year_and_month_can_be_changed_directly() {
    fn app() -> Element {
        rsx! {
            CalendarRoot { default_value: date!(2024 - 02 - 10),
                CalendarYear { suffix: "년" }
                CalendarMonth { suffix: "월" }
                JumpToAugust2021 {}
            }
        }
    }

    let html = Harness::mount(app, ScriptedDocument::new()).await.html();
    assert!(html.contains("2021년"));
    assert!(html.contains("8월"));
    assert!(!html.contains("13월"));
}
