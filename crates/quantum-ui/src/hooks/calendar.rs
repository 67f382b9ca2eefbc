use dioxus::prelude::*;
use quantum_types::calendar::{month_grid, today};
use quantum_types::{CalendarCursor, MonthGrid, WeekStart};
use time::Date;

/// The month a calendar is showing, and its grid of weeks.
#[derive(Clone, Copy, PartialEq)]
pub struct CalendarState {
    pub cursor: Signal<CalendarCursor>,
    pub grid: Memo<MonthGrid>,
}

impl CalendarState {
    pub fn year(&self) -> i32 {
        self.cursor.read().year
    }

    pub fn month(&self) -> u8 {
        self.cursor.read().month
    }

    fn update(&self, step: impl FnOnce(CalendarCursor) -> CalendarCursor) {
        let mut cursor = self.cursor;
        let next = step(*cursor.peek());
        cursor.set(next);
    }

    pub fn go_back_by_month(&self, by: u32) {
        self.update(|cursor| cursor.go_back_by_month(by));
    }

    pub fn go_forward_by_month(&self, by: u32) {
        self.update(|cursor| cursor.go_forward_by_month(by));
    }

    pub fn go_back_by_year(&self, by: i32) {
        self.update(|cursor| cursor.go_back_by_year(by));
    }

    pub fn go_forward_by_year(&self, by: i32) {
        self.update(|cursor| cursor.go_forward_by_year(by));
    }

    pub fn change_year(&self, year: i32) {
        self.update(|cursor| cursor.with_year(year));
    }

    /// Show `month` (1-based) of the current year. Out-of-range months are
    /// logged and ignored.
    pub fn change_month(&self, month: u8) {
        let current = *self.cursor.peek();
        match current.with_month(month) {
            Ok(next) => self.update(|_| next),
            Err(err) => tracing::warn!(error = %err, "ignoring month change"),
        }
    }

    /// Jump to the month containing `date`.
    pub fn show(&self, date: Date) {
        self.update(|_| CalendarCursor::from_date(date));
    }

    pub fn reset_to_today(&self) {
        self.show(today());
    }
}

/// Calendar navigation state, starting at `initial` or today's month.
pub fn use_calendar(initial: Option<Date>, week_start: WeekStart) -> CalendarState {
    let cursor = use_signal(|| CalendarCursor::from_date(initial.unwrap_or_else(today)));
    let grid = use_memo(move || {
        let cursor = cursor();
        month_grid(cursor, week_start).unwrap_or_else(|err| {
            tracing::warn!(error = %err, year = cursor.year, month = cursor.month, "could not build month grid");
            Vec::new()
        })
    });
    CalendarState { cursor, grid }
}
