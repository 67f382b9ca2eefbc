use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, OffsetDateTime, Weekday};

use crate::error::QuantumError;

/// Format description used by `CalendarValue` when none is given.
pub const DEFAULT_VALUE_FORMAT: &str = "[year repr:last_two]-[month]-[day]";

/// A month grid: rows of seven consecutive dates.
pub type MonthGrid = Vec<Vec<Date>>;

/// First column of every grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Days between the start of the week and `weekday`.
    pub fn offset(&self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Sunday => weekday.number_days_from_sunday() as i64,
            WeekStart::Monday => weekday.number_days_from_monday() as i64,
        }
    }
}

/// The `(year, month)` pair a calendar is showing. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u8,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u8) -> Result<Self, QuantumError> {
        if !(1..=12).contains(&month) {
            return Err(QuantumError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    pub fn first_day(&self) -> Result<Date, QuantumError> {
        let month = Month::try_from(self.month).map_err(|_| QuantumError::InvalidMonth {
            year: self.year,
            month: self.month,
        })?;
        Date::from_calendar_date(self.year, month, 1).map_err(|_| QuantumError::InvalidMonth {
            year: self.year,
            month: self.month,
        })
    }

    pub fn last_day(&self) -> Result<Date, QuantumError> {
        let next = self.go_forward_by_month(1).first_day()?;
        next.previous_day().ok_or(QuantumError::InvalidMonth {
            year: self.year,
            month: self.month,
        })
    }

    /// Whether `date` falls inside the month the cursor points at.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && u8::from(date.month()) == self.month
    }

    pub fn go_back_by_month(self, by: u32) -> Self {
        self.shift_months(-(by as i64))
    }

    pub fn go_forward_by_month(self, by: u32) -> Self {
        self.shift_months(by as i64)
    }

    pub fn go_back_by_year(self, by: i32) -> Self {
        Self {
            year: self.year.saturating_sub(by),
            month: self.month,
        }
    }

    pub fn go_forward_by_year(self, by: i32) -> Self {
        Self {
            year: self.year.saturating_add(by),
            month: self.month,
        }
    }

    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn with_month(self, month: u8) -> Result<Self, QuantumError> {
        Self::new(self.year, month)
    }

    fn shift_months(self, delta: i64) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + delta;
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u8,
        }
    }
}

/// Build the grid of full display weeks covering the cursor's month.
///
/// The first row starts on the week containing the 1st and the last row ends
/// on the week containing the last day, so leading and trailing days from the
/// neighbouring months fill the gaps.
pub fn month_grid(cursor: CalendarCursor, week_start: WeekStart) -> Result<MonthGrid, QuantumError> {
    let first = cursor.first_day()?;
    let last = cursor.last_day()?;

    let start = first - Duration::days(week_start.offset(first.weekday()));
    let end = last + Duration::days(6 - week_start.offset(last.weekday()));

    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(days.chunks(7).map(<[Date]>::to_vec).collect())
}

/// How a day cell is tagged in `data-state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Sunday,
    Saturday,
    Weekday,
}

impl DayKind {
    pub fn of(date: Date) -> Self {
        match date.weekday() {
            Weekday::Sunday => DayKind::Sunday,
            Weekday::Saturday => DayKind::Saturday,
            _ => DayKind::Weekday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Sunday => "sunday",
            DayKind::Saturday => "saturday",
            DayKind::Weekday => "weekday",
        }
    }
}

/// The current UTC date.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Format `date` with a `time` format description such as `[year]-[month]-[day]`.
pub fn format_date(date: Date, format: &str) -> Result<String, QuantumError> {
    let items = time::format_description::parse(format).map_err(|err| QuantumError::InvalidFormat {
        format: format.to_string(),
        reason: err.to_string(),
    })?;
    Ok(date.format(&items)?)
}
