//! Month arithmetic for the calendar page.

use chrono::{Datelike, NaiveDate, Weekday};

pub type Week = [Option<NaiveDate>; 7];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthCursor { year: self.year + 1, month: 1 }
        } else {
            MonthCursor { month: self.month + 1, ..self }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthCursor { year: self.year - 1, month: 12 }
        } else {
            MonthCursor { month: self.month - 1, ..self }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        match (self.first_day(), self.next().first_day()) {
            (Some(start), Some(end)) => (end - start).num_days() as u32,
            _ => 0,
        }
    }

    /// "June 2025"
    pub fn title(self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }
}

/// Sunday-first weeks covering the month. Cells outside the month are `None`.
pub fn month_grid(cursor: MonthCursor) -> Vec<Week> {
    let Some(first) = cursor.first_day() else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    let days = cursor.days_in_month() as usize;

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut col = lead;
    for offset in 0..days {
        week[col] = first.checked_add_days(chrono::Days::new(offset as u64));
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

pub const WEEKDAY_HEADERS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// "June 15, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
