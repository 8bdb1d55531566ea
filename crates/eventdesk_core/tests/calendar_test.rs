use chrono::NaiveDate;
use eventdesk_core::calendar::{format_long_date, month_grid, MonthCursor};
use pretty_assertions::assert_eq;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn june_2025_starts_on_sunday() {
    let grid = month_grid(MonthCursor { year: 2025, month: 6 });
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0][0], Some(day(2025, 6, 1)));
    assert_eq!(grid[4][1], Some(day(2025, 6, 30)));
    assert_eq!(grid[4][2], None);
}

#[test]
fn july_2025_has_leading_blanks() {
    let grid = month_grid(MonthCursor { year: 2025, month: 7 });
    // July 1st 2025 is a Tuesday.
    assert_eq!(grid[0][0], None);
    assert_eq!(grid[0][1], None);
    assert_eq!(grid[0][2], Some(day(2025, 7, 1)));
    let days: usize = grid.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(days, 31);
}

#[test]
fn leap_february() {
    let cursor = MonthCursor { year: 2024, month: 2 };
    assert_eq!(cursor.days_in_month(), 29);
    assert_eq!(MonthCursor { year: 2025, month: 2 }.days_in_month(), 28);
}

#[test]
fn cursor_wraps_years() {
    let dec = MonthCursor { year: 2025, month: 12 };
    assert_eq!(dec.next(), MonthCursor { year: 2026, month: 1 });
    assert_eq!(dec.next().prev(), dec);
    assert_eq!(MonthCursor::containing(day(2025, 7, 12)), MonthCursor { year: 2025, month: 7 });
}

#[test]
fn titles_and_long_dates() {
    assert_eq!(MonthCursor { year: 2025, month: 6 }.title(), "June 2025");
    assert_eq!(format_long_date(day(2025, 6, 5)), "June 5, 2025");
}
