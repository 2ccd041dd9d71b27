use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Advances `start` by `months` and applies the day-before-anniversary
/// convention: day 1 stays day 1, any other day moves back by one, and days
/// past the end of the target month clamp to its last day. Total over all
/// valid dates and months >= 0.
pub fn target_date(start: NaiveDate, months: u32) -> NaiveDate {
    let month_index = start.month() + months;
    let new_year = start.year() + (month_index as i32 - 1) / 12;
    let new_month = (month_index - 1) % 12 + 1;
    let last_day = last_day_of_month(new_year, new_month);

    let day = if start.day() > last_day {
        last_day
    } else if start.day() == 1 {
        1
    } else {
        start.day() - 1
    };

    NaiveDate::from_ymd_opt(new_year, new_month, day)
        .expect("clamped day always falls inside the target month")
}

/// Stamp rendering used everywhere a date is shown or compared: `YYYY.MM.DD`,
/// zero-padded.
pub fn format_stamp(date: NaiveDate) -> String {
    date.format("%Y.%m.%d").to_string()
}
