//! Holiday detection.
//!
//! Holidays are matched against the local calendar date in priority order;
//! the first rule that matches wins.

use time::{Date, Month, Weekday};

/// Easter greetings apply this many days either side of Easter Sunday.
pub const EASTER_RADIUS_DAYS: i64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Holiday {
    Christmas,
    NewYear,
    Valentines,
    Easter,
    MothersDay,
    FathersDay,
    Halloween,
}

impl Holiday {
    pub fn phrase(self) -> &'static str {
        match self {
            Holiday::Christmas => "Merry Christmas",
            Holiday::NewYear => "Happy New Year",
            Holiday::Valentines => "Happy Valentine's Day",
            Holiday::Easter => "Happy Easter",
            Holiday::MothersDay => "Happy Mother's Day",
            Holiday::FathersDay => "Happy Father's Day",
            Holiday::Halloween => "Happy Halloween",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Holiday::Christmas => "🎄",
            Holiday::NewYear => "🎊",
            Holiday::Valentines => "💝",
            Holiday::Easter => "🐰",
            Holiday::MothersDay => "🌸",
            Holiday::FathersDay => "👔",
            Holiday::Halloween => "🎃",
        }
    }
}

type HolidayRule = fn(Date) -> bool;

const HOLIDAY_RULES: [(Holiday, HolidayRule); 7] = [
    (Holiday::Christmas, is_christmas_season),
    (Holiday::NewYear, is_new_year_season),
    (Holiday::Valentines, is_valentines_day),
    (Holiday::Easter, is_easter_season),
    (Holiday::MothersDay, is_mothers_day),
    (Holiday::FathersDay, is_fathers_day),
    (Holiday::Halloween, is_halloween),
];

/// Returns the holiday greeting that applies on `date`, if any.
pub fn holiday_on(date: Date) -> Option<Holiday> {
    HOLIDAY_RULES
        .iter()
        .find(|(_, rule)| rule(date))
        .map(|(holiday, _)| *holiday)
}

/// Easter Sunday for a Gregorian year as `(month, day)`.
///
/// Anonymous Gregorian computus (Meeus/Jones/Butcher). The result always lies
/// between March 22 and April 25.
pub fn easter(year: i32) -> (Month, u8) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;

    let month = if n / 31 == 3 {
        Month::March
    } else {
        Month::April
    };
    (month, (n % 31 + 1) as u8)
}

/// Easter Sunday as a [`Date`], or `None` when the year is outside the range
/// `time` can represent.
pub fn easter_sunday(year: i32) -> Option<Date> {
    let (month, day) = easter(year);
    Date::from_calendar_date(year, month, day).ok()
}

fn is_christmas_season(date: Date) -> bool {
    date.month() == Month::December && (20..=26).contains(&date.day())
}

fn is_new_year_season(date: Date) -> bool {
    match date.month() {
        Month::December => date.day() == 31,
        Month::January => date.day() <= 2,
        _ => false,
    }
}

fn is_valentines_day(date: Date) -> bool {
    date.month() == Month::February && date.day() == 14
}

// Only dates between March 20 and April 20 are considered, even though Easter
// itself can fall as late as April 25.
fn is_easter_season(date: Date) -> bool {
    let in_window = match date.month() {
        Month::March => date.day() >= 20,
        Month::April => date.day() <= 20,
        _ => false,
    };
    if !in_window {
        return false;
    }

    easter_sunday(date.year())
        .map(|sunday| (date - sunday).whole_days().abs() <= EASTER_RADIUS_DAYS)
        .unwrap_or(false)
}

fn is_mothers_day(date: Date) -> bool {
    date.month() == Month::May
        && date.weekday() == Weekday::Sunday
        && (8..=14).contains(&date.day())
}

fn is_fathers_day(date: Date) -> bool {
    date.month() == Month::June
        && date.weekday() == Weekday::Sunday
        && (15..=21).contains(&date.day())
}

fn is_halloween(date: Date) -> bool {
    date.month() == Month::October && date.day() == 31
}
