//! Seasonal emoji and weather icon sampling.
//!
//! Seasons follow the Tanzanian tropical climate: two rain seasons
//! (long rains March to May, short rains October to December) separated by a
//! dry season, with a warm dry spell in January and February.

use crate::types::IconCategory;
use rand::Rng;
use time::Month;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Season {
    WarmDry,
    LongRains,
    Dry,
    ShortRains,
}

const RAINY_WEIGHTS: &[(IconCategory, u32)] = &[
    (IconCategory::Rainy, 2),
    (IconCategory::Cloudy, 1),
    (IconCategory::Sunny, 1),
];

const DRY_WEIGHTS: &[(IconCategory, u32)] =
    &[(IconCategory::Sunny, 3), (IconCategory::Cloudy, 1)];

const WARM_DRY_WEIGHTS: &[(IconCategory, u32)] =
    &[(IconCategory::Sunny, 2), (IconCategory::Cloudy, 1)];

impl Season {
    pub fn of(month: Month) -> Self {
        match month {
            Month::January | Month::February => Season::WarmDry,
            Month::March | Month::April | Month::May => Season::LongRains,
            Month::June | Month::July | Month::August | Month::September => Season::Dry,
            Month::October | Month::November | Month::December => Season::ShortRains,
        }
    }

    /// Emoji shown when no holiday applies.
    pub fn emoji(self) -> &'static str {
        match self {
            Season::LongRains | Season::ShortRains => "🌧️",
            Season::Dry => "☀️",
            Season::WarmDry => "🌤️",
        }
    }

    pub fn icon_weights(self) -> &'static [(IconCategory, u32)] {
        match self {
            Season::LongRains | Season::ShortRains => RAINY_WEIGHTS,
            Season::Dry => DRY_WEIGHTS,
            Season::WarmDry => WARM_DRY_WEIGHTS,
        }
    }

    pub fn sample_icon<R: Rng + ?Sized>(self, rng: &mut R) -> IconCategory {
        weighted_choice(self.icon_weights(), rng)
            .copied()
            .unwrap_or(IconCategory::Sunny)
    }
}

/// Picks an item with probability proportional to its weight.
///
/// Returns `None` when the table is empty or every weight is zero.
pub fn weighted_choice<'a, T, R>(table: &'a [(T, u32)], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let total: u32 = table.iter().map(|(_, weight)| *weight).sum();
    if total == 0 {
        return None;
    }

    let mut ticket = rng.gen_range(0..total);
    for (item, weight) in table {
        if ticket < *weight {
            return Some(item);
        }
        ticket -= weight;
    }
    None
}
