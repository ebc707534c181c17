use crate::calendar::holiday_on;
use crate::types::Greeting;
use crate::weather::Season;
use rand::Rng;
use time::PrimitiveDateTime;

/// Salutation for an hour of the local 24h clock.
pub fn time_of_day_phrase(hour: u8) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        17..=21 => "Good Evening",
        _ => "Good Night",
    }
}

/// Resolves the greeting for a local wall-clock time using the thread-local RNG.
pub fn resolve(now: PrimitiveDateTime) -> Greeting {
    resolve_with(now, &mut rand::thread_rng())
}

/// Resolves the greeting for a local wall-clock time.
///
/// Holidays replace the time-of-day phrase and the seasonal emoji. Only the
/// icon category draws from `rng`.
pub fn resolve_with<R: Rng + ?Sized>(now: PrimitiveDateTime, rng: &mut R) -> Greeting {
    let date = now.date();
    let season = Season::of(date.month());
    let holiday = holiday_on(date);

    let (text, emoji) = match holiday {
        Some(holiday) => (holiday.phrase(), holiday.emoji()),
        None => (time_of_day_phrase(now.hour()), season.emoji()),
    };
    let icon = season.sample_icon(rng);

    tracing::trace!(%now, ?holiday, ?season, ?icon, "resolved greeting");

    Greeting {
        text: text.to_string(),
        emoji: emoji.to_string(),
        icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IconCategory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    #[test]
    fn test_time_of_day_bands() {
        assert_eq!(time_of_day_phrase(0), "Good Night");
        assert_eq!(time_of_day_phrase(4), "Good Night");
        assert_eq!(time_of_day_phrase(5), "Good Morning");
        assert_eq!(time_of_day_phrase(11), "Good Morning");
        assert_eq!(time_of_day_phrase(12), "Good Afternoon");
        assert_eq!(time_of_day_phrase(16), "Good Afternoon");
        assert_eq!(time_of_day_phrase(17), "Good Evening");
        assert_eq!(time_of_day_phrase(21), "Good Evening");
        assert_eq!(time_of_day_phrase(22), "Good Night");
        assert_eq!(time_of_day_phrase(23), "Good Night");
    }

    #[test]
    fn test_plain_day_uses_time_and_season() {
        let mut rng = StdRng::seed_from_u64(11);
        let greeting = resolve_with(datetime!(2025-07-09 08:15), &mut rng);
        assert_eq!(greeting.text, "Good Morning");
        assert_eq!(greeting.emoji, "☀️");
        assert_ne!(greeting.icon, IconCategory::Rainy);
    }

    #[test]
    fn test_holiday_overrides_time_and_season() {
        let mut rng = StdRng::seed_from_u64(11);
        let greeting = resolve_with(datetime!(2025-10-31 20:00), &mut rng);
        assert_eq!(greeting.text, "Happy Halloween");
        assert_eq!(greeting.emoji, "🎃");
    }

    #[test]
    fn test_holiday_keeps_seasonal_icon_weights() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let greeting = resolve_with(datetime!(2025-06-15 09:00), &mut rng);
            assert_eq!(greeting.text, "Happy Father's Day");
            assert_ne!(greeting.icon, IconCategory::Rainy);
        }
    }

    #[test]
    fn test_same_seed_same_greeting() {
        let now = datetime!(2026-03-03 13:45);
        let first = resolve_with(now, &mut StdRng::seed_from_u64(9));
        let second = resolve_with(now, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }
}
