//! Random draws for fixture values
//!
//! Every function takes the generator explicitly so runs can be replayed
//! from a seed.

use chrono::{DateTime, Utc};
use rand::prelude::*;

/// Youngest generated entity
pub const AGE_MIN: u32 = 18;

/// Oldest generated entity
pub const AGE_MAX: u32 = 27;

/// Latest date any state may carry: 9999-12-31T00:00:00Z, in milliseconds
pub const HORIZON_MILLIS: i64 = 253_402_214_400_000;

/// A lowercase ASCII string of `len` letters
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

/// Entity age, uniform in `[AGE_MIN, AGE_MAX]`
pub fn random_age<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(AGE_MIN..=AGE_MAX)
}

/// Chain length, uniform in `[from, to)`; an empty range yields `from`
pub fn chain_length<R: Rng + ?Sized>(rng: &mut R, from: usize, to: usize) -> usize {
    if to <= from {
        from
    } else {
        rng.gen_range(from..to)
    }
}

/// The horizon as a UTC date
pub fn horizon() -> DateTime<Utc> {
    from_millis(HORIZON_MILLIS)
}

fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

/// Uniform date in `[from, to]` at millisecond precision.
///
/// Returns `from` when the interval is empty or inverted.
pub fn random_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> DateTime<Utc> {
    let (lo, hi) = (from.timestamp_millis(), to.timestamp_millis());
    if hi <= lo {
        return from;
    }
    from_millis(rng.gen_range(lo..=hi))
}

/// Date of the first state in a chain: anywhere from the epoch to the horizon
pub fn first_state_date<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    random_date_between(rng, DateTime::<Utc>::default(), horizon())
}

/// Date of a successor state: no earlier than its predecessor
pub fn next_state_date<R: Rng + ?Sized>(rng: &mut R, previous: DateTime<Utc>) -> DateTime<Utc> {
    random_date_between(rng, previous, horizon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_horizon_is_last_day_of_year_9999() {
        let h = horizon();
        assert_eq!((h.year(), h.month(), h.day()), (9999, 12, 31));
        assert_eq!((h.hour(), h.minute(), h.second()), (0, 0, 0));
    }

    #[test]
    fn test_random_string_is_lowercase_letters() {
        let mut rng = rng();
        for len in [0, 5, 10] {
            let s = random_string(&mut rng, len);
            assert_eq!(s.len(), len);
            assert!(s.chars().all(|c| c.is_ascii_lowercase()), "{s}");
        }
    }

    #[test]
    fn test_age_stays_in_range() {
        let mut rng = rng();
        let ages: Vec<u32> = (0..500).map(|_| random_age(&mut rng)).collect();
        assert!(ages.iter().all(|a| (AGE_MIN..=AGE_MAX).contains(a)));
        assert!(ages.contains(&AGE_MIN));
        assert!(ages.contains(&AGE_MAX));
    }

    #[test]
    fn test_chain_length_is_half_open() {
        let mut rng = rng();
        for _ in 0..500 {
            let n = chain_length(&mut rng, 100, 150);
            assert!((100..150).contains(&n));
        }
        assert_eq!(chain_length(&mut rng, 2, 3), 2);
        assert_eq!(chain_length(&mut rng, 4, 4), 4);
    }

    #[test]
    fn test_next_date_never_precedes_previous() {
        let mut rng = rng();
        let mut date = first_state_date(&mut rng);
        assert!(date.timestamp_millis() >= 0);
        for _ in 0..200 {
            let next = next_state_date(&mut rng, date);
            assert!(next >= date);
            assert!(next <= horizon());
            date = next;
        }
    }

    #[test]
    fn test_empty_interval_returns_lower_bound() {
        let mut rng = rng();
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(random_date_between(&mut rng, at, at), at);
        assert_eq!(random_date_between(&mut rng, horizon(), at), horizon());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let a: Vec<String> = {
            let mut rng = rng();
            (0..3).map(|_| random_string(&mut rng, 10)).collect()
        };
        let b: Vec<String> = {
            let mut rng = rng();
            (0..3).map(|_| random_string(&mut rng, 10)).collect()
        };
        assert_eq!(a, b);
    }
}
