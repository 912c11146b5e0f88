//! Rounding of raw hours to a configured interval.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::RoundingType;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Rounds a raw hour value to a multiple of `interval_minutes`.
///
/// An interval of `0` disables rounding and returns `hours` unchanged.
/// `Nearest` rounds half-up, `Up` takes the ceiling and `Down` the floor.
/// Callers guarantee non-negative input.
///
/// The arithmetic is carried out in minutes so that common intervals
/// (5, 6, 10, 15, 30 minutes) produce exact hour values.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::round_hours;
/// use overtime_engine::models::RoundingType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let raw = Decimal::from_str("7.9").unwrap();
///
/// assert_eq!(round_hours(raw, 15, RoundingType::Nearest), Decimal::from(8));
/// assert_eq!(round_hours(raw, 15, RoundingType::Down), Decimal::from_str("7.75").unwrap());
/// assert_eq!(round_hours(raw, 0, RoundingType::Up), raw);
/// ```
pub fn round_hours(hours: Decimal, interval_minutes: u32, mode: RoundingType) -> Decimal {
    if interval_minutes == 0 {
        return hours;
    }

    let interval = Decimal::from(interval_minutes);
    let units = hours * MINUTES_PER_HOUR / interval;

    let rounded_units = match mode {
        RoundingType::Nearest => {
            units.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
        RoundingType::Up => units.ceil(),
        RoundingType::Down => units.floor(),
    };

    rounded_units * interval / MINUTES_PER_HOUR
}
