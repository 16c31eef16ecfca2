//! Low-precision Sun/Moon positions and natal-chart constants.
//!
//! Nothing here feeds the forecast report. The CLI uses [`slot_transits`] as a
//! diagnostic only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::forecast::slots::slots;
use crate::time::ist::ist_to_utc;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const J2000_JD: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
}

/// Baseline chart the market's transits are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NatalChart {
    pub ascendant: f64,
    pub sun: f64,
    pub moon: f64,
}

impl NatalChart {
    /// Example calibration for the Nifty index.
    pub const fn nifty() -> Self {
        Self {
            ascendant: 15.0,
            sun: 10.0,
            moon: 20.0,
        }
    }
}

pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let secs = at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JD + secs / 86_400.0
}

/// Geocentric ecliptic longitude in degrees, `[0, 360)`.
pub fn planet_longitude(planet: Planet, at: DateTime<Utc>) -> f64 {
    let t = (julian_day(at) - J2000_JD) / DAYS_PER_CENTURY;
    match planet {
        Planet::Sun => sun_longitude(t),
        Planet::Moon => moon_longitude(t),
    }
}

/// Shortest separation between two longitudes, `[0, 180]`.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
}

fn normalize(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

// Apparent longitude; accurate to ~0.01 degrees over this century.
fn sun_longitude(t: f64) -> f64 {
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35_999.05029 * t - 0.0001537 * t * t;
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * sin_deg(m)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m);
    let omega = 125.04 - 1_934.136 * t;
    normalize(l0 + c - 0.00569 - 0.00478 * sin_deg(omega))
}

// Main periodic terms only; good to a few tenths of a degree.
fn moon_longitude(t: f64) -> f64 {
    let l = 218.3164477 + 481_267.88123421 * t;
    let d = 297.8501921 + 445_267.1114034 * t;
    let m = 357.5291092 + 35_999.0502909 * t;
    let mp = 134.9633964 + 477_198.8675055 * t;
    let f = 93.2720950 + 483_202.0175233 * t;
    normalize(
        l + 6.289 * sin_deg(mp) + 1.274 * sin_deg(2.0 * d - mp) + 0.658 * sin_deg(2.0 * d)
            + 0.214 * sin_deg(2.0 * mp)
            - 0.186 * sin_deg(m)
            - 0.114 * sin_deg(2.0 * f),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotTransit {
    pub label: &'static str,
    pub at_utc: DateTime<Utc>,
    pub sun: f64,
    pub moon: f64,
    pub sun_to_natal_sun: f64,
    pub moon_to_natal_moon: f64,
    pub moon_to_ascendant: f64,
}

/// Sun/Moon positions at each slot start on `date`, against `natal`.
pub fn slot_transits(date: NaiveDate, natal: &NatalChart) -> Vec<SlotTransit> {
    slots()
        .map(|slot| {
            let at_utc = ist_to_utc(slot.starts_at(date));
            let sun = planet_longitude(Planet::Sun, at_utc);
            let moon = planet_longitude(Planet::Moon, at_utc);
            SlotTransit {
                label: slot.label,
                at_utc,
                sun,
                moon,
                sun_to_natal_sun: angular_difference(sun, natal.sun),
                moon_to_natal_moon: angular_difference(moon, natal.moon),
                moon_to_ascendant: angular_difference(moon, natal.ascendant),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_day_at_j2000() {
        let at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(at) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn angular_difference_takes_short_way_round() {
        assert!((angular_difference(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((angular_difference(10.0, 350.0) - 20.0).abs() < 1e-9);
        assert!((angular_difference(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert_eq!(angular_difference(42.0, 42.0), 0.0);
    }

    #[test]
    fn sun_sits_at_the_equinox_point_in_march_2024() {
        // Vernal equinox: 2024-03-20 03:06 UTC.
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let lon = planet_longitude(Planet::Sun, at);
        assert!(angular_difference(lon, 0.0) < 0.1, "sun at {lon}");
    }

    #[test]
    fn moon_opposes_sun_at_full_moon() {
        // Full moon: 2024-03-25 07:00 UTC.
        let at = Utc.with_ymd_and_hms(2024, 3, 25, 7, 0, 0).unwrap();
        let sun = planet_longitude(Planet::Sun, at);
        let moon = planet_longitude(Planet::Moon, at);
        assert!(
            (angular_difference(sun, moon) - 180.0).abs() < 2.0,
            "sun {sun}, moon {moon}"
        );
    }

    #[test]
    fn longitudes_are_normalized() {
        let at = Utc.with_ymd_and_hms(1987, 6, 1, 0, 0, 0).unwrap();
        for planet in [Planet::Sun, Planet::Moon] {
            let lon = planet_longitude(planet, at);
            assert!((0.0..360.0).contains(&lon), "{planet:?} at {lon}");
        }
    }

    #[test]
    fn transits_cover_every_slot_in_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let transits = slot_transits(date, &NatalChart::nifty());
        assert_eq!(transits.len(), 10);
        assert_eq!(transits[0].label, "9:30-9:50");
        assert_eq!(
            transits[0].at_utc,
            Utc.with_ymd_and_hms(2024, 3, 15, 4, 0, 0).unwrap()
        );
        for t in &transits {
            assert!((0.0..=180.0).contains(&t.moon_to_ascendant));
            assert!((0.0..=180.0).contains(&t.sun_to_natal_sun));
        }
        // The Sun moves about a degree a day, so under 0.3 degrees across the session.
        let drift = angular_difference(transits[0].sun, transits[9].sun);
        assert!(drift < 0.3, "drift {drift}");
    }
}
