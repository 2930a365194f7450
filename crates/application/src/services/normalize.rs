//! Response normalization
//!
//! Reshapes raw weather reports into display-ready view models: Unix
//! timestamps become formatted time/day/date tuples in the place's local
//! time, temperatures are rounded to whole degrees, and the view is tagged
//! with favorites-list membership.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use domain::value_objects::Place;

use crate::ports::WeatherReport;

use super::view::{DailyView, FormattedTimestamp, HourlyView, WeatherView};

/// Round a temperature to the nearest whole degree
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn round_degrees(value: f64) -> i32 {
    value.round() as i32
}

/// Format a Unix timestamp for display, shifted by a UTC offset in seconds
///
/// Total for any input: out-of-range timestamps fall back to the epoch and
/// out-of-range offsets to UTC, so the returned fields are never empty.
#[must_use]
pub fn format_timestamp(unix_seconds: i64, offset_seconds: i64) -> FormattedTimestamp {
    let utc: DateTime<Utc> = DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default();
    let offset: FixedOffset = i32::try_from(offset_seconds)
        .ok()
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    let local = utc.with_timezone(&offset);

    FormattedTimestamp {
        time: local.format("%H:%M").to_string(),
        day: local.format("%A").to_string(),
        date: local.format("%-d %b %Y").to_string(),
    }
}

/// Build the display view for a place from a raw report
#[must_use]
pub(crate) fn build_view(place: &Place, report: &WeatherReport, added: bool) -> WeatherView {
    let hourly = report
        .hourly
        .iter()
        .map(|h| HourlyView {
            time: format_timestamp(h.at, report.timezone_offset).time,
            temperature: round_degrees(h.temperature),
            icon: h.icon.clone(),
        })
        .collect();

    let daily = report
        .daily
        .iter()
        .map(|d| DailyView {
            day: format_timestamp(d.at, report.timezone_offset).day,
            temperature_min: round_degrees(d.temperature_min),
            temperature_max: round_degrees(d.temperature_max),
            condition: d.condition.clone(),
            icon: d.icon.clone(),
        })
        .collect();

    WeatherView {
        display_name: place.name().to_string(),
        timezone: report.timezone.clone(),
        observed: format_timestamp(report.observed_at, report.timezone_offset),
        temperature: round_degrees(report.temperature),
        feels_like: round_degrees(report.feels_like),
        humidity: report.humidity,
        wind_speed: report.wind_speed,
        condition: report.condition.clone(),
        icon: report.icon.clone(),
        added,
        hourly,
        daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value_objects::GeoLocation;

    fn sample_report() -> WeatherReport {
        WeatherReport {
            observed_at: 1_700_000_000, // 2023-11-14 22:13:20 UTC
            timezone: "Europe/Berlin".to_string(),
            timezone_offset: 3600,
            temperature: 5.5,
            feels_like: 2.4,
            humidity: 75,
            wind_speed: 4.2,
            condition: "overcast clouds".to_string(),
            icon: "04d".to_string(),
            hourly: vec![crate::ports::HourlyOutlook {
                at: 1_700_003_600,
                temperature: 5.1,
                condition: "light rain".to_string(),
                icon: "10d".to_string(),
            }],
            daily: vec![crate::ports::DailyOutlook {
                at: 1_700_000_000,
                temperature_min: 2.4,
                temperature_max: 7.6,
                condition: "overcast clouds".to_string(),
                icon: "04d".to_string(),
                precipitation_probability: Some(0.1),
            }],
        }
    }

    #[test]
    fn rounds_to_nearest_degree() {
        assert_eq!(round_degrees(5.4), 5);
        assert_eq!(round_degrees(5.5), 6);
        assert_eq!(round_degrees(-0.5), -1);
        assert_eq!(round_degrees(0.0), 0);
    }

    #[test]
    fn formats_known_timestamp() {
        // 2023-11-14 22:13:20 UTC, +1h offset -> 23:13 Tuesday
        let formatted = format_timestamp(1_700_000_000, 3600);
        assert_eq!(formatted.time, "23:13");
        assert_eq!(formatted.day, "Tuesday");
        assert_eq!(formatted.date, "14 Nov 2023");
    }

    #[test]
    fn offset_shifts_across_midnight() {
        let formatted = format_timestamp(1_700_000_000, 2 * 3600);
        assert_eq!(formatted.time, "00:13");
        assert_eq!(formatted.day, "Wednesday");
    }

    #[test]
    fn never_empty_for_any_input() {
        for (ts, offset) in [
            (0, 0),
            (-1, 0),
            (i64::MAX, 0),
            (i64::MIN, 0),
            (1_700_000_000, i64::MAX),
            (1_700_000_000, -i64::MAX),
        ] {
            let formatted = format_timestamp(ts, offset);
            assert!(!formatted.time.is_empty());
            assert!(!formatted.day.is_empty());
            assert!(!formatted.date.is_empty());
        }
    }

    #[test]
    fn view_rounds_and_tags() {
        let place = Place::new("Berlin", GeoLocation::berlin()).expect("valid place");
        let view = build_view(&place, &sample_report(), true);

        assert_eq!(view.display_name, "Berlin");
        assert_eq!(view.temperature, 6);
        assert_eq!(view.feels_like, 2);
        assert!(view.added);
        assert_eq!(view.daily[0].temperature_min, 2);
        assert_eq!(view.daily[0].temperature_max, 8);
        assert_eq!(view.hourly[0].temperature, 5);
    }
}
