//! Human-facing output for a [`Dashboard`](weather_core::Dashboard).

pub mod html;
pub mod text;

use chrono::NaiveDateTime;

/// "light rain" -> "Light Rain".
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub(crate) fn clock(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub(crate) fn day_label(date: chrono::NaiveDate) -> String {
    date.format("%a %d %b").to_string()
}

pub(crate) fn visibility_km(visibility_m: Option<u32>) -> f64 {
    f64::from(visibility_m.unwrap_or(0)) / 1000.0
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use weather_core::{CurrentConditions, Dashboard, DaySummary, ThemeCategory, Units};

    pub fn dashboard(theme: ThemeCategory) -> Dashboard {
        let current = CurrentConditions {
            location_name: "Warsaw".into(),
            country: "PL".into(),
            condition_main: "Rain".into(),
            description: "light rain".into(),
            icon: "10d".into(),
            temperature: 11.6,
            feels_like: 10.2,
            humidity_pct: 87,
            pressure_hpa: 1009.0,
            wind_speed: 4.6,
            visibility_m: Some(8_500),
            latitude: 52.2298,
            longitude: 21.0118,
            sunrise_utc: 0,
            sunset_utc: 0,
            observed_at_utc: 0,
            timezone_offset: 3_600,
        };

        let daily = vec![
            DaySummary {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                average_temperature: 17.0,
                average_wind_speed: 3.14,
                representative_icon: "04d".into(),
                representative_condition_main: "Clouds".into(),
            },
            DaySummary {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                average_temperature: 4.6,
                average_wind_speed: 1.0,
                representative_icon: "13d".into(),
                representative_condition_main: "Snow".into(),
            },
        ];

        Dashboard {
            units: Units::Metric,
            current,
            theme,
            daily,
            sunrise_local: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(7, 44, 0),
            sunset_local: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("  overcast   clouds "), "Overcast Clouds");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn clock_formats_or_placeholder() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(6, 5, 0);
        assert_eq!(clock(t), "06:05");
        assert_eq!(clock(None), "--:--");
    }

    #[test]
    fn day_label_format() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_label(d), "Mon 01 Jan");
    }

    #[test]
    fn visibility_in_km() {
        assert_eq!(visibility_km(Some(8_500)), 8.5);
        assert_eq!(visibility_km(None), 0.0);
    }
}
