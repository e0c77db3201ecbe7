//! Bucketing of 3-hour forecast samples into local calendar days.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::model::{DaySummary, ForecastSample};

/// Maximum number of days returned by [`aggregate`].
pub const MAX_DAYS: usize = 5;

/// Wall-clock time at a location `offset_secs` east of UTC.
///
/// A flat shift of the UTC instant; no timezone database is consulted.
/// Returns `None` when the shifted instant is outside chrono's range.
pub fn local_time(timestamp_utc: i64, offset_secs: i64) -> Option<NaiveDateTime> {
    let shifted = timestamp_utc.checked_add(offset_secs)?;
    DateTime::from_timestamp(shifted, 0).map(|dt| dt.naive_utc())
}

/// Calendar date of a sample at a location `offset_secs` east of UTC.
pub fn local_date(timestamp_utc: i64, offset_secs: i64) -> Option<NaiveDate> {
    local_time(timestamp_utc, offset_secs).map(|dt| dt.date())
}

/// Group `samples` by local date and summarize each day.
///
/// Days come back in ascending date order, limited to the earliest
/// [`MAX_DAYS`]. Within a day the representative icon and label are taken
/// from the sample at index `len / 2` in input order.
pub fn aggregate(samples: &[ForecastSample], timezone_offset: i64) -> Vec<DaySummary> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();

    for sample in samples {
        match local_date(sample.timestamp_utc, timezone_offset) {
            Some(date) => buckets.entry(date).or_default().push(sample),
            None => warn!(
                timestamp = sample.timestamp_utc,
                timezone_offset, "skipping forecast sample outside the calendar range"
            ),
        }
    }

    debug!(samples = samples.len(), days = buckets.len(), "aggregated forecast");

    buckets
        .into_iter()
        .take(MAX_DAYS)
        .map(|(date, bucket)| summarize(date, &bucket))
        .collect()
}

// Buckets are only created on insert, so `bucket` is never empty.
fn summarize(date: NaiveDate, bucket: &[&ForecastSample]) -> DaySummary {
    let count = bucket.len() as f64;
    let average_temperature = bucket.iter().map(|s| s.temperature).sum::<f64>() / count;
    let average_wind_speed = bucket.iter().map(|s| s.wind_speed).sum::<f64>() / count;
    let representative = bucket[bucket.len() / 2];

    DaySummary {
        date,
        average_temperature,
        average_wind_speed,
        representative_icon: representative.condition_icon.clone(),
        representative_condition_main: representative.condition_main.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DAY: i64 = 86_400;
    const STEP: i64 = 3 * 3_600;
    // 2024-01-01T00:00:00Z
    const JAN_1: i64 = 1_704_067_200;

    fn sample(ts: i64, temperature: f64, icon: &str) -> ForecastSample {
        ForecastSample {
            timestamp_utc: ts,
            temperature,
            wind_speed: 1.0,
            condition_main: format!("main-{icon}"),
            condition_icon: icon.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate(&[], 0).is_empty());
        assert!(aggregate(&[], 3_600).is_empty());
    }

    #[test]
    fn averages_two_days() {
        let mut samples: Vec<_> = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0]
            .into_iter()
            .enumerate()
            .map(|(i, t)| sample(JAN_1 + i as i64 * STEP, t, "01d"))
            .collect();
        samples.push(sample(JAN_1 + DAY, 5.0, "02d"));

        let days = aggregate(&samples, 0);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(2024, 1, 1));
        assert!((days[0].average_temperature - 17.0).abs() < 1e-9);
        assert_eq!(days[1].date, date(2024, 1, 2));
        assert!((days[1].average_temperature - 5.0).abs() < 1e-9);
    }

    #[test]
    fn wind_speed_is_averaged() {
        let mut a = sample(JAN_1, 0.0, "a");
        a.wind_speed = 2.0;
        let mut b = sample(JAN_1 + STEP, 0.0, "b");
        b.wind_speed = 5.0;

        let days = aggregate(&[a, b], 0);
        assert!((days[0].average_wind_speed - 3.5).abs() < 1e-9);
    }

    #[test]
    fn representative_is_middle_sample() {
        let odd: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .enumerate()
            .map(|(i, icon)| sample(JAN_1 + i as i64 * STEP, 0.0, icon))
            .collect();
        let days = aggregate(&odd, 0);
        assert_eq!(days[0].representative_icon, "c");
        assert_eq!(days[0].representative_condition_main, "main-c");

        let even: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, icon)| sample(JAN_1 + i as i64 * STEP, 0.0, icon))
            .collect();
        let days = aggregate(&even, 0);
        assert_eq!(days[0].representative_icon, "c");
    }

    #[test]
    fn representative_follows_input_order_not_time() {
        // Input order wins even when timestamps are shuffled.
        let samples = vec![
            sample(JAN_1 + 3 * STEP, 0.0, "late"),
            sample(JAN_1, 0.0, "early"),
            sample(JAN_1 + STEP, 0.0, "mid"),
        ];
        let days = aggregate(&samples, 0);
        assert_eq!(days[0].representative_icon, "early");
    }

    #[test]
    fn single_sample_bucket() {
        let mut only = sample(JAN_1, 7.5, "10n");
        only.wind_speed = 4.25;
        let days = aggregate(&[only], 0);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].average_temperature, 7.5);
        assert_eq!(days[0].average_wind_speed, 4.25);
        assert_eq!(days[0].representative_icon, "10n");
    }

    #[test]
    fn offset_moves_samples_across_midnight() {
        // 2024-01-01T22:00Z is already Jan 2 at UTC+3 but still Jan 1 at UTC-5.
        let late = sample(JAN_1 + 22 * 3_600, 1.0, "x");

        assert_eq!(aggregate(std::slice::from_ref(&late), 3 * 3_600)[0].date, date(2024, 1, 2));
        assert_eq!(aggregate(std::slice::from_ref(&late), -5 * 3_600)[0].date, date(2024, 1, 1));
    }

    #[test]
    fn keeps_earliest_five_days() {
        // Seven days, fed newest first.
        let samples: Vec<_> = (0..7)
            .rev()
            .map(|d| sample(JAN_1 + d * DAY, d as f64, "i"))
            .collect();

        let days = aggregate(&samples, 0);

        assert_eq!(days.len(), MAX_DAYS);
        assert_eq!(days[0].date, date(2024, 1, 1));
        assert_eq!(days[4].date, date(2024, 1, 5));
        assert_eq!(days[4].average_temperature, 4.0);
    }

    #[test]
    fn out_of_range_samples_are_skipped() {
        let samples = vec![sample(i64::MAX, 100.0, "bad"), sample(JAN_1, 3.0, "ok")];
        let days = aggregate(&samples, 60);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].representative_icon, "ok");
    }

    #[test]
    fn local_time_applies_flat_offset() {
        let t = local_time(JAN_1, 2 * 3_600).unwrap();
        assert_eq!(t.format("%Y-%m-%d %H:%M").to_string(), "2024-01-01 02:00");
        assert!(local_time(i64::MAX, 1).is_none());
    }

    fn arb_sample() -> impl Strategy<Value = ForecastSample> {
        (0i64..(20 * DAY), -50.0f64..50.0, 0.0f64..40.0).prop_map(|(offset, temperature, wind)| {
            ForecastSample {
                timestamp_utc: JAN_1 + offset,
                temperature,
                wind_speed: wind,
                condition_main: "Clouds".into(),
                condition_icon: "04d".into(),
            }
        })
    }

    proptest! {
        #[test]
        fn never_more_than_five_days_and_ascending(
            samples in prop::collection::vec(arb_sample(), 0..120),
            tz in -12i64 * 3_600..=14 * 3_600,
        ) {
            let days = aggregate(&samples, tz);
            prop_assert!(days.len() <= MAX_DAYS);
            for pair in days.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
        }

        #[test]
        fn aggregate_is_idempotent(
            samples in prop::collection::vec(arb_sample(), 0..60),
            tz in -12i64 * 3_600..=14 * 3_600,
        ) {
            prop_assert_eq!(aggregate(&samples, tz), aggregate(&samples, tz));
        }

        #[test]
        fn single_day_average_is_mean(temps in prop::collection::vec(-40.0f64..40.0, 1..8)) {
            let samples: Vec<_> = temps
                .iter()
                .enumerate()
                .map(|(i, t)| sample(JAN_1 + i as i64 * STEP, *t, "i"))
                .collect();
            let days = aggregate(&samples, 0);
            let mean = temps.iter().sum::<f64>() / temps.len() as f64;

            prop_assert_eq!(days.len(), 1);
            prop_assert!((days[0].average_temperature - mean).abs() < 1e-9);
        }
    }
}
