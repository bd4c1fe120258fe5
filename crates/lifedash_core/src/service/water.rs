//! Daily water intake and unit conversion.
//!
//! Amounts are stored in millilitres; fluid ounces are a display unit only.

use crate::model::settings::VolumeUnit;
use crate::model::water::WaterLog;
use crate::store::Collection;
use chrono::NaiveDate;

pub const ML_PER_FL_OZ: f64 = 29.5735;

/// Millilitres to fluid ounces, rounded to one decimal.
pub fn ml_to_fl_oz(ml: f64) -> f64 {
    (ml / ML_PER_FL_OZ * 10.0).round() / 10.0
}

/// Fluid ounces to whole millilitres.
pub fn fl_oz_to_ml(fl_oz: f64) -> f64 {
    (fl_oz * ML_PER_FL_OZ).round()
}

/// Converts a stored millilitre amount to `unit`.
pub fn display_amount(ml: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Millilitres => ml,
        VolumeUnit::FluidOunces => ml_to_fl_oz(ml),
    }
}

/// Converts user input in `unit` to millilitres for storage.
pub fn input_to_ml(amount: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Millilitres => amount,
        VolumeUnit::FluidOunces => fl_oz_to_ml(amount),
    }
}

/// Millilitres logged on `date`.
pub fn intake_on(logs: &[WaterLog], date: NaiveDate) -> f64 {
    logs.iter()
        .filter(|log| log.timestamp.date_naive() == date)
        .map(|log| log.amount)
        .sum()
}

/// Millilitres still needed to reach `daily_goal`, never negative.
pub fn remaining_ml(daily_goal: f64, intake: f64) -> f64 {
    (daily_goal - intake).max(0.0)
}

/// Goal completion in percent, capped at 100.
pub fn progress_percent(daily_goal: f64, intake: f64) -> f64 {
    if daily_goal <= 0.0 {
        return 100.0;
    }
    (intake / daily_goal * 100.0).min(100.0)
}

/// Undoes the latest log of `date`; returns the removed log, if any.
pub fn remove_last_on(
    logs: Collection<WaterLog>,
    date: NaiveDate,
) -> (Collection<WaterLog>, Option<WaterLog>) {
    let latest = logs
        .iter()
        .filter(|log| log.timestamp.date_naive() == date)
        .max_by_key(|log| log.timestamp)
        .cloned();
    match latest {
        Some(log) => (logs.remove(&log.id), Some(log)),
        None => (logs, None),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        display_amount, fl_oz_to_ml, intake_on, ml_to_fl_oz, remaining_ml, remove_last_on,
    };
    use crate::model::entity::EntityId;
    use crate::model::settings::VolumeUnit;
    use crate::model::water::WaterLog;
    use crate::store::Collection;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn log(id: &str, day: u32, hour: u32, amount: f64) -> WaterLog {
        WaterLog {
            id: EntityId::from(id),
            amount,
            timestamp: Utc.with_ymd_and_hms(2024, 10, day, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn conversions_round_like_the_display() {
        assert_eq!(ml_to_fl_oz(250.0), 8.5);
        assert_eq!(fl_oz_to_ml(8.0), 237.0);
        assert_eq!(display_amount(500.0, VolumeUnit::Millilitres), 500.0);
        assert_eq!(remaining_ml(2000.0, 2250.0), 0.0);
    }

    #[test]
    fn remove_last_only_touches_the_given_day() {
        let logs = Collection::from_records(vec![
            log("a", 1, 9, 250.0),
            log("b", 2, 8, 500.0),
            log("c", 2, 15, 750.0),
            log("d", 2, 11, 250.0),
        ]);
        let day = NaiveDate::from_ymd_opt(2024, 10, 2).unwrap();
        assert_eq!(intake_on(logs.records(), day), 1500.0);

        let (logs, removed) = remove_last_on(logs, day);
        assert_eq!(removed.map(|log| log.id), Some(EntityId::from("c")));
        assert_eq!(intake_on(logs.records(), day), 750.0);

        let empty_day = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        let (unchanged, removed) = remove_last_on(logs.clone(), empty_day);
        assert!(removed.is_none());
        assert_eq!(unchanged, logs);
    }
}
