use serde::Serialize;
use std::fmt;

use crate::estimator::types::Granularity;

/// How much weight the sample behind an estimate carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        };
        f.write_str(s)
    }
}

/// Labels a resolved estimate by granularity class and sample size.
///
/// | Class                 | High       | Medium          | Low        |
/// |-----------------------|------------|-----------------|------------|
/// | overall / national    | —          | count >= 50     | count < 50 |
/// | station               | —          | count >= 20     | count < 20 |
/// | family                | count >= 15| count < 15      | —          |
/// | train                 | count >= 8 | count < 8       | —          |
///
/// Any count below 5 is Low regardless of class.
pub fn confidence(level: Granularity, count: usize) -> Confidence {
    if count < 5 {
        return Confidence::Low;
    }
    match level {
        Granularity::Overall | Granularity::NationalHour => {
            if count >= 50 {
                Confidence::Medium
            } else {
                Confidence::Low
            }
        }
        Granularity::StationHour => {
            if count >= 20 {
                Confidence::Medium
            } else {
                Confidence::Low
            }
        }
        Granularity::FamilyHourWeekday | Granularity::FamilyHour => {
            if count >= 15 {
                Confidence::High
            } else {
                Confidence::Medium
            }
        }
        Granularity::TrainHourWeekday | Granularity::TrainHour => {
            if count >= 8 {
                Confidence::High
            } else {
                Confidence::Medium
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_sample_is_always_low() {
        for level in Granularity::KEYED {
            assert_eq!(confidence(level, 0), Confidence::Low);
            assert_eq!(confidence(level, 4), Confidence::Low);
        }
        assert_eq!(confidence(Granularity::Overall, 4), Confidence::Low);
    }

    #[test]
    fn test_train_thresholds() {
        assert_eq!(confidence(Granularity::TrainHourWeekday, 5), Confidence::Medium);
        assert_eq!(confidence(Granularity::TrainHourWeekday, 7), Confidence::Medium);
        assert_eq!(confidence(Granularity::TrainHourWeekday, 8), Confidence::High);
        assert_eq!(confidence(Granularity::TrainHour, 8), Confidence::High);
    }

    #[test]
    fn test_family_thresholds() {
        assert_eq!(confidence(Granularity::FamilyHour, 14), Confidence::Medium);
        assert_eq!(confidence(Granularity::FamilyHour, 15), Confidence::High);
        assert_eq!(confidence(Granularity::FamilyHourWeekday, 15), Confidence::High);
    }

    #[test]
    fn test_station_thresholds() {
        assert_eq!(confidence(Granularity::StationHour, 19), Confidence::Low);
        assert_eq!(confidence(Granularity::StationHour, 20), Confidence::Medium);
        assert_eq!(confidence(Granularity::StationHour, 1000), Confidence::Medium);
    }

    #[test]
    fn test_national_and_overall_thresholds() {
        assert_eq!(confidence(Granularity::NationalHour, 49), Confidence::Low);
        assert_eq!(confidence(Granularity::NationalHour, 50), Confidence::Medium);
        assert_eq!(confidence(Granularity::Overall, 49), Confidence::Low);
        assert_eq!(confidence(Granularity::Overall, 50), Confidence::Medium);
    }

    #[test]
    fn test_monotone_in_count_per_class() {
        for level in [
            Granularity::TrainHour,
            Granularity::FamilyHour,
            Granularity::StationHour,
            Granularity::NationalHour,
            Granularity::Overall,
        ] {
            let mut last = confidence(level, 0);
            for count in 1..100 {
                let current = confidence(level, count);
                assert!(current >= last, "confidence dropped at count {count}");
                last = current;
            }
        }
    }
}
