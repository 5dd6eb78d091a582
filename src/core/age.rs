use crate::domain::constants::{min_breeding_age_months, DAYS_PER_MONTH};
use crate::domain::model::Animal;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Age in 30-day months, measured from midnight UTC of the birth date.
pub fn age_in_months(birth_date: NaiveDate, now: DateTime<Utc>) -> f64 {
    let born = birth_date.and_time(NaiveTime::MIN).and_utc();
    let elapsed = now.signed_duration_since(born).num_milliseconds() as f64;
    elapsed / (MILLIS_PER_DAY * DAYS_PER_MONTH)
}

pub fn is_breeding_age(animal: &Animal, now: DateTime<Utc>) -> bool {
    age_in_months(animal.birth_date, now) >= min_breeding_age_months(animal.gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{ewe, ram, today};
    use chrono::Duration;

    #[test]
    fn test_month_is_thirty_days() {
        let now = today();
        let birth = now.date_naive() - Duration::days(90);
        assert_eq!(age_in_months(birth, now), 3.0);
    }

    #[test]
    fn test_future_birth_date_is_negative_age() {
        let now = today();
        let birth = now.date_naive() + Duration::days(30);
        assert!(age_in_months(birth, now) < 0.0);
    }

    #[test]
    fn test_breeding_age_depends_on_gender() {
        let now = today();
        // 18 months clears the ewe minimum but not the ram minimum.
        assert!(is_breeding_age(&ewe("e1", 18.0), now));
        assert!(!is_breeding_age(&ram("r1", 18.0), now));
        assert!(is_breeding_age(&ram("r2", 19.2), now));
        assert!(!is_breeding_age(&ewe("e2", 16.7), now));
    }
}
