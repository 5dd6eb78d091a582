//! Fixed breeding parameters shared by the evaluator and the statistics.

use crate::domain::model::{Fertility, Gender};

/// Months are approximated as 30 days everywhere ages are computed.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const MIN_BREEDING_AGE_FEMALE_MONTHS: f64 = 16.8;
pub const MIN_BREEDING_AGE_MALE_MONTHS: f64 = 19.2;

/// Animals younger than this are listed as lambs.
pub const LAMB_AGE_MONTHS: f64 = 12.0;

/// Starting score of every pair before fertility and health adjustments.
pub const BASE_SCORE: i32 = 100;

pub const HEALTH_PENALTY: i32 = 15;

pub fn min_breeding_age_months(gender: Gender) -> f64 {
    match gender {
        Gender::Female => MIN_BREEDING_AGE_FEMALE_MONTHS,
        Gender::Male => MIN_BREEDING_AGE_MALE_MONTHS,
    }
}

/// Expected lambs per pregnancy for a ewe of the given rating.
pub fn litter_size(fertility: Fertility) -> f64 {
    match fertility {
        Fertility::AA => 1.2,
        Fertility::BPlus => 2.0,
        Fertility::BB => 2.5,
    }
}
