use chrono::NaiveDate;
use ganzhi_search::{BirthInput, SolarTermTable};
use ganzhi_time::{LunarDate, TrueSolarTime};

use crate::error::ChartError;
use crate::global::engine;
use crate::report::{BaziReport, ZiweiReport};

/// Four-pillars chart through the global engine.
pub fn compute_bazi(input: &BirthInput) -> Result<BaziReport, ChartError> {
    engine()?.compute_bazi(input)
}

/// Four-pillars chart with an explicit algorithm version.
pub fn compute_bazi_version(input: &BirthInput, version: &str) -> Result<BaziReport, ChartError> {
    engine()?.compute_bazi_with(input, version)
}

/// ZiWei chart through the global engine.
///
/// `query_year` selects the annual fortune (default: the civil birth year).
pub fn compute_ziwei(
    input: &BirthInput,
    query_year: Option<i32>,
) -> Result<ZiweiReport, ChartError> {
    engine()?.compute_ziwei(input, query_year)
}

/// ZiWei chart with an explicit algorithm version.
pub fn compute_ziwei_version(
    input: &BirthInput,
    query_year: Option<i32>,
    version: &str,
) -> Result<ZiweiReport, ChartError> {
    engine()?.compute_ziwei_with(input, query_year, version)
}

/// Solar-term table of `year`.
pub fn solar_terms(year: i32) -> Result<SolarTermTable, ChartError> {
    Ok(engine()?.solar_terms(year))
}

/// True solar time of a birth.
pub fn true_solar_time(input: &BirthInput) -> Result<TrueSolarTime, ChartError> {
    engine()?.true_solar_time(input)
}

/// Lunar date of a Gregorian date.
pub fn lunar_date(date: NaiveDate) -> Result<LunarDate, ChartError> {
    engine()?.lunar_date(date)
}
