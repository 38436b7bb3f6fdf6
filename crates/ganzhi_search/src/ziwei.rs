//! ZiWei Doushu chart assembly.
//!
//! Pipeline: true solar time → lunar date → local sidereal time → life and
//! body palaces → Sun/Moon longitudes → major and minor stars → bureau →
//! major-limit schedule → annual fortune. Every collaborator failure here is
//! fatal to the chart.

use chrono::{Datelike, Timelike};
use ganzhi_base::{
    ALL_PALACES, Branch, Direction, MajorStarInputs, MinorStarInputs, annual_fortune,
    body_palace, day_pillar, determine_bureau, life_palace, major_limit_schedule, nayin_element,
    place_major_stars, place_minor_stars, year_pillar,
};
use ganzhi_core::{Body, Ephemeris};
use ganzhi_time::{LunarCalendar, local_sidereal_hours, true_solar_time};
use tracing::debug;

use crate::birth::ResolvedBirth;
use crate::error::SearchError;
use crate::ziwei_types::{PalaceStars, ZiweiChart};

/// Compute the ZiWei chart of a resolved birth.
///
/// `query_year` selects the annual fortune; it defaults to the civil birth year.
pub fn compute_ziwei_chart(
    birth: &ResolvedBirth,
    eph: &dyn Ephemeris,
    lunar: &dyn LunarCalendar,
    query_year: Option<i32>,
) -> Result<ZiweiChart, SearchError> {
    let location = birth.location();
    let local = birth.local();

    let tst = true_solar_time(birth.utc, birth.offset_seconds, location.longitude_deg)?;
    let lunar_date = lunar
        .to_lunar(local.year(), local.month(), local.day())
        .map_err(SearchError::LunarConversion)?;

    let gmst = eph.sidereal_time(birth.jd_ut)?;
    let lst = local_sidereal_hours(gmst, location.longitude_deg);
    let life = life_palace(lst, tst.solar.month());

    let hour_branch = Branch::from_hour(tst.solar.hour());
    let body = body_palace(life, lunar_date.month, birth.input.gender, hour_branch);

    // Year stem and branch come from the lunar year's sexagenary pillar, not
    // from a `(year − 1900) mod 10` count.
    let lunar_year = year_pillar(lunar_date.year);
    let sun = eph.planet_longitude(birth.jd_ut, Body::Sun)?;
    let moon = eph.planet_longitude(birth.jd_ut, Body::Moon)?;

    let major_stars = place_major_stars(&MajorStarInputs {
        life,
        lunar_month: lunar_date.month,
        lunar_year_stem: lunar_year.stem,
        sun_longitude_deg: sun,
        moon_longitude_deg: moon,
    });
    let day_stem = day_pillar(local.date()).stem;
    let minor_stars = place_minor_stars(&MinorStarInputs {
        hour: hour_branch,
        day_stem,
        year_stem: lunar_year.stem,
        year_branch: lunar_year.branch,
        lunar_month: lunar_date.month,
    });

    let bureau = determine_bureau(Some(nayin_element(lunar_year)), &major_stars);
    let direction = Direction::for_birth(birth.input.gender, lunar_year.stem.polarity());
    let major_limits = major_limit_schedule(bureau, life, direction, day_stem);

    let year = query_year.unwrap_or(local.year());
    let fortune = annual_fortune(year, &major_stars, &minor_stars, bureau);

    let palaces = ALL_PALACES
        .iter()
        .map(|&palace| PalaceStars {
            palace,
            major: major_stars.slots(palace),
            minor: minor_stars.stars_in(palace),
        })
        .collect();

    debug!(
        life = life.name(),
        body = body.name(),
        bureau = bureau.name(),
        lst_hours = lst,
        solar = %tst.solar,
        "ziwei chart computed"
    );

    Ok(ZiweiChart {
        true_solar_time: tst,
        lunar: lunar_date,
        lunar_year_pillar: lunar_year,
        hour_branch,
        local_sidereal_hours: lst,
        sun_longitude_deg: sun,
        moon_longitude_deg: moon,
        life_palace: life,
        body_palace: body,
        major_stars,
        minor_stars,
        palaces,
        bureau,
        major_limits,
        annual_fortune: fortune,
    })
}
