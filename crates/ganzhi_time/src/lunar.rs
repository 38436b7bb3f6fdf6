//! Gregorian → Chinese lunisolar date conversion.
//!
//! [`LunarCalendar`] is the collaborator seam; [`TableLunarCalendar`] is the
//! shipped implementation, driven by the widely published 1900–2100 month
//! table (one packed word per lunar year):
//!
//! - bits 0–3: leap month number (0 = no leap month)
//! - bits 4–15: month lengths, bit `0x10000 >> m` set = month `m` has 30 days
//! - bit 16: the leap month has 30 days
//!
//! Lunar year 1900 month 1 day 1 is Gregorian 1900-01-31.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year (changes at the new moon near Chinese New Year).
    pub year: i32,
    /// Month number 1–12; a leap month repeats its predecessor's number.
    pub month: u8,
    /// Day of month 1–30.
    pub day: u8,
    /// True inside an intercalary month.
    pub is_leap: bool,
}

/// Converts Gregorian civil dates to lunar dates.
pub trait LunarCalendar: Send + Sync {
    /// Convert a Gregorian date.
    fn to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, TimeError>;
}

/// First lunar year covered by the table.
pub const LUNAR_TABLE_FIRST_YEAR: i32 = 1900;

/// Last lunar year covered by the table.
pub const LUNAR_TABLE_LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

fn info(year: i32) -> u32 {
    LUNAR_INFO[(year - LUNAR_TABLE_FIRST_YEAR) as usize]
}

/// Leap month of a lunar year (0 when none).
fn leap_month(year: i32) -> u8 {
    (info(year) & 0xf) as u8
}

fn leap_month_days(year: i32) -> i64 {
    match (leap_month(year), info(year) & 0x10000) {
        (0, _) => 0,
        (_, 0) => 29,
        _ => 30,
    }
}

fn month_days(year: i32, month: u8) -> i64 {
    if info(year) & (0x10000 >> month) != 0 { 30 } else { 29 }
}

fn year_days(year: i32) -> i64 {
    (1..=12).map(|m| month_days(year, m)).sum::<i64>() + leap_month_days(year)
}

/// Table-driven converter for lunar years 1900–2100.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLunarCalendar;

impl TableLunarCalendar {
    /// Convert a validated Gregorian date.
    pub fn from_solar(date: NaiveDate) -> Option<LunarDate> {
        let base = NaiveDate::from_ymd_opt(1900, 1, 31)?;
        let mut offset = date.signed_duration_since(base).num_days();
        if offset < 0 {
            return None;
        }

        let mut year = LUNAR_TABLE_FIRST_YEAR;
        while year <= LUNAR_TABLE_LAST_YEAR && offset >= year_days(year) {
            offset -= year_days(year);
            year += 1;
        }
        if year > LUNAR_TABLE_LAST_YEAR {
            return None;
        }

        let leap = leap_month(year);
        for month in 1..=12u8 {
            let days = month_days(year, month);
            if offset < days {
                return Some(LunarDate { year, month, day: (offset + 1) as u8, is_leap: false });
            }
            offset -= days;

            if month == leap {
                let days = leap_month_days(year);
                if offset < days {
                    return Some(LunarDate { year, month, day: (offset + 1) as u8, is_leap: true });
                }
                offset -= days;
            }
        }
        None
    }
}

impl LunarCalendar for TableLunarCalendar {
    fn to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDate, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        Self::from_solar(date).ok_or(TimeError::LunarOutOfRange { year, month, day })
    }
}
