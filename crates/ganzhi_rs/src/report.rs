//! Serializable chart reports with a plain-text rendering.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use ganzhi_base::{ALL_ELEMENTS, Gender};
use ganzhi_search::{BaziChart, GeoLocation, ResolvedBirth, ZiweiChart};
use serde::Serialize;

/// The birth as the engine resolved it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthSummary {
    pub local: NaiveDateTime,
    pub timezone: String,
    pub utc: DateTime<Utc>,
    pub offset_seconds: i32,
    pub jd_ut: f64,
    pub gender: Gender,
    pub location: GeoLocation,
}

impl From<&ResolvedBirth> for BirthSummary {
    fn from(b: &ResolvedBirth) -> Self {
        Self {
            local: b.input.local,
            timezone: b.input.timezone.clone(),
            utc: b.utc,
            offset_seconds: b.offset_seconds,
            jd_ut: b.jd_ut,
            gender: b.input.gender,
            location: b.location(),
        }
    }
}

impl fmt::Display for BirthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "出生: {} {} ({}), UTC {}",
            self.local,
            self.timezone,
            self.gender.name(),
            self.utc.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(
            f,
            "位置: {:.2}°E {:.2}°N",
            self.location.longitude_deg, self.location.latitude_deg
        )
    }
}

/// BaZi result with the algorithm version that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziReport {
    pub algorithm_version: String,
    pub birth: BirthSummary,
    pub chart: BaziChart,
}

impl BaziReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BaziReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.chart;
        write!(f, "{}", self.birth)?;
        writeln!(f, "四柱: {}", c.pillars)?;
        let gods = c.ten_gods.as_array().map(|g| g.name());
        writeln!(f, "十神: {}", gods.join(" "))?;
        writeln!(f, "生肖: {}", c.zodiac)?;
        let weights: Vec<String> = ALL_ELEMENTS
            .iter()
            .map(|e| format!("{}{:.1}%", e.name(), c.profile.weight(*e) * 100.0))
            .collect();
        writeln!(f, "五行: {}", weights.join(" "))?;
        writeln!(f, "日主: {}", c.profile.day_master.name())?;
        writeln!(f, "建议: {}", c.profile.advice.text())?;
        writeln!(
            f,
            "命宫: {}宫 {}",
            c.destiny_palace.name(),
            c.destiny_explanation
        )?;
        writeln!(
            f,
            "起运: {} {} {:.2}岁",
            c.luck_start.direction.name(),
            c.luck_start.term.name(),
            c.luck_start.years
        )
    }
}

/// ZiWei result with the algorithm version that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZiweiReport {
    pub algorithm_version: String,
    pub birth: BirthSummary,
    pub chart: ZiweiChart,
}

impl ZiweiReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ZiweiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.chart;
        write!(f, "{}", self.birth)?;
        writeln!(f, "真太阳时: {}", c.true_solar_time.solar.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(
            f,
            "农历: {}年{}{}月{}日",
            c.lunar.year,
            if c.lunar.is_leap { "闰" } else { "" },
            c.lunar.month,
            c.lunar.day
        )?;
        writeln!(
            f,
            "命宫: {}  身宫: {}  {}",
            c.life_palace.name(),
            c.body_palace.name(),
            c.bureau.name()
        )?;
        for p in &c.palaces {
            let majors: Vec<&str> = p.major.iter().map(|s| s.name()).collect();
            let minors: Vec<&str> = p.minor.iter().map(|s| s.name()).collect();
            writeln!(
                f,
                "  {}: {} | {}",
                p.palace.name(),
                majors.join(" "),
                minors.join(" ")
            )?;
        }
        let limits: Vec<String> = c
            .major_limits
            .periods
            .iter()
            .map(|l| format!("{}-{}{}", l.start_age, l.end_age, l.palace.name()))
            .collect();
        writeln!(f, "大限({}): {}", c.major_limits.direction.name(), limits.join(" "))?;
        writeln!(f, "流年: {}", c.annual_fortune.narrative)
    }
}
