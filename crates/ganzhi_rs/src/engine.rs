//! The chart engine: configuration, registry and collaborators in one handle.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use ganzhi_config::GanzhiConfig;
use ganzhi_core::{AnalyticEphemeris, Ephemeris};
use ganzhi_search::{BirthInput, ResolvedBirth, SolarTermTable, resolve_birth, solar_term_table};
use ganzhi_time::{
    IanaZoneResolver, LunarCalendar, LunarDate, TableLunarCalendar, TrueSolarTime, ZoneResolver,
    true_solar_time,
};
use tracing::{debug, instrument};

use crate::error::ChartError;
use crate::registry::Registry;
use crate::report::{BaziReport, BirthSummary, ZiweiReport};

/// External services a chart depends on.
#[derive(Clone)]
pub struct Collaborators {
    pub ephemeris: Arc<dyn Ephemeris>,
    pub lunar: Arc<dyn LunarCalendar>,
    pub zones: Arc<dyn ZoneResolver>,
}

impl Default for Collaborators {
    /// Analytic ephemeris, 1900–2100 lunar table, IANA zone database.
    fn default() -> Self {
        Self {
            ephemeris: Arc::new(AnalyticEphemeris::new()),
            lunar: Arc::new(TableLunarCalendar),
            zones: Arc::new(IanaZoneResolver),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Thread-safe chart engine. Share it behind an `Arc` or via [`crate::init`].
#[derive(Debug, Clone)]
pub struct ChartEngine {
    config: GanzhiConfig,
    registry: Registry,
    collaborators: Collaborators,
}

impl ChartEngine {
    /// Engine with the default collaborators and built-in algorithms.
    pub fn new(config: GanzhiConfig) -> Result<Self, ChartError> {
        Self::with_collaborators(config, Collaborators::default())
    }

    pub fn with_collaborators(
        config: GanzhiConfig,
        collaborators: Collaborators,
    ) -> Result<Self, ChartError> {
        config.validate()?;
        let registry = Registry::with_builtin();
        // Default versions must resolve up front, not on the first request.
        registry.bazi(&config.bazi.default_version)?;
        registry.ziwei(&config.ziwei.default_version)?;
        Ok(Self {
            config,
            registry,
            collaborators,
        })
    }

    /// Replace the registry. The configured default versions must be present.
    pub fn with_registry(mut self, registry: Registry) -> Result<Self, ChartError> {
        registry.bazi(&self.config.bazi.default_version)?;
        registry.ziwei(&self.config.ziwei.default_version)?;
        self.registry = registry;
        Ok(self)
    }

    pub fn config(&self) -> &GanzhiConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Resolve a birth, filling a missing location from `[location]`.
    pub fn resolve(&self, input: &BirthInput) -> Result<ResolvedBirth, ChartError> {
        let mut input = input.clone();
        if input.location.is_none() {
            input.location = Some(self.config.location.geo());
        }
        Ok(resolve_birth(&input, self.collaborators.zones.as_ref())?)
    }

    /// BaZi chart with the configured default algorithm.
    pub fn compute_bazi(&self, input: &BirthInput) -> Result<BaziReport, ChartError> {
        self.compute_bazi_with(input, &self.config.bazi.default_version)
    }

    #[instrument(skip_all, fields(version = version, local = %input.local, zone = %input.timezone))]
    pub fn compute_bazi_with(
        &self,
        input: &BirthInput,
        version: &str,
    ) -> Result<BaziReport, ChartError> {
        let algorithm = self.registry.bazi(version)?;
        let birth = self.resolve(input)?;
        let chart = algorithm(
            &birth,
            self.collaborators.ephemeris.as_ref(),
            self.collaborators.lunar.as_ref(),
            &self.config.bazi_config(),
        )?;
        debug!(pillars = %chart.pillars, "bazi report ready");
        Ok(BaziReport {
            algorithm_version: version.to_string(),
            birth: BirthSummary::from(&birth),
            chart,
        })
    }

    /// ZiWei chart with the configured default algorithm.
    pub fn compute_ziwei(
        &self,
        input: &BirthInput,
        query_year: Option<i32>,
    ) -> Result<ZiweiReport, ChartError> {
        self.compute_ziwei_with(input, query_year, &self.config.ziwei.default_version)
    }

    #[instrument(skip_all, fields(version = version, local = %input.local, zone = %input.timezone))]
    pub fn compute_ziwei_with(
        &self,
        input: &BirthInput,
        query_year: Option<i32>,
        version: &str,
    ) -> Result<ZiweiReport, ChartError> {
        let algorithm = self.registry.ziwei(version)?;
        let birth = self.resolve(input)?;
        let chart = algorithm(
            &birth,
            self.collaborators.ephemeris.as_ref(),
            self.collaborators.lunar.as_ref(),
            query_year,
        )?;
        debug!(life = chart.life_palace.name(), "ziwei report ready");
        Ok(ZiweiReport {
            algorithm_version: version.to_string(),
            birth: BirthSummary::from(&birth),
            chart,
        })
    }

    /// The 24 solar terms of `year`.
    pub fn solar_terms(&self, year: i32) -> SolarTermTable {
        solar_term_table(
            self.collaborators.ephemeris.as_ref(),
            year,
            &self.config.solar_terms.to_search_config(),
        )
    }

    /// True solar time of a birth.
    pub fn true_solar_time(&self, input: &BirthInput) -> Result<TrueSolarTime, ChartError> {
        let birth = self.resolve(input)?;
        true_solar_time(birth.utc, birth.offset_seconds, birth.location().longitude_deg)
            .map_err(|e| ChartError::InvalidInput(e.to_string()))
    }

    /// Lunar date of a Gregorian date.
    pub fn lunar_date(&self, date: NaiveDate) -> Result<LunarDate, ChartError> {
        self.collaborators
            .lunar
            .to_lunar(date.year(), date.month(), date.day())
            .map_err(|e| ChartError::LunarConversionFailed(e.to_string()))
    }
}
