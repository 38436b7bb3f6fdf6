//! Solar-term instants from the four seasonal anchors.
//!
//! Each term is estimated from its nearest equinox/solstice at a fixed
//! 15-day multiple, then (optionally) refined by bisection on the Sun's
//! apparent longitude f(t) = normalize(λ☉(t) − target) inside a bracket
//! around the estimate.
//!
//! Collaborator failures never propagate: an anchor that cannot be obtained
//! makes its terms fall back to the 15th of the nominal month, and a failed
//! refinement keeps the estimate. Both are logged.

use ganzhi_base::{ALL_SOLAR_TERMS, SolarTerm, normalize_pm180};
use ganzhi_core::{Body, Ephemeris, EphemerisError, Season};
use ganzhi_time::calendar_to_jd;
use tracing::{debug, warn};

use crate::solar_term_types::{SolarTermConfig, SolarTermEntry, SolarTermTable, TermSource};

/// Anchor of each term: (season, year offset, days from the anchor).
const ANCHORS: [(Season, i32, f64); 24] = [
    (Season::DecemberSolstice, -1, 45.0),
    (Season::MarchEquinox, 0, -30.0),
    (Season::MarchEquinox, 0, -15.0),
    (Season::MarchEquinox, 0, 0.0),
    (Season::MarchEquinox, 0, 15.0),
    (Season::MarchEquinox, 0, 30.0),
    (Season::MarchEquinox, 0, 45.0),
    (Season::JuneSolstice, 0, -30.0),
    (Season::JuneSolstice, 0, -15.0),
    (Season::JuneSolstice, 0, 0.0),
    (Season::JuneSolstice, 0, 15.0),
    (Season::JuneSolstice, 0, 30.0),
    (Season::JuneSolstice, 0, 45.0),
    (Season::SeptemberEquinox, 0, -30.0),
    (Season::SeptemberEquinox, 0, -15.0),
    (Season::SeptemberEquinox, 0, 0.0),
    (Season::SeptemberEquinox, 0, 15.0),
    (Season::SeptemberEquinox, 0, 30.0),
    (Season::SeptemberEquinox, 0, 45.0),
    (Season::DecemberSolstice, 0, -30.0),
    (Season::DecemberSolstice, 0, -15.0),
    (Season::DecemberSolstice, 0, 0.0),
    (Season::DecemberSolstice, -1, 15.0),
    (Season::DecemberSolstice, -1, 30.0),
];

/// Anchor season, year offset and day offset for `term`.
pub const fn anchor_of(term: SolarTerm) -> (Season, i32, f64) {
    ANCHORS[term.index() as usize]
}

/// Memoises anchor lookups within one search.
struct AnchorCache<'a> {
    eph: &'a dyn Ephemeris,
    seen: Vec<(Season, i32, Option<f64>)>,
}

impl<'a> AnchorCache<'a> {
    fn new(eph: &'a dyn Ephemeris) -> Self {
        Self {
            eph,
            seen: Vec::with_capacity(5),
        }
    }

    fn get(&mut self, season: Season, year: i32) -> Option<f64> {
        if let Some(&(_, _, jd)) = self.seen.iter().find(|(s, y, _)| *s == season && *y == year) {
            return jd;
        }
        let jd = match self.eph.solstice_or_equinox(year, season) {
            Ok(jd) => Some(jd),
            Err(e) => {
                warn!(year, season = ?season, error = %e, "season anchor unavailable");
                None
            }
        };
        self.seen.push((season, year, jd));
        jd
    }
}

/// Bisection on the Sun's longitude inside `estimate ± window`.
///
/// `Ok(None)` when the bracket does not contain the crossing.
fn refine_term(
    eph: &dyn Ephemeris,
    term: SolarTerm,
    estimate: f64,
    config: &SolarTermConfig,
) -> Result<Option<f64>, EphemerisError> {
    let target = term.longitude_deg();
    let f = |jd: f64| {
        eph.planet_longitude(jd, Body::Sun)
            .map(|lon| normalize_pm180(lon - target))
    };

    let mut t_a = estimate - config.refine_window_days;
    let mut t_b = estimate + config.refine_window_days;
    let mut f_a = f(t_a)?;
    let f_b = f(t_b)?;
    if f_a > 0.0 || f_b < 0.0 {
        return Ok(None);
    }

    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if t_b - t_a < config.convergence_days {
            break;
        }
    }
    Ok(Some(0.5 * (t_a + t_b)))
}

fn fallback_entry(term: SolarTerm, year: i32) -> SolarTermEntry {
    SolarTermEntry {
        term,
        jd_ut: calendar_to_jd(year, term.nominal_month(), 15.0),
        source: TermSource::Fallback,
    }
}

fn term_entry(
    cache: &mut AnchorCache<'_>,
    year: i32,
    term: SolarTerm,
    config: &SolarTermConfig,
    refine: bool,
) -> SolarTermEntry {
    let (season, year_offset, days) = anchor_of(term);
    let Some(anchor) = cache.get(season, year + year_offset) else {
        warn!(year, term = term.name(), "solar term falls back to mid-month");
        return fallback_entry(term, year);
    };
    let estimate = anchor + days;
    if !refine || days == 0.0 {
        return SolarTermEntry {
            term,
            jd_ut: estimate,
            source: if days == 0.0 {
                TermSource::Ephemeris
            } else {
                TermSource::Estimated
            },
        };
    }

    match refine_term(cache.eph, term, estimate, config) {
        Ok(Some(jd)) => SolarTermEntry {
            term,
            jd_ut: jd,
            source: TermSource::Ephemeris,
        },
        Ok(None) => {
            warn!(year, term = term.name(), "refinement bracket missed the crossing");
            SolarTermEntry {
                term,
                jd_ut: estimate,
                source: TermSource::Estimated,
            }
        }
        Err(e) => {
            warn!(year, term = term.name(), error = %e, "solar longitude unavailable");
            SolarTermEntry {
                term,
                jd_ut: estimate,
                source: TermSource::Estimated,
            }
        }
    }
}

fn effective_refine(config: &SolarTermConfig) -> bool {
    match config.validate() {
        Ok(()) => config.refine,
        Err(msg) => {
            warn!(reason = msg, "invalid solar-term config, refinement disabled");
            false
        }
    }
}

/// All 24 terms of calendar year `year`.
pub fn solar_term_table(
    eph: &dyn Ephemeris,
    year: i32,
    config: &SolarTermConfig,
) -> SolarTermTable {
    let refine = effective_refine(config);
    let mut cache = AnchorCache::new(eph);
    let entries = ALL_SOLAR_TERMS
        .iter()
        .map(|&term| term_entry(&mut cache, year, term, config, refine))
        .collect();
    debug!(year, refine, "solar term table computed");
    SolarTermTable { year, entries }
}

/// A single term of calendar year `year`.
pub fn solar_term(
    eph: &dyn Ephemeris,
    year: i32,
    term: SolarTerm,
    config: &SolarTermConfig,
) -> SolarTermEntry {
    let refine = effective_refine(config);
    term_entry(&mut AnchorCache::new(eph), year, term, config, refine)
}

/// 立春 of `year`.
pub fn start_of_spring(
    eph: &dyn Ephemeris,
    year: i32,
    config: &SolarTermConfig,
) -> SolarTermEntry {
    solar_term(eph, year, SolarTerm::StartOfSpring, config)
}

/// Node terms of every table, sorted by time.
pub fn node_terms_of(tables: &[SolarTermTable]) -> Vec<SolarTermEntry> {
    let mut nodes: Vec<SolarTermEntry> = tables.iter().flat_map(|t| t.nodes().copied()).collect();
    nodes.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
    nodes
}

/// Node terms of years `year − 1`, `year` and `year + 1`, sorted by time.
pub fn node_terms_around(
    eph: &dyn Ephemeris,
    year: i32,
    config: &SolarTermConfig,
) -> Vec<SolarTermEntry> {
    let tables: Vec<SolarTermTable> = (year - 1..=year + 1)
        .map(|y| solar_term_table(eph, y, config))
        .collect();
    node_terms_of(&tables)
}
