//! Deterministic, read-only projections of future state.
//!
//! Forecasts clone their inputs and replay the exact tick logic the live
//! simulation runs, so a forecast to year Y and a real advancement to year Y
//! under the same inputs land on identical state. Nothing here mutates the
//! values passed in.
//!
//! The country and climate projections deliberately simplify in different
//! ways: a country forecast holds the climate constant, and a climate
//! forecast holds emissions constant. Neither accounts for the other's drift;
//! callers compute each independently.

use crate::model::{Country, Earth, SUB_TICKS_PER_YEAR};

/// Project a country year by year until `to_year`, against a constant climate.
///
/// Each element is the state at the *start* of a year, beginning with the
/// current state; the series has `to_year - current_year` entries.
pub fn country_series(country: &Country, earth: &Earth, to_year: i32) -> Vec<Country> {
    assert!(
        to_year >= earth.current_year,
        "cannot forecast into the past ({to_year} < {})",
        earth.current_year
    );
    if to_year == earth.current_year {
        tracing::warn!(to_year, "forecast window is empty");
    }

    let mut series = Vec::new();
    let mut projected = country.clone();
    for _ in earth.current_year..to_year {
        series.push(projected.clone());
        for _ in 0..SUB_TICKS_PER_YEAR {
            projected = projected.tick(earth);
        }
    }
    series
}

/// Project a country's state in the year `to_year`, against a constant
/// climate.
pub fn country_at(country: &Country, earth: &Earth, to_year: i32) -> Country {
    assert!(
        to_year >= earth.current_year,
        "cannot forecast into the past ({to_year} < {})",
        earth.current_year
    );

    let mut projected = country.clone();
    for _ in earth.current_year..to_year {
        for _ in 0..SUB_TICKS_PER_YEAR {
            projected = projected.tick(earth);
        }
    }
    projected
}

/// Project the climate year by year until `to_year`, holding yearly emissions
/// constant.
///
/// Same series convention as [`country_series`]: starts with the current
/// state, one entry per year, `to_year` itself not included.
pub fn earth_series(earth: &Earth, to_year: i32, constant_yearly_emissions: f64) -> Vec<Earth> {
    assert!(
        to_year >= earth.current_year,
        "cannot forecast into the past ({to_year} < {})",
        earth.current_year
    );
    if to_year == earth.current_year {
        tracing::warn!(to_year, "forecast window is empty");
    }

    let mut series = Vec::new();
    let mut projected = earth.clone();
    for _ in earth.current_year..to_year {
        series.push(projected.clone());
        projected = projected.tick(constant_yearly_emissions);
    }
    series
}

/// The expected global temperature in `to_year` under constant yearly
/// emissions.
pub fn earth_temperature_at(earth: &Earth, to_year: i32, constant_yearly_emissions: f64) -> f64 {
    assert!(
        to_year >= earth.current_year,
        "cannot forecast into the past ({to_year} < {})",
        earth.current_year
    );

    let mut projected = earth.clone();
    for _ in earth.current_year..to_year {
        projected = projected.tick(constant_yearly_emissions);
    }
    projected.current_temperature
}
