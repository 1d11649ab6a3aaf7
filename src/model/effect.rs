use serde::{Deserialize, Serialize};

use super::country::Country;

/// How many sub-ticks make up one simulated year.
///
/// Yearly percentage rates are divided by this so a policy's impact accrues
/// smoothly across the year instead of jumping once. Forecasts replay the same
/// granularity, which keeps projected curves smooth too.
pub const SUB_TICKS_PER_YEAR: u32 = 24;

/// An atomic, level-scaled rule that changes one or more country indicators.
///
/// Effects never mutate in place: [`Effect::apply`] returns an updated copy of
/// the country. Percentage-rate variants are expressed per year and scaled
/// down to a per-sub-tick contribution; `FreePoints` grants whole points on
/// every application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Grants extra country points each sub-tick.
    FreePoints { points: i64 },

    /// Changes yearly emissions at a rate of `percentage`% of the base-year
    /// value per year. Negative percentages scrub emissions.
    ExtraEmissions { percentage: f64 },

    /// Changes GDP at a rate of `percentage`% of the base-year value per year.
    ExtraGdp { percentage: f64 },

    /// Shifts the Gini index by `points` per year. Positive values increase
    /// inequality.
    ExtraGini { points: f64 },

    /// Changes the education development index by `percentage`% of its current
    /// value per year.
    ExtraEdi { percentage: f64 },

    /// Shifts the budget surplus by `points` (% GDP) per year.
    ExtraBudget { points: f64 },

    /// Walks yearly emissions down towards `target`% below the base-year
    /// value, reducing by `reduction_per_year`% of base per year.
    ///
    /// Asymmetric on purpose: once emissions are at or below the target floor
    /// this is a no-op. It never pushes emissions below the floor and never
    /// raises them if some other effect has dropped them further.
    EmissionsTowardsTarget { reduction_per_year: f64, target: f64 },
}

impl Effect {
    /// Apply this effect to a country at the given policy level, returning the
    /// updated copy. Level 1 is the unscaled magnitude.
    pub fn apply(&self, country: &Country, level: u32) -> Country {
        let mut next = country.clone();
        let scale = f64::from(level);
        let sub_ticks = f64::from(SUB_TICKS_PER_YEAR);

        match self {
            Effect::FreePoints { points } => {
                next.country_points += points * i64::from(level);
            }
            Effect::ExtraEmissions { percentage } => {
                next.yearly_emissions +=
                    next.base_yearly_emissions * 0.01 * percentage * scale / sub_ticks;
            }
            Effect::ExtraGdp { percentage } => {
                next.gdp += next.base_gdp * 0.01 * percentage * scale / sub_ticks;
            }
            Effect::ExtraGini { points } => {
                next.gini_rating += points * scale / sub_ticks;
            }
            Effect::ExtraEdi { percentage } => {
                next.education_development_index +=
                    percentage * 0.01 * next.education_development_index * scale / sub_ticks;
            }
            Effect::ExtraBudget { points } => {
                next.budget_surplus += points * scale / sub_ticks;
            }
            Effect::EmissionsTowardsTarget {
                reduction_per_year,
                target,
            } => {
                let floor = next.base_yearly_emissions * (1.0 - 0.01 * target * scale);
                if next.yearly_emissions > floor {
                    let delta =
                        next.base_yearly_emissions * 0.01 * reduction_per_year * scale / sub_ticks;
                    next.yearly_emissions -= delta;
                }
            }
        }

        next
    }

    /// A player-facing summary of what this effect does at the given level.
    pub fn describe(&self, level: u32) -> String {
        let scale = f64::from(level);
        match self {
            Effect::FreePoints { points } => {
                format!("Extra country points: {}", points * i64::from(level))
            }
            Effect::ExtraEmissions { percentage } => format!(
                "{} emissions at a rate of {}% of the base-year value per year.",
                increases(percentage * scale),
                percentage * scale
            ),
            Effect::ExtraGdp { percentage } => format!(
                "{} GDP at a rate of {}% of the base-year value per year.",
                increases(percentage * scale),
                percentage * scale
            ),
            Effect::ExtraGini { points } => format!(
                "{} inequality at a rate of {} points per year.",
                increases(points * scale),
                points * scale
            ),
            Effect::ExtraEdi { percentage } => format!(
                "{} the education development index at a rate of {}% per year.",
                increases(percentage * scale),
                percentage * scale
            ),
            Effect::ExtraBudget { points } => format!(
                "{} the budget surplus by {} points per year.",
                increases(points * scale),
                points * scale
            ),
            Effect::EmissionsTowardsTarget {
                reduction_per_year,
                target,
            } => format!(
                "Lowers emissions towards {}% below the base-year value by {}% per year.",
                target * scale,
                reduction_per_year * scale
            ),
        }
    }
}

fn increases(amount: f64) -> &'static str {
    if amount > 0.0 { "Increases" } else { "Decreases" }
}
