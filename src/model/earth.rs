use serde::{Deserialize, Serialize};

use super::effect::Effect;

/// The shared planetary climate state every country lives on.
///
/// Follows UCAR's Very Simple Climate Model: yearly carbon emissions move the
/// atmospheric concentration, and the temperature responds logarithmically to
/// the concentration ratio (a doubling adds 3 °C). The whole model is a pure
/// function of the emission sequence since the base year — replaying the same
/// inputs from the base state always reproduces the same climate, which is
/// what makes forecasting trustworthy.
///
/// Not modeled: geographic differences in warming and damage, sea level rise,
/// and non-CO2 greenhouse gases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earth {
    /// The simulated year. Advances by one per tick.
    pub current_year: i32,
    /// Average global temperature in °C.
    pub current_temperature: f64,
    /// Atmospheric carbon concentration in ppm.
    pub current_concentration: f64,
}

impl Earth {
    /// Start year of the simulation; the initial values below belong to it.
    pub const BASE_YEAR: i32 = 2015;
    /// Atmospheric carbon concentration in the base year (ppm).
    pub const BASE_CONCENTRATION: f64 = 399.4;
    /// Average global temperature in the base year (°C).
    pub const BASE_TEMPERATURE: f64 = 14.65;
    /// Global yearly emissions in the base year (gigatonnes carbon).
    pub const BASE_GLOBAL_EMISSIONS: f64 = 10.34;

    /// Concentration change for one year of emissions, in ppm. Linearized
    /// from a 5-year-averaged sensitivity.
    fn concentration_delta(yearly_emission: f64) -> f64 {
        (1.1612 * yearly_emission - 1.99999) / 5.0
    }

    /// Temperature change for a concentration change: each doubling of
    /// atmospheric carbon adds 3 °C.
    fn temperature_delta(new_concentration: f64, old_concentration: f64) -> f64 {
        let ratio = new_concentration / old_concentration;
        assert!(
            ratio > 0.0,
            "concentration ratio must stay positive (got {ratio})"
        );
        3.0 * ratio.log2()
    }

    /// Advance the climate by one year of the given global emissions
    /// (gigatonnes carbon), returning the new state.
    #[must_use]
    pub fn tick(&self, yearly_emission: f64) -> Earth {
        let old_concentration = self.current_concentration;
        let new_concentration = old_concentration + Self::concentration_delta(yearly_emission);

        Earth {
            current_year: self.current_year + 1,
            current_concentration: new_concentration,
            current_temperature: self.current_temperature
                + Self::temperature_delta(new_concentration, old_concentration),
        }
    }

    /// Warming since the base year, in °C.
    pub fn temperature_anomaly(&self) -> f64 {
        self.current_temperature - Self::BASE_TEMPERATURE
    }

    /// The adverse effects every country suffers at the current warming level.
    ///
    /// Bands escalate with the anomaly: GDP damage is always present and
    /// worsens, inequality and budget damage join above +1.0 °C. Below the
    /// base temperature there are no effects.
    pub fn current_effects_of_temperature_change(&self) -> Vec<Effect> {
        let anomaly = self.temperature_anomaly();

        if anomaly < 0.0 {
            vec![]
        } else if anomaly < 0.2 {
            vec![Effect::ExtraGdp { percentage: -0.1 }]
        } else if anomaly < 0.4 {
            vec![Effect::ExtraGdp { percentage: -0.5 }]
        } else if anomaly < 1.0 {
            vec![Effect::ExtraGdp { percentage: -1.0 }]
        } else if anomaly < 1.5 {
            vec![
                Effect::ExtraGdp { percentage: -1.5 },
                Effect::ExtraGini { points: 0.02 },
            ]
        } else if anomaly < 1.75 {
            vec![
                Effect::ExtraGdp { percentage: -2.0 },
                Effect::ExtraGini { points: 0.02 },
                Effect::ExtraBudget { points: -0.01 },
            ]
        } else if anomaly < 2.0 {
            vec![
                Effect::ExtraGdp { percentage: -2.5 },
                Effect::ExtraGini { points: 0.05 },
                Effect::ExtraBudget { points: -0.02 },
            ]
        } else if anomaly < 3.0 {
            vec![
                Effect::ExtraGdp { percentage: -5.0 },
                Effect::ExtraGini { points: 0.1 },
                Effect::ExtraBudget { points: -0.02 },
            ]
        } else if anomaly < 5.0 {
            vec![
                Effect::ExtraGdp { percentage: -10.0 },
                Effect::ExtraGini { points: 0.15 },
                Effect::ExtraBudget { points: -0.04 },
            ]
        } else {
            // Past +5 °C the damage keeps scaling with the anomaly itself.
            vec![
                Effect::ExtraGdp {
                    percentage: -anomaly * 0.25,
                },
                Effect::ExtraGini {
                    points: anomaly * 0.075,
                },
                Effect::ExtraBudget {
                    points: -anomaly * 0.01,
                },
            ]
        }
    }

    /// A player-facing summary of the current warming effects.
    pub fn effect_description(&self) -> String {
        let effects = self.current_effects_of_temperature_change();
        if effects.is_empty() {
            return "No effect".to_string();
        }
        effects
            .iter()
            .map(|e| e.describe(1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One-line state summary for logs.
    pub fn debug_vitals(&self) -> String {
        format!(
            "year: {}, concentration: {} ppm, temperature: {} °C",
            self.current_year, self.current_concentration, self.current_temperature
        )
    }
}

impl Default for Earth {
    /// The base-year climate.
    fn default() -> Self {
        Earth {
            current_year: Self::BASE_YEAR,
            current_temperature: Self::BASE_TEMPERATURE,
            current_concentration: Self::BASE_CONCENTRATION,
        }
    }
}
