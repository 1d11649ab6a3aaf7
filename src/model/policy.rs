use serde::{Deserialize, Serialize};
use std::fmt;

use super::condition::Condition;
use super::country::Country;
use super::effect::Effect;

/// A named, leveled, standing bundle of effects a country can enact.
///
/// The name acts as the identity key: it must be unique within a catalog and
/// within a country's active set. Enactment copies the policy by value, so the
/// active copy's `level` evolves independently of the catalog template.
///
/// Stored policies from before `condition` and `category` existed decode with
/// `Condition::Empty` and `PolicyCategory::Miscellaneous`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Current level. Higher levels deepen every effect.
    #[serde(default = "default_level")]
    pub level: u32,
    pub effects: Vec<Effect>,
    /// Cost in country points to enact at level 1.
    pub base_cost: i64,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub category: PolicyCategory,
}

fn default_level() -> u32 {
    1
}

impl Policy {
    /// A level-1, ungated, miscellaneous policy. The description defaults to
    /// the name; use the `with_*` builders to fill in the rest.
    pub fn new(name: impl Into<String>, effects: Vec<Effect>, base_cost: i64) -> Self {
        let name = name.into();
        Policy {
            description: name.clone(),
            name,
            level: 1,
            effects,
            base_cost,
            condition: Condition::Empty,
            category: PolicyCategory::Miscellaneous,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_category(mut self, category: PolicyCategory) -> Self {
        self.category = category;
        self
    }

    /// Cost in country points to raise this policy to the next level.
    ///
    /// Grows with the factorial of the current level, which keeps unlimited
    /// leveling out of reach.
    pub fn upgrade_cost(&self) -> i64 {
        self.base_cost * factorial(self.level)
    }

    /// Apply every effect of this policy, in list order, at its current level.
    pub fn apply_effects(&self, country: &Country) -> Country {
        let mut next = country.clone();
        for effect in &self.effects {
            next = effect.apply(&next, self.level);
        }
        next
    }

    /// A player-facing summary of the policy's effects at its current level.
    pub fn effect_description(&self) -> String {
        if self.effects.is_empty() {
            return "No effect".to_string();
        }
        self.effects
            .iter()
            .map(|e| e.describe(self.level))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn factorial(n: u32) -> i64 {
    (1..=i64::from(n)).product()
}

/// Groups policies for concurrency capping.
///
/// A country can only hold `policy_limit()` active policies of a capped
/// category at once; uncapped categories are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCategory {
    EmissionTarget,
    Co2Storage,
    #[default]
    Miscellaneous,
    Economic,
    Education,
    Political,
    EmissionTrade,
}

impl PolicyCategory {
    /// Maximum simultaneous active policies of this category, if capped.
    pub fn policy_limit(&self) -> Option<usize> {
        match self {
            PolicyCategory::EmissionTarget
            | PolicyCategory::Economic
            | PolicyCategory::Education
            | PolicyCategory::Political
            | PolicyCategory::EmissionTrade => Some(1),
            PolicyCategory::Co2Storage => Some(3),
            PolicyCategory::Miscellaneous => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyCategory::EmissionTarget => "Emission Target",
            PolicyCategory::Co2Storage => "CO2 Storage",
            PolicyCategory::Miscellaneous => "Miscellaneous",
            PolicyCategory::Economic => "Economic",
            PolicyCategory::Education => "Education",
            PolicyCategory::Political => "Political",
            PolicyCategory::EmissionTrade => "Emission Trade",
        }
    }
}

impl fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
