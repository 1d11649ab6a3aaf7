use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::command::Command;
use crate::model::condition::Condition;
use crate::model::country::Country;
use crate::model::effect::Effect;
use crate::model::policy::{Policy, PolicyCategory};
use crate::model::rating::Rating;

/// The fixed set of policy and command templates countries pick from.
///
/// A catalog is built once at startup and passed in wherever it is needed —
/// it is deliberately not global state, so tests can substitute a small
/// catalog of their own. Names are unique across policies and across commands;
/// they are the identity keys the rest of the engine matches on.
///
/// Availability is recomputed on every query by evaluating each template's
/// condition against the country's current state. Nothing here is cached:
/// a country whose ratings shift between two requests sees a different list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    policies: Vec<Policy>,
    commands: Vec<Command>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    policies: Vec<Policy>,
    #[serde(default)]
    commands: Vec<Command>,
}

impl Catalog {
    /// Build a catalog from explicit template lists.
    ///
    /// Catalog data is trusted seed data: duplicate names are a configuration
    /// fault, not a runtime condition, and fail fast.
    pub fn new(policies: Vec<Policy>, commands: Vec<Command>) -> Self {
        assert_unique("policy", policies.iter().map(|p| p.name.as_str()));
        assert_unique("command", commands.iter().map(|c| c.name.as_str()));
        Catalog { policies, commands }
    }

    /// Load a catalog from configuration JSON:
    /// `{"policies": [...], "commands": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Ok(Catalog::new(raw.policies, raw.commands))
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Look up a policy template by name.
    pub fn policy(&self, name: &str) -> Result<&Policy, SimulationError> {
        self.policies
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SimulationError::CatalogLookup {
                name: name.to_string(),
            })
    }

    /// Look up a command template by name.
    pub fn command(&self, name: &str) -> Result<&Command, SimulationError> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| SimulationError::CatalogLookup {
                name: name.to_string(),
            })
    }

    /// Every policy whose condition the country currently meets.
    pub fn policies_for(&self, country: &Country) -> Vec<&Policy> {
        self.policies
            .iter()
            .filter(|p| p.condition.evaluate(country))
            .collect()
    }

    /// Every command whose condition the country currently meets.
    pub fn commands_for(&self, country: &Country) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| c.condition.evaluate(country))
            .collect()
    }

    /// Whether a submitted policy value is bit-for-bit a member of the
    /// country's current availability list.
    ///
    /// Request handlers must call this (or [`Catalog::command_is_available`])
    /// on decoded payloads before acting on them: templates carry effect data,
    /// and a tampered copy with inflated effects would otherwise sail through.
    pub fn policy_is_available(&self, country: &Country, policy: &Policy) -> bool {
        self.policies_for(country).into_iter().any(|p| p == policy)
    }

    /// Whether a submitted command value is bit-for-bit a member of the
    /// country's current availability list. See
    /// [`Catalog::policy_is_available`] for why exact matching matters.
    pub fn command_is_available(&self, country: &Country, command: &Command) -> bool {
        self.commands_for(country).into_iter().any(|c| c == command)
    }

    /// The hand-authored stock catalog.
    pub fn builtin() -> Self {
        Catalog::new(builtin_policies(), builtin_commands())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

fn assert_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        assert!(seen.insert(name), "duplicate {kind} name in catalog: '{name}'");
    }
}

fn builtin_policies() -> Vec<Policy> {
    vec![
        // Reduction targets
        Policy::new(
            "Set emission reduction target",
            vec![Effect::EmissionsTowardsTarget {
                reduction_per_year: 1.0,
                target: 10.0,
            }],
            1,
        )
        .with_description(
            "Sets an emission target (very modest at first). You can make it more stringent by levelling it up.",
        )
        .with_condition(
            Condition::HasActivePolicy {
                name: "Set emission reduction target".to_string(),
            }
            .negated(),
        )
        .with_category(PolicyCategory::EmissionTarget),
        // Wealth
        Policy::new(
            "Subsidise fossil fuels",
            vec![
                Effect::ExtraEmissions { percentage: 1.0 },
                Effect::ExtraGdp { percentage: 1.0 },
            ],
            1,
        )
        .with_condition(Condition::WealthAtMost { rating: Rating::C })
        .with_category(PolicyCategory::Economic),
        Policy::new(
            "Promote eco-tourism",
            vec![
                Effect::ExtraEmissions { percentage: 0.1 },
                Effect::ExtraGdp { percentage: 1.0 },
            ],
            5,
        )
        .with_condition(Condition::EducationAtLeast { rating: Rating::C })
        .with_category(PolicyCategory::Economic),
        Policy::new(
            "Promote high tech industry",
            vec![Effect::ExtraGdp { percentage: 1.0 }],
            5,
        )
        .with_condition(Condition::EducationAtLeast { rating: Rating::A })
        .with_category(PolicyCategory::Economic),
        Policy::new(
            "Accept foreign aid",
            vec![
                Effect::ExtraGdp { percentage: 1.0 },
                Effect::ExtraGini { points: 0.01 },
            ],
            5,
        )
        .with_condition(Condition::WealthAtMost { rating: Rating::E })
        .with_category(PolicyCategory::Economic),
        Policy::new(
            "Increase base interest",
            vec![
                Effect::ExtraGdp { percentage: -1.0 },
                Effect::ExtraGini { points: -2.0 },
            ],
            8,
        )
        .with_description(
            "Have your central bank increase the base interest rate. This tends to decrease income, but also increase equality as it harms those with assets more than others.",
        )
        .with_condition(Condition::WealthAtLeast { rating: Rating::E })
        .with_category(PolicyCategory::Economic),
        Policy::new(
            "Decrease base interest",
            vec![
                Effect::ExtraGdp { percentage: 1.0 },
                Effect::ExtraGini { points: 2.0 },
            ],
            2,
        )
        .with_description(
            "Have your central bank decrease the base interest rate. This tends to increase income, but also increase inequality as it favours those who have assets.",
        )
        .with_category(PolicyCategory::Economic),
        // Education
        Policy::new(
            "Free schools",
            vec![
                Effect::ExtraGdp { percentage: -2.0 },
                Effect::ExtraEdi { percentage: 1.0 },
            ],
            5,
        )
        .with_condition(Condition::BudgetAtLeast { rating: Rating::A })
        .with_category(PolicyCategory::Education),
        Policy::new(
            "Private schools",
            vec![
                Effect::ExtraEdi { percentage: 2.0 },
                Effect::ExtraGini { points: 1.0 },
            ],
            10,
        )
        .with_condition(Condition::And {
            all: vec![
                Condition::EducationAtLeast { rating: Rating::D },
                Condition::EqualityAtMost { rating: Rating::E },
            ],
        })
        .with_category(PolicyCategory::Education),
        Policy::new(
            "Ivy League Schools",
            vec![
                Effect::ExtraEdi { percentage: 5.0 },
                Effect::ExtraGini { points: 3.0 },
            ],
            25,
        )
        .with_condition(Condition::And {
            all: vec![
                Condition::EducationAtLeast { rating: Rating::C },
                Condition::EqualityAtMost { rating: Rating::D },
            ],
        })
        .with_category(PolicyCategory::Education),
        // Equality
        Policy::new(
            "Progressive tax system",
            vec![Effect::ExtraGini { points: -0.1 }],
            25,
        )
        .with_description("The strongest shoulders carry the heaviest burden.")
        .with_condition(Condition::EqualityAtMost { rating: Rating::D })
        .with_category(PolicyCategory::Economic),
        Policy::new(
            "Universal Base Income",
            vec![Effect::ExtraGini { points: -0.5 }],
            10,
        )
        .with_condition(Condition::BudgetAtLeast { rating: Rating::C })
        .with_category(PolicyCategory::Economic),
        // Political points
        Policy::new(
            "Tax cuts",
            vec![
                Effect::FreePoints { points: 1 },
                Effect::ExtraGdp { percentage: -2.0 },
            ],
            1,
        )
        .with_condition(Condition::BudgetAtLeast { rating: Rating::B })
        .with_category(PolicyCategory::Political),
        Policy::new(
            "Enact police state",
            vec![
                Effect::FreePoints { points: 2 },
                Effect::ExtraGdp { percentage: -2.0 },
                Effect::ExtraGini { points: 0.2 },
            ],
            1,
        )
        .with_condition(Condition::BudgetAtMost { rating: Rating::D })
        .with_category(PolicyCategory::Political),
        Policy::new(
            "Propaganda",
            vec![
                Effect::FreePoints { points: 1 },
                Effect::ExtraEdi { percentage: -1.5 },
            ],
            5,
        )
        .with_condition(Condition::EducationAtMost { rating: Rating::C })
        .with_category(PolicyCategory::Political),
        // Emission trade
        Policy::new(
            "Sell emission rights",
            vec![
                Effect::ExtraBudget { points: 0.5 },
                Effect::ExtraGdp { percentage: 2.0 },
                Effect::ExtraEmissions { percentage: 3.0 },
            ],
            3,
        )
        .with_description("This leads to a net increase in emissions that are tallied with your country.")
        .with_condition(Condition::EmissionsPerCapitaAtLeast { rating: Rating::C })
        .with_category(PolicyCategory::EmissionTrade),
        Policy::new(
            "Buy emission rights",
            vec![
                Effect::ExtraBudget { points: -0.5 },
                Effect::ExtraGdp { percentage: -2.0 },
                Effect::ExtraEmissions { percentage: -3.0 },
            ],
            3,
        )
        .with_description("This leads to a net decrease in emissions that are tallied with your country.")
        .with_condition(Condition::And {
            all: vec![
                Condition::BudgetAtLeast { rating: Rating::C },
                Condition::WealthAtLeast { rating: Rating::C },
            ],
        })
        .with_category(PolicyCategory::EmissionTrade),
        // CO2 storage
        Policy::new(
            "Build CO2 storage facility",
            vec![Effect::ExtraEmissions { percentage: -1.0 }],
            10,
        )
        .with_condition(Condition::And {
            all: vec![
                Condition::EducationAtLeast { rating: Rating::A },
                Condition::EmissionsPerCapitaAtLeast { rating: Rating::A },
            ],
        })
        .with_category(PolicyCategory::Co2Storage),
    ]
}

fn builtin_commands() -> Vec<Command> {
    vec![
        Command::new("Example command", "It does nothing!", vec![], 0),
        Command::new(
            "Free points",
            "Free lunch!",
            vec![Effect::FreePoints { points: 10 }],
            0,
        ),
        Command::new("Climate conference", "Better luck next time", vec![], 100),
    ]
}
