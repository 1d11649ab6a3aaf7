use serde::{Deserialize, Serialize};

use super::command::Command;
use super::earth::Earth;
use super::policy::Policy;
use super::rating::Rating;
use crate::catalog::Catalog;

/// The result of a player operation on a country.
///
/// Rule violations are ordinary outcomes, not errors: `accepted` is false, the
/// returned `country` is the input state unchanged, and `message` says why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub accepted: bool,
    pub country: Country,
    pub message: String,
}

impl ActionOutcome {
    fn accepted(country: Country, message: String) -> Self {
        ActionOutcome {
            accepted: true,
            country,
            message,
        }
    }

    fn rejected(country: &Country, message: String) -> Self {
        ActionOutcome {
            accepted: false,
            country: country.clone(),
            message,
        }
    }
}

/// One simulated national economy.
///
/// Countries impact the shared [`Earth`] through their yearly carbon
/// emissions, and the earth pushes back through warming damage. Players steer
/// a country by enacting standing policies and firing one-shot commands, both
/// paid for in country points (one point accrues per tick).
///
/// All mutating operations return a new value; a `Country` in hand is never
/// changed behind your back. `base_gdp` and `base_yearly_emissions` are fixed
/// normalization anchors — current `gdp` and `yearly_emissions` drift from
/// them only through effect application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Country name, as per ISO.
    pub name: String,
    /// ISO 2-letter country code.
    pub country_code: String,
    /// Yearly emissions in the base year (gigatonnes carbon).
    pub base_yearly_emissions: f64,
    /// Current yearly emissions (gigatonnes carbon).
    pub yearly_emissions: f64,
    /// GDP in the base year (thousands of US$).
    pub base_gdp: f64,
    /// Current GDP (thousands of US$).
    pub gdp: f64,
    pub population: u64,
    /// Standing policies, in enactment order. Order matters: effects apply in
    /// this order every tick.
    #[serde(default)]
    pub active_policies: Vec<Policy>,
    /// Spendable currency for enacting and upgrading. Grows by one per tick.
    #[serde(default = "starting_points")]
    pub country_points: i64,
    /// Budget surplus (positive) or deficit (negative) in % GDP.
    pub budget_surplus: f64,
    /// Gini index in `0..=100`; higher means more inequality.
    pub gini_rating: f64,
    /// Education Development Index in `0..=1`; higher is better.
    pub education_development_index: f64,
}

fn starting_points() -> i64 {
    1
}

impl Country {
    /// Create a country at its base-year state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        base_yearly_emissions: f64,
        base_gdp: f64,
        population: u64,
        budget_surplus: f64,
        gini_rating: f64,
        education_development_index: f64,
    ) -> Self {
        Country {
            name: name.into(),
            country_code: country_code.into(),
            base_yearly_emissions,
            yearly_emissions: base_yearly_emissions,
            base_gdp,
            gdp: base_gdp,
            population,
            active_policies: Vec::new(),
            country_points: starting_points(),
            budget_surplus,
            gini_rating,
            education_development_index,
        }
    }

    // -- Derived ratings --

    /// Daily per-capita wealth in US$ (GDP is stored in thousands, yearly).
    fn wealth_per_capita(&self) -> f64 {
        assert!(self.population > 0, "population must be positive");
        self.gdp * 1000.0 / self.population as f64 / 365.0
    }

    /// Yearly emissions per capita in tonnes of carbon.
    fn emissions_per_capita(&self) -> f64 {
        assert!(self.population > 0, "population must be positive");
        self.yearly_emissions * 1_000_000_000.0 / self.population as f64
    }

    pub fn wealth_rating(&self) -> Rating {
        Rating::for_wealth_per_capita(self.wealth_per_capita())
    }

    pub fn budget_rating(&self) -> Rating {
        Rating::for_budget_surplus(self.budget_surplus)
    }

    pub fn equality_rating(&self) -> Rating {
        Rating::for_equality(self.gini_rating)
    }

    pub fn education_rating(&self) -> Rating {
        Rating::for_education(self.education_development_index)
    }

    pub fn emissions_rating(&self) -> Rating {
        Rating::for_emissions_per_capita(self.emissions_per_capita())
    }

    // -- Tick --

    /// Advance the country by one sub-tick, returning the new state.
    ///
    /// In order: one country point accrues, then the earth's current warming
    /// effects apply, then every active policy applies in enactment order at
    /// its own level. Climate damage always lands before policy mitigation
    /// within the same tick.
    #[must_use]
    pub fn tick(&self, earth: &Earth) -> Country {
        let mut next = self.clone();
        next.country_points += 1;

        for effect in earth.current_effects_of_temperature_change() {
            next = effect.apply(&next, 1);
        }

        let policies = next.active_policies.clone();
        for policy in &policies {
            next = policy.apply_effects(&next);
        }

        next
    }

    /// How many country points one tick currently yields (the base point plus
    /// whatever active policies grant), measured against a base-year earth.
    pub fn points_per_tick(&self) -> i64 {
        self.tick(&Earth::default()).country_points - self.country_points
    }

    // -- Policies --

    /// Catalog policies whose conditions this country currently meets,
    /// including ones already enacted.
    pub fn available_policies<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Policy> {
        catalog.policies_for(self)
    }

    /// Catalog policies this country could enact right now: available and not
    /// already active.
    pub fn enactable_policies<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Policy> {
        catalog
            .policies_for(self)
            .into_iter()
            .filter(|policy| !self.has_active_policy(&policy.name))
            .collect()
    }

    fn has_active_policy(&self, name: &str) -> bool {
        self.active_policies.iter().any(|p| p.name == name)
    }

    /// Enact a policy: deduct its base cost and append a by-value copy to the
    /// active list.
    ///
    /// Rejected when points are short or the policy's category is already at
    /// its concurrency cap.
    pub fn enact_policy(&self, policy: &Policy) -> ActionOutcome {
        if self.country_points < policy.base_cost {
            return ActionOutcome::rejected(
                self,
                format!("Not enough country points to enact policy '{}'.", policy.name),
            );
        }

        if let Some(limit) = policy.category.policy_limit() {
            let in_category = self
                .active_policies
                .iter()
                .filter(|p| p.category == policy.category)
                .count();
            if in_category >= limit {
                return ActionOutcome::rejected(
                    self,
                    format!(
                        "You already have the maximum ({limit}) number of policies in the {} category active.",
                        policy.category
                    ),
                );
            }
        }

        let mut next = self.clone();
        next.country_points -= policy.base_cost;
        next.active_policies.push(policy.clone());
        tracing::debug!(country = %self.country_code, policy = %policy.name, "policy enacted");

        ActionOutcome::accepted(
            next,
            format!("Successfully enacted policy '{}'", policy.name),
        )
    }

    /// Revoke an active policy by name. Revocation is the only way to stop a
    /// policy's effects — conditions are not rechecked after enactment.
    pub fn revoke_policy(&self, name: &str) -> ActionOutcome {
        let Some(index) = self.active_policies.iter().position(|p| p.name == name) else {
            return ActionOutcome::rejected(self, format!("Policy '{name}' is not enacted."));
        };

        let mut next = self.clone();
        next.active_policies.remove(index);
        tracing::debug!(country = %self.country_code, policy = name, "policy revoked");

        ActionOutcome::accepted(next, format!("Successfully revoked policy '{name}'"))
    }

    /// Raise an active policy to its next level, paying the upgrade cost
    /// (which grows factorially with the current level).
    pub fn level_up_policy(&self, name: &str) -> ActionOutcome {
        let Some(index) = self.active_policies.iter().position(|p| p.name == name) else {
            return ActionOutcome::rejected(self, format!("Policy '{name}' is not enacted."));
        };

        let upgrade_cost = self.active_policies[index].upgrade_cost();
        if self.country_points < upgrade_cost {
            return ActionOutcome::rejected(self, format!("Not enough points to upgrade '{name}'."));
        }

        let mut next = self.clone();
        next.country_points -= upgrade_cost;
        next.active_policies[index].level += 1;

        ActionOutcome::accepted(next, format!("Successfully upgraded policy '{name}'"))
    }

    // -- Commands --

    /// Catalog commands whose conditions this country currently meets.
    ///
    /// Callers handling untrusted input must verify a submitted command is an
    /// exact member of this list before executing it (see
    /// [`Catalog::command_is_available`]); commands carry effect data that
    /// cannot be trusted from outside.
    pub fn available_commands<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Command> {
        catalog.commands_for(self)
    }

    /// Execute a one-shot command: apply its effects in list order and deduct
    /// its cost. Rejected when points are short.
    pub fn execute_command(&self, command: &Command) -> ActionOutcome {
        if self.country_points < command.cost {
            return ActionOutcome::rejected(
                self,
                format!("Not enough points to execute command '{}'.", command.name),
            );
        }

        let (mut next, message) = command.apply(self);
        next.country_points -= command.cost;

        ActionOutcome::accepted(next, message)
    }
}
