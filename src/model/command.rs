use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::country::Country;
use super::effect::Effect;

/// A named, one-shot bundle of effects a country can buy with country points.
///
/// Unlike a [`Policy`](super::policy::Policy), a command is never stored on a
/// country: it applies once, in full, and is discarded. The name is the
/// identity key and must be unique within a catalog.
///
/// Stored commands from before `cost` and `condition` existed decode as free
/// and ungated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub effects: Vec<Effect>,
    /// Overrides the stock "applied" message when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_apply_message: Option<String>,
    /// Cost in country points. Zero is a free command.
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub condition: Condition,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        effects: Vec<Effect>,
        cost: i64,
    ) -> Self {
        Command {
            name: name.into(),
            description: description.into(),
            effects,
            custom_apply_message: None,
            cost,
            condition: Condition::Empty,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_apply_message(mut self, message: impl Into<String>) -> Self {
        self.custom_apply_message = Some(message.into());
        self
    }

    /// Apply every effect in list order at level 1, returning the updated
    /// country and the message to surface to the player.
    ///
    /// Cost checking is the country's job (see
    /// [`Country::execute_command`](super::country::Country::execute_command));
    /// this just performs the state change.
    pub fn apply(&self, country: &Country) -> (Country, String) {
        let mut next = country.clone();
        for effect in &self.effects {
            next = effect.apply(&next, 1);
        }

        let message = self
            .custom_apply_message
            .clone()
            .unwrap_or_else(|| format!("{} successfully applied.", self.name));
        (next, message)
    }

    /// A player-facing summary of the command's effects.
    pub fn effect_description(&self) -> String {
        if self.effects.is_empty() {
            return "No effect".to_string();
        }
        self.effects
            .iter()
            .map(|e| e.describe(1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
