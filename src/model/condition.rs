use serde::{Deserialize, Serialize};

use super::country::Country;
use super::rating::Rating;

/// A boolean expression over a country's derived ratings and active policies.
///
/// Leaves compare one rating against a threshold or test policy membership;
/// `And`/`Or`/`Not` compose them into larger expressions. Evaluation is a pure
/// function of the country's current state — conditions cannot observe time or
/// randomness, so the same expression against the same country always answers
/// the same way.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// Always true. The default gate for catalog entries without requirements.
    #[default]
    Empty,

    /// True if every child is true. An empty list is true.
    And { all: Vec<Condition> },

    /// True if at least one child is true. An empty list is false.
    Or { any: Vec<Condition> },

    /// Logical inverse of the inner condition.
    Not { inner: Box<Condition> },

    /// Wealth-per-capita rating is at least `rating`.
    WealthAtLeast { rating: Rating },

    /// Wealth-per-capita rating is at most `rating`.
    WealthAtMost { rating: Rating },

    /// Education rating is at least `rating`.
    EducationAtLeast { rating: Rating },

    /// Education rating is at most `rating`.
    EducationAtMost { rating: Rating },

    /// Emissions-per-capita rating is at least `rating`.
    EmissionsPerCapitaAtLeast { rating: Rating },

    /// Budget rating is at least `rating`.
    BudgetAtLeast { rating: Rating },

    /// Budget rating is at most `rating`.
    BudgetAtMost { rating: Rating },

    /// Equality rating is at most `rating`.
    EqualityAtMost { rating: Rating },

    /// The country currently has a policy with this name active.
    HasActivePolicy { name: String },
}

impl Condition {
    /// Evaluate the expression against a country's current state.
    pub fn evaluate(&self, country: &Country) -> bool {
        match self {
            Condition::Empty => true,
            Condition::And { all } => all.iter().all(|c| c.evaluate(country)),
            Condition::Or { any } => any.iter().any(|c| c.evaluate(country)),
            Condition::Not { inner } => !inner.evaluate(country),
            Condition::WealthAtLeast { rating } => country.wealth_rating() >= *rating,
            Condition::WealthAtMost { rating } => country.wealth_rating() <= *rating,
            Condition::EducationAtLeast { rating } => country.education_rating() >= *rating,
            Condition::EducationAtMost { rating } => country.education_rating() <= *rating,
            Condition::EmissionsPerCapitaAtLeast { rating } => {
                country.emissions_rating() >= *rating
            }
            Condition::BudgetAtLeast { rating } => country.budget_rating() >= *rating,
            Condition::BudgetAtMost { rating } => country.budget_rating() <= *rating,
            Condition::EqualityAtMost { rating } => country.equality_rating() <= *rating,
            Condition::HasActivePolicy { name } => {
                country.active_policies.iter().any(|p| p.name == *name)
            }
        }
    }

    /// A player-facing rendering of the requirement.
    pub fn describe(&self) -> String {
        match self {
            Condition::Empty => "No requirement.".to_string(),
            Condition::And { all } => format!(
                "All of the following hold: {}",
                all.iter().map(Condition::describe).collect::<Vec<_>>().join(" & ")
            ),
            Condition::Or { any } => format!(
                "At least one of the following holds: {}",
                any.iter().map(Condition::describe).collect::<Vec<_>>().join(" or ")
            ),
            Condition::Not { inner } => {
                format!("The following does not hold: {}", inner.describe())
            }
            Condition::WealthAtLeast { rating } => {
                format!("Your wealth per capita rating is at least {rating}")
            }
            Condition::WealthAtMost { rating } => {
                format!("Your wealth per capita rating is at most {rating}")
            }
            Condition::EducationAtLeast { rating } => {
                format!("Your education rating is at least {rating}")
            }
            Condition::EducationAtMost { rating } => {
                format!("Your education rating is at most {rating}")
            }
            Condition::EmissionsPerCapitaAtLeast { rating } => {
                format!("Your emissions per capita rating is at least {rating}")
            }
            Condition::BudgetAtLeast { rating } => {
                format!("Your budget rating is at least {rating}")
            }
            Condition::BudgetAtMost { rating } => {
                format!("Your budget rating is at most {rating}")
            }
            Condition::EqualityAtMost { rating } => {
                format!("Your equality rating is at most {rating}")
            }
            Condition::HasActivePolicy { name } => format!("You have '{name}' enacted."),
        }
    }

    /// Shorthand for a `Not` around an owned condition.
    pub fn negated(self) -> Condition {
        Condition::Not {
            inner: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::effect::Effect;
    use crate::model::policy::Policy;

    // Budget -3.95 rates C, education 0.9918 rates S, gini 28 rates A.
    fn test_country() -> Country {
        Country::new(
            "The Netherlands",
            "NL",
            0.46,
            90_705.0,
            16_981_295,
            -3.949_727,
            28.0,
            0.991_817,
        )
    }

    #[test]
    fn empty_is_always_true() {
        assert!(Condition::Empty.evaluate(&test_country()));
    }

    #[test]
    fn rating_threshold_leaves() {
        let country = test_country();
        assert!(Condition::BudgetAtLeast { rating: Rating::C }.evaluate(&country));
        assert!(Condition::BudgetAtMost { rating: Rating::C }.evaluate(&country));
        assert!(!Condition::BudgetAtLeast { rating: Rating::S }.evaluate(&country));
        assert!(Condition::EducationAtLeast { rating: Rating::A }.evaluate(&country));
        assert!(!Condition::EducationAtMost { rating: Rating::A }.evaluate(&country));
        assert!(Condition::EqualityAtMost { rating: Rating::A }.evaluate(&country));
    }

    #[test]
    fn and_requires_every_child() {
        let country = test_country();
        let passing = Condition::And {
            all: vec![
                Condition::BudgetAtLeast { rating: Rating::C },
                Condition::EducationAtLeast { rating: Rating::A },
            ],
        };
        let failing = Condition::And {
            all: vec![
                Condition::BudgetAtLeast { rating: Rating::C },
                Condition::BudgetAtLeast { rating: Rating::S },
            ],
        };
        assert!(passing.evaluate(&country));
        assert!(!failing.evaluate(&country));
    }

    #[test]
    fn or_requires_any_child() {
        let country = test_country();
        let passing = Condition::Or {
            any: vec![
                Condition::BudgetAtLeast { rating: Rating::S },
                Condition::EducationAtLeast { rating: Rating::A },
            ],
        };
        let failing = Condition::Or {
            any: vec![
                Condition::BudgetAtLeast { rating: Rating::S },
                Condition::WealthAtLeast { rating: Rating::S },
            ],
        };
        assert!(passing.evaluate(&country));
        assert!(!failing.evaluate(&country));
    }

    #[test]
    fn empty_composites() {
        let country = test_country();
        assert!(Condition::And { all: vec![] }.evaluate(&country));
        assert!(!Condition::Or { any: vec![] }.evaluate(&country));
    }

    #[test]
    fn not_inverts() {
        let country = test_country();
        assert!(!Condition::Empty.negated().evaluate(&country));
        assert!(
            Condition::BudgetAtLeast { rating: Rating::S }
                .negated()
                .evaluate(&country)
        );
    }

    #[test]
    fn has_active_policy_matches_by_name() {
        let mut country = test_country();
        let condition = Condition::HasActivePolicy {
            name: "Free schools".to_string(),
        };
        assert!(!condition.evaluate(&country));

        country.active_policies.push(Policy::new(
            "Free schools",
            vec![Effect::ExtraEdi { percentage: 1.0 }],
            5,
        ));
        assert!(condition.evaluate(&country));
    }

    #[test]
    fn nested_expression() {
        let country = test_country();
        // (budget >= C and not (wealth >= S)) or equality <= F
        let expr = Condition::Or {
            any: vec![
                Condition::And {
                    all: vec![
                        Condition::BudgetAtLeast { rating: Rating::C },
                        Condition::WealthAtLeast { rating: Rating::S }.negated(),
                    ],
                },
                Condition::EqualityAtMost { rating: Rating::F },
            ],
        };
        assert!(expr.evaluate(&country));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let country = test_country();
        let expr = Condition::And {
            all: vec![
                Condition::BudgetAtLeast { rating: Rating::C },
                Condition::EducationAtLeast { rating: Rating::B },
            ],
        };
        let first = expr.evaluate(&country);
        let second = expr.evaluate(&country);
        assert_eq!(first, second);
    }

    #[test]
    fn tagged_serde_representation() {
        let json = serde_json::to_value(Condition::WealthAtMost { rating: Rating::C }).unwrap();
        assert_eq!(json["type"], "wealth_at_most");
        assert_eq!(json["rating"], "C");

        let json = serde_json::to_value(Condition::Empty).unwrap();
        assert_eq!(json["type"], "empty");
    }

    #[test]
    fn serde_round_trip_nested() {
        let expr = Condition::And {
            all: vec![
                Condition::EducationAtLeast { rating: Rating::D },
                Condition::HasActivePolicy {
                    name: "Propaganda".to_string(),
                }
                .negated(),
            ],
        };
        let json = serde_json::to_string(&expr).unwrap();
        let parsed: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(expr, parsed);
    }
}
