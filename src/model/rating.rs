use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordinal grade for a country indicator, from worst to best.
///
/// Ratings order by quality, so threshold comparisons read naturally:
///
/// ```
/// use climate_sim::model::Rating;
/// assert!(Rating::A > Rating::B);
/// assert!(Rating::C < Rating::B);
/// ```
///
/// `Undefined` is the fallback for a value no threshold band covers. Valid
/// seed data never produces it; hitting it means an indicator went somewhere
/// the band tables do not expect, and it is logged as an anomaly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rating {
    Undefined,
    F,
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rating {
    /// Grade daily per-capita wealth in US$. Higher wealth, higher rating.
    pub fn for_wealth_per_capita(wealth: f64) -> Rating {
        match wealth {
            w if (0.0..3.2).contains(&w) => Rating::F,
            w if (3.2..5.5).contains(&w) => Rating::E,
            w if (5.5..15.0).contains(&w) => Rating::D,
            w if (15.0..40.0).contains(&w) => Rating::C,
            w if (40.0..120.0).contains(&w) => Rating::B,
            w if (120.0..200.0).contains(&w) => Rating::A,
            w if w >= 200.0 => Rating::S,
            _ => Rating::undefined_for("wealth per capita", wealth),
        }
    }

    /// Grade a budget surplus (positive) or deficit (negative) in % GDP.
    ///
    /// Any surplus rates at least A.
    pub fn for_budget_surplus(surplus: f64) -> Rating {
        match surplus {
            s if s < -10.0 => Rating::F,
            s if (-10.0..-7.5).contains(&s) => Rating::E,
            s if (-7.5..-5.0).contains(&s) => Rating::D,
            s if (-5.0..-2.5).contains(&s) => Rating::C,
            s if (-2.5..0.0).contains(&s) => Rating::B,
            s if (0.0..5.0).contains(&s) => Rating::A,
            s if s >= 5.0 => Rating::S,
            _ => Rating::undefined_for("budget surplus", surplus),
        }
    }

    /// Grade equality from a Gini index. A lower index (more equality) rates
    /// higher. 37.5 is about average.
    pub fn for_equality(gini: f64) -> Rating {
        match gini {
            g if g >= 50.0 => Rating::F,
            g if (45.0..50.0).contains(&g) => Rating::E,
            g if (40.0..45.0).contains(&g) => Rating::D,
            g if (37.5..40.0).contains(&g) => Rating::C,
            g if (30.0..37.5).contains(&g) => Rating::B,
            g if (25.0..30.0).contains(&g) => Rating::A,
            g if (0.0..25.0).contains(&g) => Rating::S,
            _ => Rating::undefined_for("gini index", gini),
        }
    }

    /// Grade an Education Development Index in `0..=1`. About 0.899 is average.
    pub fn for_education(edi: f64) -> Rating {
        match edi {
            e if (0.0..0.6).contains(&e) => Rating::F,
            e if (0.6..0.7).contains(&e) => Rating::E,
            e if (0.7..0.8).contains(&e) => Rating::D,
            e if (0.8..0.9).contains(&e) => Rating::C,
            e if (0.9..0.95).contains(&e) => Rating::B,
            e if (0.95..0.99).contains(&e) => Rating::A,
            e if e >= 0.99 => Rating::S,
            _ => Rating::undefined_for("education development index", edi),
        }
    }

    /// Grade yearly emissions per capita in tonnes of carbon. Lower emissions
    /// rate higher; net-negative emitters rate A or S.
    pub fn for_emissions_per_capita(emissions: f64) -> Rating {
        match emissions {
            e if e < -4.0 => Rating::S,
            e if (-4.0..0.0).contains(&e) => Rating::A,
            e if (0.0..1.0).contains(&e) => Rating::B,
            e if (1.0..2.0).contains(&e) => Rating::C,
            e if (2.0..5.0).contains(&e) => Rating::D,
            e if (5.0..10.0).contains(&e) => Rating::E,
            e if e >= 10.0 => Rating::F,
            _ => Rating::undefined_for("emissions per capita", emissions),
        }
    }

    fn undefined_for(metric: &str, value: f64) -> Rating {
        tracing::warn!(metric, value, "indicator outside all rating bands");
        Rating::Undefined
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::S => "S",
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::E => "E",
            Rating::F => "F",
            Rating::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order_worst_to_best() {
        let expected = [
            Rating::Undefined,
            Rating::F,
            Rating::E,
            Rating::D,
            Rating::C,
            Rating::B,
            Rating::A,
            Rating::S,
        ];
        for pair in expected.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn wealth_bands() {
        assert_eq!(Rating::for_wealth_per_capita(0.0), Rating::F);
        assert_eq!(Rating::for_wealth_per_capita(3.2), Rating::E);
        assert_eq!(Rating::for_wealth_per_capita(10.0), Rating::D);
        assert_eq!(Rating::for_wealth_per_capita(20.0), Rating::C);
        assert_eq!(Rating::for_wealth_per_capita(50.0), Rating::B);
        assert_eq!(Rating::for_wealth_per_capita(150.0), Rating::A);
        assert_eq!(Rating::for_wealth_per_capita(200.0), Rating::S);
        assert_eq!(Rating::for_wealth_per_capita(1e9), Rating::S);
    }

    #[test]
    fn budget_bands() {
        assert_eq!(Rating::for_budget_surplus(-20.0), Rating::F);
        assert_eq!(Rating::for_budget_surplus(-10.0), Rating::E);
        assert_eq!(Rating::for_budget_surplus(-6.0), Rating::D);
        assert_eq!(Rating::for_budget_surplus(-3.95), Rating::C);
        assert_eq!(Rating::for_budget_surplus(-1.0), Rating::B);
        assert_eq!(Rating::for_budget_surplus(0.0), Rating::A);
        assert_eq!(Rating::for_budget_surplus(5.0), Rating::S);
    }

    #[test]
    fn any_surplus_rates_at_least_a() {
        for surplus in [0.0, 0.1, 2.5, 4.99, 5.0, 12.0] {
            assert!(Rating::for_budget_surplus(surplus) >= Rating::A);
        }
    }

    #[test]
    fn equality_bands() {
        assert_eq!(Rating::for_equality(55.0), Rating::F);
        assert_eq!(Rating::for_equality(47.0), Rating::E);
        assert_eq!(Rating::for_equality(42.0), Rating::D);
        assert_eq!(Rating::for_equality(38.0), Rating::C);
        assert_eq!(Rating::for_equality(33.0), Rating::B);
        assert_eq!(Rating::for_equality(28.0), Rating::A);
        assert_eq!(Rating::for_equality(20.0), Rating::S);
    }

    #[test]
    fn education_bands() {
        assert_eq!(Rating::for_education(0.5), Rating::F);
        assert_eq!(Rating::for_education(0.65), Rating::E);
        assert_eq!(Rating::for_education(0.75), Rating::D);
        assert_eq!(Rating::for_education(0.85), Rating::C);
        assert_eq!(Rating::for_education(0.92), Rating::B);
        assert_eq!(Rating::for_education(0.96), Rating::A);
        assert_eq!(Rating::for_education(0.9918), Rating::S);
    }

    #[test]
    fn emissions_bands() {
        assert_eq!(Rating::for_emissions_per_capita(-5.0), Rating::S);
        assert_eq!(Rating::for_emissions_per_capita(-1.0), Rating::A);
        assert_eq!(Rating::for_emissions_per_capita(0.5), Rating::B);
        assert_eq!(Rating::for_emissions_per_capita(1.5), Rating::C);
        assert_eq!(Rating::for_emissions_per_capita(3.0), Rating::D);
        assert_eq!(Rating::for_emissions_per_capita(7.0), Rating::E);
        assert_eq!(Rating::for_emissions_per_capita(25.0), Rating::F);
    }

    #[test]
    fn band_edges_are_half_open() {
        // Each boundary value belongs to the band it opens, not the one it closes.
        assert_eq!(Rating::for_wealth_per_capita(120.0), Rating::A);
        assert_eq!(Rating::for_budget_surplus(-2.5), Rating::B);
        assert_eq!(Rating::for_equality(30.0), Rating::B);
        assert_eq!(Rating::for_education(0.95), Rating::A);
        assert_eq!(Rating::for_emissions_per_capita(2.0), Rating::D);
    }

    #[test]
    fn nan_falls_back_to_undefined() {
        assert_eq!(Rating::for_wealth_per_capita(f64::NAN), Rating::Undefined);
        assert_eq!(Rating::for_budget_surplus(f64::NAN), Rating::Undefined);
        assert_eq!(Rating::for_equality(f64::NAN), Rating::Undefined);
        assert_eq!(Rating::for_education(f64::NAN), Rating::Undefined);
        assert_eq!(Rating::for_emissions_per_capita(f64::NAN), Rating::Undefined);
    }

    #[test]
    fn serde_round_trip() {
        for rating in [Rating::Undefined, Rating::F, Rating::C, Rating::S] {
            let json = serde_json::to_string(&rating).unwrap();
            let parsed: Rating = serde_json::from_str(&json).unwrap();
            assert_eq!(rating, parsed);
        }
    }
}
