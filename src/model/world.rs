use serde::{Deserialize, Serialize};

use super::country::Country;
use super::earth::Earth;

/// The full simulation state: one shared climate plus every country on it.
///
/// Countries never read each other's state; the only cross-entity coupling is
/// the emission sum fed into the climate tick, which
/// [`advance_year`](crate::sim::advance_year) computes before anything moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub earth: Earth,
    pub countries: Vec<Country>,
}

impl World {
    pub fn new(earth: Earth, countries: Vec<Country>) -> Self {
        World { earth, countries }
    }

    /// Total yearly emissions across every country, in gigatonnes carbon.
    /// This is the single scalar the climate tick consumes.
    pub fn aggregate_yearly_emissions(&self) -> f64 {
        self.countries.iter().map(|c| c.yearly_emissions).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_sums_every_country() {
        let mut a = Country::new("A", "AA", 1.5, 1000.0, 1_000_000, 0.0, 35.0, 0.9);
        let b = Country::new("B", "BB", 2.5, 1000.0, 1_000_000, 0.0, 35.0, 0.9);
        a.yearly_emissions = 2.0;

        let world = World::new(Earth::default(), vec![a, b]);
        assert!((world.aggregate_yearly_emissions() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn empty_world_emits_nothing() {
        let world = World::new(Earth::default(), vec![]);
        assert_eq!(world.aggregate_yearly_emissions(), 0.0);
    }
}
