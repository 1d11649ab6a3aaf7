use crate::model::{SUB_TICKS_PER_YEAR, World};

/// Advance the whole world by one simulated year, returning the new state.
///
/// The ordering contract matters: the emission aggregate is computed over
/// every country *before* anything advances, the climate ticks exactly once on
/// that aggregate, and only then does each country run its 24 sub-ticks
/// against the already-advanced climate. Countries are independent of each
/// other past the aggregate, so their order is irrelevant.
#[must_use]
pub fn advance_year(world: &World) -> World {
    let aggregate = world.aggregate_yearly_emissions();
    let earth = world.earth.tick(aggregate);

    let countries = world
        .countries
        .iter()
        .map(|country| {
            let mut next = country.clone();
            for _ in 0..SUB_TICKS_PER_YEAR {
                next = next.tick(&earth);
            }
            next
        })
        .collect();

    tracing::debug!(
        year = earth.current_year,
        emissions = aggregate,
        temperature = earth.current_temperature,
        "advanced world by one year"
    );

    World { earth, countries }
}

/// Advance the world by several years in sequence.
#[must_use]
pub fn advance_years(world: &World, years: u32) -> World {
    let mut current = world.clone();
    for _ in 0..years {
        current = advance_year(&current);
    }
    current
}
