use climate_sim::model::{Country, Earth};

/// The stock test country: 2015 data for the Netherlands.
pub fn netherlands() -> Country {
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

/// An earth run hot: 35 years of 20 Gt yearly emissions, which puts the
/// anomaly past +1.0 °C.
pub fn warmed_earth() -> Earth {
    let mut earth = Earth::default();
    for _ in earth.current_year..2050 {
        earth = earth.tick(20.0);
    }
    earth
}
