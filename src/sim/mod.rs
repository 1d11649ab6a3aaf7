mod forecast;
mod runner;

pub use forecast::{country_at, country_series, earth_series, earth_temperature_at};
pub use runner::{advance_year, advance_years};
