mod common;

use climate_sim::Catalog;
use climate_sim::flush::{flush_world_to_jsonl, load_world_from_jsonl};
use climate_sim::model::{Country, Earth, World};
use climate_sim::sim;
use common::netherlands;

fn build_test_world() -> World {
    let catalog = Catalog::builtin();
    let mut country = netherlands();
    country.country_points = 50;

    // One active policy so the nested structures hit the wire too.
    let template = catalog.policy("Set emission reduction target").unwrap();
    let country = country.enact_policy(template).country;

    let denmark = Country::new("Denmark", "DK", 0.017, 53_417.0, 5_683_483, -1.4, 28.2, 0.993);
    World::new(Earth::default(), vec![country, denmark])
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

#[test]
fn flush_produces_valid_jsonl_files() {
    let world = build_test_world();
    let dir = tempfile::tempdir().unwrap();

    flush_world_to_jsonl(&world, dir.path()).unwrap();

    let earth_path = dir.path().join("earth.jsonl");
    let countries_path = dir.path().join("countries.jsonl");
    assert!(earth_path.exists());
    assert!(countries_path.exists());

    let earth_lines = read_lines(&earth_path);
    assert_eq!(earth_lines.len(), 1);
    let earth: serde_json::Value = serde_json::from_str(&earth_lines[0]).unwrap();
    assert!(earth.get("current_year").is_some());
    assert!(earth.get("current_temperature").is_some());
    assert!(earth.get("current_concentration").is_some());

    let country_lines = read_lines(&countries_path);
    assert_eq!(country_lines.len(), 2, "expected 2 countries");
    for line in &country_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("name").is_some());
        assert!(v.get("country_code").is_some());
        assert!(v.get("active_policies").is_some());
    }
}

#[test]
fn flush_then_load_round_trips() {
    let world = build_test_world();
    let dir = tempfile::tempdir().unwrap();

    flush_world_to_jsonl(&world, dir.path()).unwrap();
    let loaded = load_world_from_jsonl(dir.path()).unwrap();
    assert_eq!(world, loaded);
}

#[test]
fn advanced_state_round_trips_too() {
    let world = sim::advance_years(&build_test_world(), 3);
    let dir = tempfile::tempdir().unwrap();

    flush_world_to_jsonl(&world, dir.path()).unwrap();
    let loaded = load_world_from_jsonl(dir.path()).unwrap();
    assert_eq!(world, loaded);

    // And the loaded copy keeps simulating identically.
    assert_eq!(sim::advance_year(&world), sim::advance_year(&loaded));
}

#[test]
fn legacy_snapshots_decode_with_defaults() {
    let dir = tempfile::tempdir().unwrap();

    // Records written before active_policies/country_points existed, with a
    // policy predating condition and category.
    std::fs::write(
        dir.path().join("earth.jsonl"),
        "{\"current_year\": 2020, \"current_temperature\": 14.8, \"current_concentration\": 410.0}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("countries.jsonl"),
        concat!(
            "{\"name\": \"Oldland\", \"country_code\": \"OL\", ",
            "\"base_yearly_emissions\": 0.1, \"yearly_emissions\": 0.09, ",
            "\"base_gdp\": 1000.0, \"gdp\": 990.0, \"population\": 1000000, ",
            "\"budget_surplus\": 0.0, \"gini_rating\": 30.0, ",
            "\"education_development_index\": 0.9, ",
            "\"active_policies\": [{\"name\": \"Old policy\", \"level\": 2, ",
            "\"effects\": [{\"type\": \"free_points\", \"points\": 1}], \"base_cost\": 1}]}\n",
        ),
    )
    .unwrap();

    let world = load_world_from_jsonl(dir.path()).unwrap();
    assert_eq!(world.countries.len(), 1);

    let country = &world.countries[0];
    assert_eq!(country.country_points, 1);

    let policy = &country.active_policies[0];
    assert_eq!(policy.level, 2);
    assert_eq!(policy.condition, climate_sim::Condition::Empty);
    assert_eq!(policy.category, climate_sim::PolicyCategory::Miscellaneous);
}

#[test]
fn malformed_lines_surface_as_decode_faults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("earth.jsonl"), "{\"current_year\": 2020").unwrap();
    std::fs::write(dir.path().join("countries.jsonl"), "").unwrap();

    let result = load_world_from_jsonl(dir.path());
    assert!(matches!(result, Err(climate_sim::SimulationError::Decode(_))));
}
