use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::SimulationError;
use crate::model::{Country, Earth, World};

/// Write an iterator of serializable items to a JSONL file (one JSON object
/// per line).
fn write_jsonl<T: Serialize>(
    path: &Path,
    items: impl Iterator<Item = T>,
) -> Result<(), SimulationError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Flush the world state to JSONL files in the given output directory.
///
/// Creates the directory if needed. Writes 2 files:
/// - `earth.jsonl` — the climate state, one line
/// - `countries.jsonl` — one country per line, active policies inline
pub fn flush_world_to_jsonl(world: &World, output_dir: &Path) -> Result<(), SimulationError> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("earth.jsonl"), std::iter::once(&world.earth))?;
    write_jsonl(&output_dir.join("countries.jsonl"), world.countries.iter())?;

    Ok(())
}

/// Load a world back from a directory written by [`flush_world_to_jsonl`].
///
/// Tolerant of schema drift the same way the rest of the engine is: records
/// missing later-added optional fields decode with their defaults. Malformed
/// lines surface as [`SimulationError::Decode`].
pub fn load_world_from_jsonl(input_dir: &Path) -> Result<World, SimulationError> {
    let earth_raw = fs::read_to_string(input_dir.join("earth.jsonl"))?;
    let earth: Earth = serde_json::from_str(earth_raw.trim())?;

    let countries_raw = fs::read_to_string(input_dir.join("countries.jsonl"))?;
    let countries = countries_raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str::<Country>)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(World::new(earth, countries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_worlds_round_trip() {
        let world = World::new(Earth::default(), vec![]);
        let dir = tempfile::tempdir().unwrap();

        flush_world_to_jsonl(&world, dir.path()).unwrap();
        let loaded = load_world_from_jsonl(dir.path()).unwrap();
        assert_eq!(world, loaded);
    }

    #[test]
    fn missing_directory_is_an_io_fault() {
        let result = load_world_from_jsonl(Path::new("/nonexistent/snapshot"));
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }
}
