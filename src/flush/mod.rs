mod jsonl;

pub use jsonl::{flush_world_to_jsonl, load_world_from_jsonl};
