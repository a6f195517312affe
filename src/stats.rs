//! Summary statistics over film location records.
//!
//! The column names match the San Francisco film locations dataset that
//! the report binary consumes.

use ahash::{HashMap, HashSet};

use crate::table::Record;

const FUN_FACTS: &str = "Fun Facts";
const RELEASE_YEAR: &str = "Release Year";
const TITLE: &str = "Title";
const ACTOR_COLUMNS: [&str; 3] = ["Actor 1", "Actor 2", "Actor 3"];

/// The record with the longest fun fact.
///
/// Returns [`None`] for empty input. A record whose fun fact is missing
/// or empty is never selected; ties go to the earliest record.
pub fn longest_fun_fact(records: &[Record]) -> Option<&Record> {
    let mut best = None;
    let mut max = 0;
    for record in records {
        let length = record.get(FUN_FACTS).map_or(0, |fact| fact.len());
        if length > max {
            max = length;
            best = Some(record);
        }
    }
    best
}

/// The unique titles of the films released in the given year, each
/// followed by the parenthetical year, in first-occurrence order.
pub fn titles_by_year(records: &[Record], year: u32) -> Vec<String> {
    let year = year.to_string();
    let mut seen = HashSet::default();
    let mut titles = Vec::new();
    for record in records {
        if record.get(RELEASE_YEAR) != Some(&year) {
            continue;
        }
        let Some(title) = record.get(TITLE) else {
            continue;
        };
        let title = format!("{} ({})", title.to_uppercase(), year);
        if seen.insert(title.clone()) {
            titles.push(title);
        }
    }
    titles
}

/// A frequency table mapping actor names to the number of times they
/// appear in the dataset.
///
/// Missing or blank actor cells are never counted.
pub fn actor_counts(records: &[Record]) -> HashMap<String, u32> {
    let mut counts = HashMap::default();
    for record in records {
        for column in ACTOR_COLUMNS {
            increment(&mut counts, record.get(column));
        }
    }
    counts
}

fn increment(counts: &mut HashMap<String, u32>, actor: Option<&String>) {
    let Some(actor) = actor else {
        return;
    };
    if actor.is_empty() {
        return;
    }
    *counts.entry(actor.clone()).or_insert(0) += 1;
}
