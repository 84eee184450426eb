//! Zero-result suggestion generator.
//!
//! Mines alternative search terms from listing titles when a cross-entity
//! search finds nothing. Best-effort UX aid: deterministic for a given
//! corpus and query, bounded output, never panics, and a weak heuristic here
//! must never fail the surrounding search.
//!
//! Scoring: `2 * shared-prefix length + longest common substring length`
//! between the normalized query and each candidate token. Ties break
//! lexicographically so repeated calls rank identically.

use std::collections::HashMap;

use regex::Regex;

use super::text::normalize;

pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum token length worth suggesting; shorter words are noise.
const MIN_TOKEN_LEN: usize = 3;

pub fn suggest(titles: &[&str], query: &str, max_suggestions: usize) -> Vec<String> {
    let needle = normalize(query);
    if needle.is_empty() || max_suggestions == 0 {
        return Vec::new();
    }

    let word = match Regex::new(r"[a-zA-Z]+") {
        Ok(re) => re,
        // Unreachable for a fixed pattern, but this path must not panic.
        Err(_) => return Vec::new(),
    };

    let mut scores: HashMap<String, usize> = HashMap::new();
    for title in titles {
        for m in word.find_iter(&title.to_lowercase()) {
            let token = m.as_str();
            if token.len() < MIN_TOKEN_LEN || token == needle {
                continue;
            }
            let score = proximity(token, &needle);
            if score == 0 {
                continue;
            }
            scores
                .entry(token.to_string())
                .and_modify(|s| *s = (*s).max(score))
                .or_insert(score);
        }
    }

    let mut ranked: Vec<(String, usize)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(max_suggestions)
        .map(|(token, _)| token)
        .collect()
}

fn proximity(token: &str, needle: &str) -> usize {
    let prefix = token
        .bytes()
        .zip(needle.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    2 * prefix + common_run(token, needle)
}

/// Longest common substring length, O(len * len) over two short words.
fn common_run(a: &str, b: &str) -> usize {
    let a: Vec<u8> = a.bytes().collect();
    let b: Vec<u8> = b.bytes().collect();
    let mut best = 0;
    let mut prev = vec![0usize; b.len() + 1];

    for &ca in &a {
        let mut current = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                current[j + 1] = prev[j] + 1;
                best = best.max(current[j + 1]);
            }
        }
        prev = current;
    }
    best
}
