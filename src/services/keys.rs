//! Key normalization
//!
//! Converts provider mapping keys (`stream_icon`, `rating_5based`,
//! `epg_listings`) to camelCase (`streamIcon`, `rating5Based`,
//! `epgListings`). Only keys are renamed, values are never touched.
//!
//! The conversion follows the common JavaScript `camelcase` rules so that
//! output keys match what other clients of the same API produce:
//! existing camelCase boundaries are preserved, separators (`_`, `-`, `.`,
//! space) are removed and upper-case the next character, and a letter
//! following a digit run is upper-cased.

use serde_json::{Map, Value};

/// Recursively (or top-level only) camelCase every mapping key
///
/// Arrays are mapped element-wise in order. With `deep == false` only the
/// keys of the top-level mapping (or of each mapping directly inside a
/// top-level array) are converted.
pub fn normalize_keys(value: Value, deep: bool) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                let inner = if deep { normalize_keys(inner, true) } else { inner };
                out.insert(camel_case(&key), inner);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| normalize_keys(item, deep))
                .collect(),
        ),
        other => other,
    }
}

/// Convert a single key to camelCase
pub fn camel_case(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return String::new(),
        (Some(_), None) => return trimmed.to_lowercase(),
        _ => {}
    }

    let preserved = if trimmed != trimmed.to_lowercase() {
        preserve_camel_case(trimmed)
    } else {
        trimmed.to_string()
    };

    let lowered = preserved.trim_start_matches(is_separator).to_lowercase();
    uppercase_after_digits(&uppercase_after_separators(&lowered))
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}

fn is_identifier(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Mark existing word boundaries (`aB`, `ABc`) with `-` before lowercasing
fn preserve_camel_case(input: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(input.len() + 4);
    let mut last_lower = false;
    let mut last_upper = false;
    let mut last_last_upper = false;

    for c in input.chars() {
        if last_lower && c.is_uppercase() {
            out.push('-');
            last_lower = false;
            last_last_upper = last_upper;
            last_upper = true;
        } else if last_upper && last_last_upper && c.is_lowercase() {
            // last_upper implies at least one pushed char
            let at = out.len() - 1;
            out.insert(at, '-');
            last_last_upper = last_upper;
            last_upper = false;
            last_lower = true;
        } else {
            last_lower = c.is_lowercase();
            last_last_upper = last_upper;
            last_upper = c.is_uppercase();
        }
        out.push(c);
    }

    out.into_iter().collect()
}

fn uppercase_after_separators(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if !is_separator(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && is_separator(chars[i]) {
            i += 1;
        }

        match chars.get(i) {
            None => {}
            Some(&next) if is_identifier(next) => {
                out.extend(next.to_uppercase());
                i += 1;
            }
            Some(_) => out.extend(&chars[run_start..i]),
        }
    }

    out
}

fn uppercase_after_digits(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;

        if c.is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                out.push(chars[i]);
                i += 1;
            }
            if let Some(&next) = chars.get(i) {
                if is_identifier(next) {
                    out.extend(next.to_uppercase());
                    i += 1;
                }
            }
        }
    }

    out
}
