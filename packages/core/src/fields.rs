// ABOUTME: Value coercions behind the form's field widgets
// ABOUTME: Numeric input parsing, multi-select toggling, tag and comma-list editing

use crate::constants::{DEFAULT_AGE_MAX, DEFAULT_AGE_MIN};

/// Result of reading a numeric text input
///
/// Nothing here ever fails: cleared input and unreadable input are both kept
/// as distinct values so the consumer picks its own fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// The input was cleared
    Empty,
    /// The input holds a finite number
    Number(f64),
    /// The input holds text that is not a finite number, passed through as typed
    Raw(String),
}

impl NumericInput {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return NumericInput::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => NumericInput::Number(n),
            _ => NumericInput::Raw(raw.to_string()),
        }
    }

    /// The number, or `fallback` when empty or unreadable
    pub fn number_or(&self, fallback: f64) -> f64 {
        match self {
            NumericInput::Number(n) => *n,
            NumericInput::Empty | NumericInput::Raw(_) => fallback,
        }
    }

    /// Read as an age, falling back to `fallback` for anything that is not a
    /// non-negative number. Fractions are truncated.
    pub fn age_or(&self, fallback: u32) -> u32 {
        match self {
            NumericInput::Number(n) if *n >= 0.0 && *n <= u32::MAX as f64 => n.trunc() as u32,
            _ => fallback,
        }
    }

    pub fn min_age(&self) -> u32 {
        self.age_or(DEFAULT_AGE_MIN)
    }

    pub fn max_age(&self) -> u32 {
        self.age_or(DEFAULT_AGE_MAX)
    }

    /// Budget reading: cleared or unreadable input counts as zero
    pub fn budget(&self) -> f64 {
        self.number_or(0.0).max(0.0)
    }
}

/// Toggle `option` in a multi-select value
///
/// Selected options are removed, absent ones appended. The result never
/// holds duplicates.
pub fn toggle<T: PartialEq + Clone>(selected: &[T], option: &T) -> Vec<T> {
    let mut next: Vec<T> = Vec::with_capacity(selected.len() + 1);
    for item in selected {
        if !next.contains(item) {
            next.push(item.clone());
        }
    }
    if let Some(pos) = next.iter().position(|item| item == option) {
        next.remove(pos);
    } else {
        next.push(option.clone());
    }
    next
}

/// Append the trimmed `pending` text as a new tag
///
/// Returns `None` when the trimmed text is empty, leaving the tags as they were.
pub fn append_tag(tags: &[String], pending: &str) -> Option<Vec<String>> {
    let tag = pending.trim();
    if tag.is_empty() {
        return None;
    }
    let mut next = tags.to_vec();
    next.push(tag.to_string());
    Some(next)
}

/// Drop the tag at `index`; out of range leaves the tags unchanged
pub fn remove_tag(tags: &[String], index: usize) -> Vec<String> {
    tags.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, t)| t.clone())
        .collect()
}

/// Split comma separated text into trimmed, non-empty entries
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn join_comma_list(values: &[String]) -> String {
    values.join(", ")
}

/// Render a number the way the numeric inputs show it (`50`, not `50.0`)
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
