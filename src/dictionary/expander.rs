// Row expander - applies a dictionary's rows to text
// Each row's `from` is matched literally; case and word-boundary handling come from config
//
// All rows are compiled into one alternation and matched against the input in a
// single scan, so replacement text is never rewritten by another row.

use std::cmp::Reverse;

use regex::{Captures, Regex};

use super::Dictionary;
use crate::util::ExpansionConfig;

/// Result of expanding text with a dictionary's rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionResult {
    /// The text with all substitutions applied
    pub expanded_text: String,
    /// Number of spans of the input that were replaced
    pub replacements: usize,
}

/// Expander that applies a dictionary's rows to text
///
/// Where rows overlap at the same position, the longest `from` wins.
pub struct RowExpander {
    /// One capture group per row, in the same order as `targets`
    regex: Option<Regex>,
    targets: Vec<String>,
}

impl RowExpander {
    /// Compile the dictionary's rows into a single pattern
    pub fn new(dictionary: &Dictionary, config: &ExpansionConfig) -> Self {
        let mut rows: Vec<(&str, &str)> = dictionary.rows().collect();
        rows.sort_by_key(|(from, _)| Reverse(from.chars().count()));

        let mut alternatives = Vec::with_capacity(rows.len());
        let mut targets = Vec::with_capacity(rows.len());
        for (from, to) in rows {
            let pattern = build_pattern(from, config.whole_word);
            if let Err(e) = Regex::new(&pattern) {
                crate::warn!("Failed to compile pattern for row '{}': {}", from, e);
                continue;
            }
            alternatives.push(format!("({})", pattern));
            targets.push(to.to_string());
        }

        if alternatives.is_empty() {
            return Self {
                regex: None,
                targets,
            };
        }

        let flags = if config.case_insensitive { "(?i)" } else { "" };
        match Regex::new(&format!("{}{}", flags, alternatives.join("|"))) {
            Ok(regex) => Self {
                regex: Some(regex),
                targets,
            },
            Err(e) => {
                crate::warn!(
                    "Failed to compile expansion pattern for dictionary {}: {}",
                    dictionary.id,
                    e
                );
                Self {
                    regex: None,
                    targets: Vec::new(),
                }
            }
        }
    }

    /// Replace every match in the input with its row's `to` text
    pub fn expand(&self, text: &str) -> ExpansionResult {
        let Some(regex) = &self.regex else {
            return ExpansionResult {
                expanded_text: text.to_string(),
                replacements: 0,
            };
        };

        let mut replacements = 0;
        let expanded = regex.replace_all(text, |caps: &Captures| {
            replacements += 1;
            (1..caps.len())
                .find(|&group| caps.get(group).is_some())
                .and_then(|group| self.targets.get(group - 1))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        });

        ExpansionResult {
            expanded_text: expanded.into_owned(),
            replacements,
        }
    }

    /// Number of rows that compiled
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escape `from`, adding a word boundary only on sides that end in a word character
fn build_pattern(from: &str, whole_word: bool) -> String {
    let escaped = regex::escape(from);
    if !whole_word {
        return escaped;
    }

    let starts_with_word = from.chars().next().is_some_and(is_word_char);
    let ends_with_word = from.chars().next_back().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if starts_with_word { r"\b" } else { "" },
        escaped,
        if ends_with_word { r"\b" } else { "" }
    )
}

#[cfg(test)]
#[path = "expander_test.rs"]
mod tests;
