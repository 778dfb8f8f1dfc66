use serde::{Deserialize, Serialize};
use std::fmt;

/// One validated input line: two base numbers and the goal they run up to.
/// All three are natural numbers (>= 1) by the time this exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triplet {
    pub a: u64,
    pub b: u64,
    pub goal: u64,
}

impl Triplet {
    /// Parses a whitespace-separated `A B GOAL` line. Returns `None` unless
    /// the line holds exactly three tokens that fit in a `u64`.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut numbers = line
            .split_whitespace()
            .map(|token| token.parse::<u64>().ok());
        let a = numbers.next()??;
        let b = numbers.next()??;
        let goal = numbers.next()??;
        if numbers.next().is_some() {
            return None;
        }
        Some(Self { a, b, goal })
    }
}

/// The computed multiples for one input line. `multiples` is unique and
/// sorted ascending, every value strictly below `goal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub goal: u64,
    pub multiples: Vec<u64>,
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .multiples
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}:{}", self.goal, joined)
    }
}

/// All entries for a run, ordered by multiple count ascending (stable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub entries: Vec<ResultEntry>,
}

impl ResultSet {
    /// Renders the output file body: one line per entry, newline-separated,
    /// no trailing newline after the last line.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
