use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::{BufRead, Write};

use tracing::info;

use crate::alphabet::normalize;
use crate::boggle::board::Board;
use crate::boggle::solver::find_valid_words;
use crate::error::Result;
use crate::wordlist::index::Index;

pub const PROMPT: &str = "Please type valid words you can generate from this board, separated by space.";
pub const UNEXPECTED_COUNT: &str = "Your list of words is not as expected";
pub const ALL_CLEAR: &str = "Great job!";

/// How a player's list compares to the words actually on the board.
/// Comparisons ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// Everything the solver found.
    pub expected: BTreeSet<String>,
    /// Distinct words the player typed.
    pub guessed: usize,
    /// Player words that aren't on the board, in the order typed.
    pub invalid: Vec<String>,
    /// Board words the player didn't list.
    pub missed: Vec<String>,
}

impl PlayReport {
    pub fn evaluate<'a, I>(guesses: I, expected: BTreeSet<String>) -> PlayReport
        where I: IntoIterator<Item=&'a str> {
        let on_board: HashMap<String, String> = expected.iter()
            .map(|word| (normalize(word), word.clone()))
            .collect();

        let mut seen = HashSet::new();
        let mut invalid = vec![];
        for guess in guesses {
            let key = normalize(guess);
            if seen.insert(key.clone()) && !on_board.contains_key(&key) {
                invalid.push(guess.to_string());
            }
        }
        let missed = on_board.iter()
            .filter(|(key, _)| !seen.contains(*key))
            .map(|(_, word)| word.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        PlayReport { guessed: seen.len(), invalid, missed, expected }
    }

    pub fn count_matches(&self) -> bool {
        self.guessed == self.expected.len()
    }

    pub fn is_perfect(&self) -> bool {
        self.invalid.is_empty() && self.missed.is_empty()
    }
}

/// Plays one round: shows the board, reads the player's words from one line of
/// `input` and writes feedback to `output`.
pub fn play<D, R, W>(board: &Board, dictionary: &D, mut input: R, mut output: W) -> Result<PlayReport>
    where D: Index + ?Sized, R: BufRead, W: Write {
    write!(output, "{}", board)?;
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let expected = find_valid_words(board, dictionary)?;
    let report = PlayReport::evaluate(line.split_whitespace(), expected);
    info!("Player listed {} words, board has {}", report.guessed, report.expected.len());

    if !report.count_matches() {
        writeln!(output, "{}", UNEXPECTED_COUNT)?;
        writeln!(output, "{}", report.expected.iter().cloned().collect::<Vec<_>>().join(" "))?;
    }
    if !report.invalid.is_empty() {
        writeln!(output, "Invalid words: {}", report.invalid.join(" "))?;
    }
    if report.is_perfect() {
        writeln!(output, "{}", ALL_CLEAR)?;
    }
    Ok(report)
}
