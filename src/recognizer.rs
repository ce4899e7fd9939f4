//! Finite-state recognizer for the `(ab)+(cd)*` pattern language
//!
//! The automaton reads one symbol at a time starting from [`State::Q0`].
//! [`State::Q2`] (after at least one `ab`) and [`State::Q4`] (after at least
//! one trailing `cd`) are accepting. Any symbol without a transition sends the
//! machine to [`State::Reject`], which is absorbing, so recognition stops there.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Words classified by the `recognize` command when none are given.
pub const DEMO_WORDS: [&str; 12] = [
    "ab", "abab", "abcd", "ababcdcd", "abcdcd", "ababcd", "cd", "a", "abb", "abcdab", "", "ababc",
];

/// A state of the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Start, waiting for the `a` of the first pair
    Q0,
    /// Read `a`, waiting for `b`
    Q1,
    /// Read at least one `ab` (accepting)
    Q2,
    /// Read the `c` of a `cd` pair
    Q3,
    /// Read at least one `cd` (accepting)
    Q4,
    Reject,
}

impl State {
    pub const INITIAL: State = State::Q0;

    /// Transition function. Total over every `char`.
    pub fn next(self, symbol: char) -> State {
        match (self, symbol) {
            (State::Q0, 'a') => State::Q1,
            (State::Q1, 'b') => State::Q2,
            (State::Q2, 'a') => State::Q1,
            (State::Q2, 'c') => State::Q3,
            (State::Q3, 'd') => State::Q4,
            (State::Q4, 'c') => State::Q3,
            _ => State::Reject,
        }
    }

    pub fn is_accepting(self) -> bool {
        matches!(self, State::Q2 | State::Q4)
    }

    pub fn is_reject(self) -> bool {
        self == State::Reject
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Q0 => "Q0",
            State::Q1 => "Q1",
            State::Q2 => "Q2",
            State::Q3 => "Q3",
            State::Q4 => "Q4",
            State::Reject => "REJECT",
        };
        f.write_str(name)
    }
}

/// Where a run of the automaton stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognition {
    /// Final state (or `Reject` if the run was cut short)
    pub state: State,
    /// Number of symbols read, including the one that caused a rejection
    pub consumed: usize,
}

impl Recognition {
    pub fn accepted(&self) -> bool {
        self.state.is_accepting()
    }
}

/// Run the automaton over `symbols`, stopping at the first rejection.
pub fn run<I>(symbols: I) -> Recognition
where
    I: IntoIterator<Item = char>,
{
    let mut state = State::INITIAL;
    let mut consumed = 0;

    for symbol in symbols {
        state = state.next(symbol);
        consumed += 1;
        if state.is_reject() {
            log::debug!("rejected at symbol {consumed} ({symbol:?})");
            break;
        }
    }

    Recognition { state, consumed }
}

/// Whether `input` belongs to `(ab)+(cd)*`.
///
/// # Examples
///
/// ```
/// use automata_search::recognizer::accepts;
///
/// assert!(accepts("abab"));
/// assert!(accepts("abcdcd"));
/// assert!(!accepts(""));
/// assert!(!accepts("cd"));
/// ```
pub fn accepts(input: &str) -> bool {
    run(input.chars()).accepted()
}
