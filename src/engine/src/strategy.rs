use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::game::Move;

/// Opponent skill tier; selects which inference strategy drives the
/// computer's move.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Resolve a user-facing name. Unknown names yield `None`; callers
    /// decide how to degrade before a tier ever reaches the engine.
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &BiasedRandom,
            Difficulty::Medium => &FrequencyCounter,
            Difficulty::Hard => &PatternMatcher,
            Difficulty::Expert => &AdaptivePredictor,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        write!(f, "{}", name)
    }
}

/// A move-selection policy over the player's observed history.
///
/// `history` is the player's past moves for the session, oldest first,
/// and never includes the move currently being played. All randomness
/// comes from the supplied generator.
pub trait Strategy {
    fn make_move(&self, history: &[Move], rng: &mut dyn RngCore) -> Move;
}

/// Pick the opponent's next move for the given tier.
pub fn select_move(difficulty: Difficulty, history: &[Move], rng: &mut dyn RngCore) -> Move {
    difficulty.strategy().make_move(history, rng)
}

fn random_move(rng: &mut dyn RngCore) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}

/// Easy: no history analysis, just a mild exploitable lean toward rock.
pub struct BiasedRandom;

impl Strategy for BiasedRandom {
    fn make_move(&self, _history: &[Move], rng: &mut dyn RngCore) -> Move {
        if rng.gen_bool(0.4) {
            Move::Rock
        } else {
            random_move(rng)
        }
    }
}

/// Medium: counter the player's most frequent move over the last three
/// rounds. Ties break in `Move` declaration order.
pub struct FrequencyCounter;

impl Strategy for FrequencyCounter {
    fn make_move(&self, history: &[Move], rng: &mut dyn RngCore) -> Move {
        if history.len() < 3 {
            debug!(rounds = history.len(), "not enough history, playing random");
            return random_move(rng);
        }
        let recent = &history[history.len() - 3..];
        let mut counts = [0u32; 3];
        for m in recent {
            counts[m.index()] += 1;
        }
        let mut favorite = Move::Rock;
        for m in Move::ALL {
            if counts[m.index()] > counts[favorite.index()] {
                favorite = m;
            }
        }
        favorite.counter()
    }
}

/// Hard: tally every run of three consecutive player moves, treat the
/// most frequent run's last move as the prediction, and counter it.
pub struct PatternMatcher;

impl Strategy for PatternMatcher {
    fn make_move(&self, history: &[Move], rng: &mut dyn RngCore) -> Move {
        if history.len() < 5 {
            debug!(rounds = history.len(), "not enough history, playing random");
            return random_move(rng);
        }
        match most_frequent_window(history.windows(3)) {
            Some(pattern) => pattern[2].counter(),
            None => random_move(rng),
        }
    }
}

/// Expert: restrict the pattern table to four-move runs that end the way
/// the player's last two moves do, and counter the prediction from that
/// subset. With little history, fall back to a psychological read.
pub struct AdaptivePredictor;

impl Strategy for AdaptivePredictor {
    fn make_move(&self, history: &[Move], rng: &mut dyn RngCore) -> Move {
        if history.len() >= 7 {
            let tail = &history[history.len() - 2..];
            let similar = history.windows(4).filter(|w| &w[2..] == tail);
            return match most_frequent_window(similar) {
                Some(pattern) => pattern[3].counter(),
                None => random_move(rng),
            };
        }
        psychological_move(history, rng)
    }
}

/// Players rarely repeat a move three times; after a double, predict one
/// of the other two moves and counter it. Absent that signal, paper
/// counters the most common opening.
fn psychological_move(history: &[Move], rng: &mut dyn RngCore) -> Move {
    if let [.., a, b] = history {
        if a == b {
            let alternatives: Vec<Move> =
                Move::ALL.into_iter().filter(|m| m != b).collect();
            let predicted = alternatives[rng.gen_range(0..alternatives.len())];
            return predicted.counter();
        }
    }
    Move::Paper
}

/// Most frequent window, ties broken by first appearance in the history.
fn most_frequent_window<'a, I>(windows: I) -> Option<&'a [Move]>
where
    I: Iterator<Item = &'a [Move]>,
{
    let mut counts: Vec<(&[Move], u32)> = Vec::new();
    for window in windows {
        match counts.iter_mut().find(|(seen, _)| *seen == window) {
            Some(entry) => entry.1 += 1,
            None => counts.push((window, 1)),
        }
    }
    let mut best: Option<(&[Move], u32)> = None;
    for (window, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((window, count));
        }
    }
    best.map(|(window, _)| window)
}
