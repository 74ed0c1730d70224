use crate::strategy::Difficulty;

/// A built-in computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opponent {
    pub name: &'static str,
    pub avatar: &'static str,
    pub difficulty: Difficulty,
}

/// The built-in roster, one opponent per tier, weakest first.
pub const OPPONENTS: [Opponent; 4] = [
    Opponent {
        name: "Beginner Bot",
        avatar: "🤖",
        difficulty: Difficulty::Easy,
    },
    Opponent {
        name: "Smart Bot",
        avatar: "🧠",
        difficulty: Difficulty::Medium,
    },
    Opponent {
        name: "Master Bot",
        avatar: "👑",
        difficulty: Difficulty::Hard,
    },
    Opponent {
        name: "Legend Bot",
        avatar: "⚡",
        difficulty: Difficulty::Expert,
    },
];
