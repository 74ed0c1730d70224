use engine::model::game::{resolve, Move, Outcome};
use engine::model::roster::Opponent;
use engine::stats::GameStats;
use engine::strategy::select_move;
use rand::RngCore;
use tracing::debug;

/// One completed round, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
}

/// A play session against one opponent. Owns the session-scoped move
/// history (never persisted) and the running statistics record.
pub struct Session {
    opponent: Opponent,
    history: Vec<Move>,
    rounds: Vec<RoundReport>,
    stats: GameStats,
}

impl Session {
    pub fn new(opponent: Opponent, stats: GameStats) -> Self {
        Session {
            opponent,
            history: Vec::new(),
            rounds: Vec::new(),
            stats,
        }
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    pub fn reset_stats(&mut self) {
        self.stats = GameStats::default();
    }

    /// Play one round. The opponent picks from the history as it stood
    /// before this round; the outcome is folded into the stats exactly
    /// once.
    pub fn play_round(&mut self, player_move: Move, rng: &mut dyn RngCore) -> RoundReport {
        let opponent_move = select_move(self.opponent.difficulty, &self.history, rng);
        let outcome = resolve(player_move, opponent_move);
        debug!(
            %player_move,
            %opponent_move,
            round = self.rounds.len() + 1,
            "round resolved"
        );

        self.history.push(player_move);
        self.stats = self.stats.apply(outcome);
        let report = RoundReport {
            player_move,
            opponent_move,
            outcome,
        };
        self.rounds.push(report);
        report
    }
}
