use serde::{Deserialize, Serialize};

use crate::model::game::Outcome;

/// Running player statistics; the only record that outlives a session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_streak: u32,
    pub best_win_streak: u32,
}

impl GameStats {
    /// Fold one round outcome into the record. Returns a new record;
    /// call exactly once per completed round.
    pub fn apply(&self, outcome: Outcome) -> GameStats {
        let mut next = *self;
        next.total_games += 1;
        match outcome {
            Outcome::Win => {
                next.wins += 1;
                next.win_streak += 1;
                next.best_win_streak = next.best_win_streak.max(next.win_streak);
            }
            Outcome::Loss => {
                next.losses += 1;
                next.win_streak = 0;
            }
            Outcome::Draw => {
                next.draws += 1;
            }
        }
        next
    }

    /// Fraction of games won, zero before any game is played.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_a_mixed_sequence() {
        let outcomes = [
            Outcome::Win,
            Outcome::Win,
            Outcome::Loss,
            Outcome::Draw,
            Outcome::Win,
        ];
        let stats = outcomes
            .iter()
            .fold(GameStats::default(), |acc, o| acc.apply(*o));
        assert_eq!(
            stats,
            GameStats {
                total_games: 5,
                wins: 3,
                losses: 1,
                draws: 1,
                win_streak: 1,
                best_win_streak: 2,
            }
        );
    }

    #[test]
    fn draw_leaves_the_streak_alone() {
        let stats = GameStats::default()
            .apply(Outcome::Win)
            .apply(Outcome::Draw);
        assert_eq!(stats.win_streak, 1);
        assert_eq!(stats.draws, 1);
    }

    #[test]
    fn loss_resets_the_streak_but_not_the_best() {
        let stats = GameStats::default()
            .apply(Outcome::Win)
            .apply(Outcome::Win)
            .apply(Outcome::Loss);
        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.best_win_streak, 2);
    }

    #[test]
    fn apply_does_not_mutate_its_input() {
        let zero = GameStats::default();
        let _ = zero.apply(Outcome::Win);
        assert_eq!(zero, GameStats::default());
    }

    #[test]
    fn win_rate_guards_division_by_zero() {
        assert_eq!(GameStats::default().win_rate(), 0.0);
        let stats = GameStats::default()
            .apply(Outcome::Win)
            .apply(Outcome::Loss);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
    }
}
