mod session;
mod storage;

use std::io::{self, BufRead, Write};

use engine::model::game::{Move, Outcome};
use engine::model::roster::{Opponent, OPPONENTS};
use engine::stats::GameStats;
use engine::strategy::Difficulty;
use tracing::{warn, Level};

use crate::session::{RoundReport, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Move),
    Stats,
    Reset,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "rock" | "r" => Some(Command::Play(Move::Rock)),
        "paper" | "p" => Some(Command::Play(Move::Paper)),
        "scissors" | "s" => Some(Command::Play(Move::Scissors)),
        "stats" => Some(Command::Stats),
        "reset" => Some(Command::Reset),
        "help" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(Level::INFO)
        .init();

    let stats = storage::load_stats();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Rock, paper, scissors!");
    let Some(opponent) = pick_opponent(&mut lines) else {
        return;
    };
    println!(
        "You face {} {} ({}).",
        opponent.avatar, opponent.name, opponent.difficulty
    );
    print_help();

    let mut session = Session::new(opponent, stats);
    let mut rng = rand::thread_rng();
    loop {
        let Some(line) = prompt(&mut lines, "> ") else {
            break;
        };
        match parse_command(&line) {
            Some(Command::Play(player_move)) => {
                let report = session.play_round(player_move, &mut rng);
                print_report(session.opponent(), &report);
                persist(&session.stats());
            }
            Some(Command::Stats) => print_stats(&session.stats()),
            Some(Command::Reset) => {
                session.reset_stats();
                persist(&session.stats());
                println!("Statistics reset.");
            }
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
            None => println!("Unrecognized input, type 'help' for commands."),
        }
    }

    println!(
        "Thanks for playing! {} rounds this session.",
        session.rounds_played()
    );
}

fn pick_opponent<R: BufRead>(lines: &mut io::Lines<R>) -> Option<Opponent> {
    println!("Pick your opponent:");
    for (index, opponent) in OPPONENTS.iter().enumerate() {
        println!(
            "  {}. {} {} ({})",
            index + 1,
            opponent.avatar,
            opponent.name,
            opponent.difficulty
        );
    }
    loop {
        let line = prompt(lines, "opponent> ")?;
        let choice = line.trim();
        let found = choice
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=OPPONENTS.len()).contains(n))
            .map(|n| OPPONENTS[n - 1])
            .or_else(|| {
                Difficulty::from_name(choice)
                    .and_then(|d| OPPONENTS.iter().find(|o| o.difficulty == d).copied())
            });
        match found {
            Some(opponent) => return Some(opponent),
            None => println!("Pick 1-{} or a difficulty name.", OPPONENTS.len()),
        }
    }
}

fn prompt<R: BufRead>(lines: &mut io::Lines<R>, label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    lines.next()?.ok()
}

fn print_report(opponent: &Opponent, report: &RoundReport) {
    let verdict = match report.outcome {
        Outcome::Win => "You win!",
        Outcome::Loss => "You lose!",
        Outcome::Draw => "Draw!",
    };
    println!(
        "You played {}, {} {} played {}. {}",
        report.player_move, opponent.avatar, opponent.name, report.opponent_move, verdict
    );
}

fn print_stats(stats: &GameStats) {
    let win_rate = (stats.win_rate() * 100.0).round();
    println!("Games played:  {}", stats.total_games);
    println!(
        "Wins:          {} ({}%)",
        stats.wins, win_rate
    );
    println!("Losses:        {}", stats.losses);
    println!("Draws:         {}", stats.draws);
    println!("Win streak:    {}", stats.win_streak);
    println!("Best streak:   {}", stats.best_win_streak);
}

fn print_help() {
    println!("Commands: rock/paper/scissors (or r/p/s), stats, reset, help, quit");
}

fn persist(stats: &GameStats) {
    if let Err(error) = storage::save_stats(stats) {
        warn!(%error, "failed to persist statistics");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_parse_in_long_and_short_form() {
        assert_eq!(parse_command("rock"), Some(Command::Play(Move::Rock)));
        assert_eq!(parse_command(" R "), Some(Command::Play(Move::Rock)));
        assert_eq!(parse_command("p"), Some(Command::Play(Move::Paper)));
        assert_eq!(parse_command("Scissors"), Some(Command::Play(Move::Scissors)));
    }

    #[test]
    fn commands_parse() {
        assert_eq!(parse_command("stats"), Some(Command::Stats));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("lizard"), None);
    }
}
