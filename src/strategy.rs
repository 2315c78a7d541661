//! Strategy: players of rock-paper-scissors delegate the choice of hand to
//! a swappable `Strategy`. The game loop never knows which one it drives.

use crate::config::StrategyConfig;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Rock,
    Scissors,
    Paper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Even,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    pub fn from_index(index: usize) -> Hand {
        Self::ALL[index % 3]
    }

    pub fn index(self) -> usize {
        match self {
            Hand::Rock => 0,
            Hand::Scissors => 1,
            Hand::Paper => 2,
        }
    }

    /// Each hand beats the one listed after it, wrapping around.
    pub fn fight(self, other: Hand) -> Outcome {
        if self == other {
            Outcome::Even
        } else if (self.index() + 1) % 3 == other.index() {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn is_stronger_than(self, other: Hand) -> bool {
        self.fight(other) == Outcome::Win
    }

    pub fn is_weaker_than(self, other: Hand) -> bool {
        self.fight(other) == Outcome::Lose
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Hand::Rock => "Rock",
            Hand::Scissors => "Scissors",
            Hand::Paper => "Paper",
        };
        f.write_str(name)
    }
}

pub trait Strategy {
    fn next_hand(&mut self) -> Hand;
    fn study(&mut self, win: bool);
}

/// Keeps playing a hand while it wins; picks at random after a loss.
pub struct WinningStrategy<R: Rng> {
    rng: R,
    won: bool,
    prev: Hand,
}

impl<R: Rng> WinningStrategy<R> {
    pub fn new(rng: R) -> Self {
        WinningStrategy {
            rng,
            won: false,
            prev: Hand::Rock,
        }
    }
}

impl<R: Rng> Strategy for WinningStrategy<R> {
    fn next_hand(&mut self) -> Hand {
        if !self.won {
            self.prev = Hand::from_index(self.rng.gen_range(0..3));
        }
        self.prev
    }

    fn study(&mut self, win: bool) {
        self.won = win;
    }
}

/// Weights the next hand by how often each hand won after the previous one.
pub struct ProbStrategy<R: Rng> {
    rng: R,
    prev: usize,
    current: usize,
    history: [[u32; 3]; 3],
}

impl<R: Rng> ProbStrategy<R> {
    pub fn new(rng: R) -> Self {
        ProbStrategy {
            rng,
            prev: 0,
            current: 0,
            history: [[1; 3]; 3],
        }
    }

    fn weight_sum(&self, row: usize) -> u32 {
        self.history[row].iter().sum()
    }
}

impl<R: Rng> Strategy for ProbStrategy<R> {
    fn next_hand(&mut self) -> Hand {
        let row = self.history[self.current];
        let bet = self.rng.gen_range(0..self.weight_sum(self.current));
        let next = if bet < row[0] {
            0
        } else if bet < row[0] + row[1] {
            1
        } else {
            2
        };
        self.prev = self.current;
        self.current = next;
        Hand::from_index(next)
    }

    fn study(&mut self, win: bool) {
        if win {
            self.history[self.prev][self.current] += 1;
        } else {
            self.history[self.prev][(self.current + 1) % 3] += 1;
            self.history[self.prev][(self.current + 2) % 3] += 1;
        }
    }
}

pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
    wins: u32,
    losses: u32,
    games: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Player {
            name: name.into(),
            strategy,
            wins: 0,
            losses: 0,
            games: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn next_hand(&mut self) -> Hand {
        self.strategy.next_hand()
    }

    pub fn win(&mut self) {
        self.strategy.study(true);
        self.wins += 1;
        self.games += 1;
    }

    pub fn lose(&mut self) {
        self.strategy.study(false);
        self.losses += 1;
        self.games += 1;
    }

    pub fn even(&mut self) {
        self.games += 1;
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn games(&self) -> u32 {
        self.games
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}: {} games, {} win, {} lose]",
            self.name, self.games, self.wins, self.losses
        )
    }
}

/// Plays `rounds` hands between the two players.
pub fn play(first: &mut Player, second: &mut Player, rounds: u32) {
    for round in 0..rounds {
        let a = first.next_hand();
        let b = second.next_hand();
        match a.fight(b) {
            Outcome::Win => {
                trace!(round, winner = first.name(), %a, %b);
                first.win();
                second.lose();
            }
            Outcome::Lose => {
                trace!(round, winner = second.name(), %a, %b);
                first.lose();
                second.win();
            }
            Outcome::Even => {
                trace!(round, %a, "even");
                first.even();
                second.even();
            }
        }
    }
}

pub fn demo(config: &StrategyConfig, out: &mut dyn Write) -> Result<()> {
    debug!(seed = config.seed, rounds = config.rounds, "starting match");
    let mut taro = Player::new(
        "Taro",
        Box::new(WinningStrategy::new(StdRng::seed_from_u64(config.seed))),
    );
    let mut hana = Player::new(
        "Hana",
        Box::new(ProbStrategy::new(StdRng::seed_from_u64(
            config.seed.wrapping_add(1),
        ))),
    );

    play(&mut taro, &mut hana, config.rounds);

    writeln!(out, "Total result:")?;
    writeln!(out, "{taro}")?;
    writeln!(out, "{hana}")?;
    Ok(())
}
