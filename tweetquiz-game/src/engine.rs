//! Round loop: `AwaitingRoundCount -> Round* -> Finished`.
use crate::console::Console;
use crate::pool::{QuizPools, Side};
use crate::score::{RoundResult, Scoreboard};
use rand::Rng;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tweetquiz_common::{QuizError, Result};

/// Pauses that give the game its rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// After "You ready?".
    pub warmup: Duration,
    /// After every round.
    pub between_rounds: Duration,
}

impl Pacing {
    pub fn new(round_delay: Duration) -> Self {
        Self {
            warmup: round_delay,
            between_rounds: round_delay,
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

pub struct QuizEngine<'p> {
    pools: &'p QuizPools,
    pacing: Pacing,
}

impl<'p> QuizEngine<'p> {
    pub fn new(pools: &'p QuizPools, pacing: Pacing) -> Self {
        Self { pools, pacing }
    }

    /// Play a full game and return the final score.
    ///
    /// `rounds` skips the prompt when already known. Fails with
    /// [`QuizError::EmptyPool`] before the first round if there is nothing to
    /// ask about; zero rounds never touch the pools.
    pub fn play<R, W, G>(
        &self,
        console: &mut Console<R, W>,
        rng: &mut G,
        rounds: Option<u32>,
    ) -> Result<Scoreboard>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let rounds = match rounds {
            Some(n) => n,
            None => console.ask_round_count()?,
        };

        if rounds > 0 && self.pools.is_empty() {
            let pair = self.pools.pair();
            return Err(QuizError::EmptyPool {
                first: pair.first.clone(),
                second: pair.second.clone(),
            });
        }

        tracing::info!(
            rounds,
            first_pool = self.pools.pool(Side::First).len(),
            second_pool = self.pools.pool(Side::Second).len(),
            "quiz.start"
        );

        if rounds > 0 {
            console.say("You ready?")?;
            pause(self.pacing.warmup);
        }

        let board = (1..=rounds).try_fold(Scoreboard::default(), |board, round| {
            let result = self.play_round(console, rng, round)?;
            Ok::<_, QuizError>(board.record(&result))
        })?;

        tracing::info!(rounds = board.rounds, correct = board.correct, "quiz.finished");
        console.summary(&board)?;
        Ok(board)
    }

    /// One round: sample, show, read a guess, judge.
    pub fn play_round<R, W, G>(
        &self,
        console: &mut Console<R, W>,
        rng: &mut G,
        round: u32,
    ) -> Result<RoundResult>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let pair = self.pools.pair();
        let text = self.pools.sample(rng).ok_or_else(|| QuizError::EmptyPool {
            first: pair.first.clone(),
            second: pair.second.clone(),
        })?;
        let actual = self.pools.attribute(text);

        console.say(format_args!("\nRound {round}"))?;
        console.say("Can you guess who tweeted this?")?;
        console.say(text)?;

        let guess = console.ask_guess(pair)?;
        let result = RoundResult {
            round,
            text: text.to_string(),
            guess,
            actual,
        };

        if result.is_correct() {
            console.say("Correct!")?;
        } else {
            console.say(format_args!("Incorrect. It was {}.", actual.handle(pair)))?;
        }
        tracing::debug!(round, correct = result.is_correct(), "quiz.round");

        console.separator()?;
        pause(self.pacing.between_rounds);
        Ok(result)
    }
}
