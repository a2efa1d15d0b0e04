use crate::pool::Side;

/// Outcome of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// 1-based.
    pub round: u32,
    pub text: String,
    pub guess: Side,
    pub actual: Side,
}

impl RoundResult {
    pub fn is_correct(&self) -> bool {
        self.guess == self.actual
    }
}

/// Running tally. Only ever advanced through [`Scoreboard::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub rounds: u32,
    pub correct: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn record(self, result: &RoundResult) -> Self {
        Self {
            rounds: self.rounds + 1,
            correct: self.correct + u32::from(result.is_correct()),
        }
    }
}
