//! Line-oriented terminal I/O for the quiz.
//!
//! Generic over [`BufRead`] and [`Write`] so the whole game can be driven from a
//! `Cursor` in tests. Malformed answers re-prompt; end of input is an error.
use crate::guess::parse_guess;
use crate::pool::Side;
use crate::score::Scoreboard;
use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use tweetquiz_common::{AccountPair, QuizError, Result, normalize_handle};

const SEPARATOR: &str = "---------------------------------";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` and read one line without its terminator.
    ///
    /// `what` names the expected answer in the error raised on end of input.
    pub fn ask(&mut self, prompt: &str, what: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::Input(format!(
                "input closed while waiting for {what}"
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn intro(&mut self) -> Result<()> {
        self.say("Welcome to Guess The Tweet!\n")?;
        self.say("The rules are simple:")?;
        self.say("\t1. You name two Twitter accounts.")?;
        self.say("\t2. I show you a tweet from one of them.")?;
        self.say("\t3. You guess which account wrote it.\n")
    }

    /// Ask for both handles. Blank answers and a repeated handle re-prompt.
    pub fn ask_accounts(&mut self) -> Result<AccountPair> {
        let first = self.ask_handle("\nType a Twitter username: ", None)?;
        let second = self.ask_handle("Type another Twitter username: ", Some(&first))?;
        Ok(AccountPair::new(first, second))
    }

    fn ask_handle(&mut self, prompt: &str, taken: Option<&str>) -> Result<String> {
        loop {
            let handle = normalize_handle(&self.ask(prompt, "a username")?);
            if handle.is_empty() {
                self.say("A username can't be blank.")?;
            } else if taken.is_some_and(|t| AccountPair::new(t, &handle).is_same_account()) {
                self.say("Pick a different account than the first one.")?;
            } else {
                return Ok(handle);
            }
        }
    }

    pub fn fetching(&mut self, pair: &AccountPair) -> Result<()> {
        self.say(format_args!(
            "Please wait. Getting tweets of {} and {}...",
            pair.first, pair.second
        ))
    }

    pub fn scrape_stats(&mut self, account: &str, fetched: usize, eligible: usize) -> Result<()> {
        self.say(format_args!("{account} Tweet Stats"))?;
        self.say("----------------------------")?;
        self.say(format_args!("Scraped Tweets: {fetched}"))?;
        self.say(format_args!("Filtered Tweets: {eligible}\n"))
    }

    pub fn ready(&mut self) -> Result<()> {
        self.say("\nDone. Let's start!")
    }

    /// Non-negative whole number of rounds; zero is allowed.
    pub fn ask_round_count(&mut self) -> Result<u32> {
        loop {
            let line = self.ask(
                "How many rounds do you want to play? - ",
                "the number of rounds",
            )?;
            match line.trim().parse::<u32>() {
                Ok(rounds) => return Ok(rounds),
                Err(_) => self.say("Please enter a whole number, 0 or more.")?,
            }
        }
    }

    pub fn ask_guess(&mut self, pair: &AccountPair) -> Result<Side> {
        let prompt = format!(
            "Type 1 or 2:\n(1) {}  (2) {}\n",
            pair.first, pair.second
        );
        loop {
            let line = self.ask(&prompt, "a guess")?;
            match parse_guess(&line, pair) {
                Some(side) => return Ok(side),
                None => self.say(format_args!(
                    "Please type 1, 2, {} or {}.",
                    pair.first, pair.second
                ))?,
            }
        }
    }

    pub fn separator(&mut self) -> Result<()> {
        self.say(format_args!("\n{SEPARATOR}"))
    }

    pub fn summary(&mut self, board: &Scoreboard) -> Result<()> {
        self.say("Game over.\n[Your game stats]")?;
        self.say(format_args!("Number of rounds: {}", board.rounds))?;
        self.say(format_args!("Correctly guessed: {}", board.correct))?;
        self.separator()?;
        self.say("Thank you for playing :)")
    }
}
