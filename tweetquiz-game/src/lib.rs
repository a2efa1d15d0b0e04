//! The quiz itself: sample a post from two pooled accounts, ask who wrote it,
//! keep score.
//!
//! The engine is a fold over rounds. [`Scoreboard`] is the accumulator and each
//! [`RoundResult`] is one step; nothing else carries state between rounds.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use std::io::Cursor;
//! use tweetquiz_common::AccountPair;
//! use tweetquiz_game::{Console, Pacing, QuizEngine, QuizPools};
//!
//! let pools = QuizPools::new(
//!     AccountPair::new("pizzafan", "tacofan"),
//!     vec!["I love pizza".into()],
//!     vec![],
//! );
//! let mut console = Console::new(Cursor::new("2\n1\npizzafan\n"), Vec::new());
//! let board = QuizEngine::new(&pools, Pacing::none())
//!     .play(&mut console, &mut StdRng::seed_from_u64(1), None)
//!     .unwrap();
//! assert_eq!((board.rounds, board.correct), (2, 2));
//! ```
pub mod console;
pub mod engine;
pub mod guess;
pub mod pool;
pub mod score;

pub use console::Console;
pub use engine::{Pacing, QuizEngine};
pub use guess::parse_guess;
pub use pool::{QuizPools, Side};
pub use score::{RoundResult, Scoreboard};
