//! # tally-utils
//!
//! Small utilities that live next to the log reporter:
//!
//! - [`FibCache`] — Fibonacci numbers memoized in an owned cache
//! - [`generator_numbers`] / [`sum_profit`] — Numbers in free text and their sum
//! - [`Bot`] — Contact assistant driven by `add`/`change`/`phone`/`all` commands
//!
//! ## Example
//!
//! ```rust
//! use tally_utils::{generator_numbers, sum_profit, Bot, FibCache, Reply};
//!
//! let mut fib = FibCache::new();
//! assert_eq!(fib.get(10), Ok(55));
//!
//! assert_eq!(sum_profit("paid 100 and 20.5", generator_numbers), 120.5);
//!
//! let mut bot = Bot::new();
//! bot.handle("add Ann 555");
//! assert_eq!(bot.handle("phone Ann"), Reply::Continue("555".into()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bot;
pub mod error;
pub mod fib;
pub mod numbers;

pub use bot::{parse_input, run_session, Bot, Reply};
pub use error::{BotError, FibError};
pub use fib::FibCache;
pub use numbers::{generator_numbers, sum_profit, Numbers};
