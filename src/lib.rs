#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_at, parse_level, LOG_ENV};
pub use player::{AiPlayer, Player};
