#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod cellset;
mod common;
mod config;
mod fleet;
mod game;
mod history;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use ai::*;
pub use board::*;
pub use cellset::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use history::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
