#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

#[macro_use]
mod logging;

pub mod models;
pub mod components;
pub mod storage;
pub mod api;
pub mod constants;
pub mod network;
pub mod roulette;
pub mod recommendations;
pub mod journey;

pub use components::app::App;
pub use journey::{JourneyEngine, SpinResult};
pub use network::MetroNetwork;
