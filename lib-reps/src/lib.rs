#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

pub mod clock;
pub use clock::*;

pub mod edge_detection;
pub use edge_detection::*;

pub mod cadence;
pub use cadence::*;

pub mod progress;
pub use progress::*;

pub mod display;
pub use display::*;

pub mod navigation;
pub use navigation::*;

pub mod session;
pub use session::*;

pub mod wire;
pub use wire::*;

#[cfg(test)]
mod tests;
