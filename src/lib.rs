//! Music Player - console music player demo
//!
//! Songs and playlists live in in-memory registries. A pluggable play
//! strategy (sequential or random) walks a playlist and hands each song to
//! the connected output device.

pub mod demo;
pub mod device;
pub mod error;
pub mod model;
pub mod player;
pub mod strategy;

pub use device::{DeviceType, OutputDevice};
pub use error::{PlayerError, Result};
pub use player::{MusicPlayer, PlayerConfig, ShutdownReport};
pub use strategy::{PlayStrategy, StrategyKind};
