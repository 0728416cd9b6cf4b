//! Player orchestration and configuration

pub mod app;
pub mod config;

pub use app::{MusicPlayer, ShutdownReport};
pub use config::PlayerConfig;
