//! Player configuration

use crate::device::DeviceType;
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Configuration for a player session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Output connected by the demo script
    pub device: DeviceType,

    /// Play order the player starts with
    pub strategy: StrategyKind,

    /// Seed for the random strategy (None = OS entropy)
    pub seed: Option<u64>,

    /// Display name of the simulated Bluetooth speaker
    pub bluetooth_name: String,
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self {
            device: DeviceType::default(),
            strategy: StrategyKind::default(),
            seed: None,
            bluetooth_name: "Bluetooth Speaker".to_string(),
        }
    }

    pub fn with_device(mut self, device: DeviceType) -> Self {
        self.device = device;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fix the random strategy's seed for reproducible order
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bluetooth_name(mut self, name: impl Into<String>) -> Self {
        self.bluetooth_name = name.into();
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
