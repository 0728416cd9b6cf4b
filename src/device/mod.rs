//! Audio output devices
//!
//! Each output wraps a (simulated) vendor API behind the same
//! `play_audio` call. The set of outputs is fixed, so `OutputDevice` is an
//! enum. The Bluetooth variant owns a raw SDK handle and releases it when the
//! device is dropped.

mod bluetooth;
pub mod external;
mod headphones;
mod wired;

pub use bluetooth::BluetoothSpeakerAdapter;
pub use headphones::HeadphonesAdapter;
pub use wired::WiredSpeakerAdapter;

use crate::model::Song;
use external::{BluetoothStack, HeadphonesApi, WiredSpeakerApi};
use serde::{Deserialize, Serialize};

/// Kind of output to connect
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Bluetooth,
    Wired,
    #[default]
    Headphones,
}

impl DeviceType {
    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Bluetooth => "Bluetooth speaker",
            DeviceType::Wired => "Wired speaker",
            DeviceType::Headphones => "Headphones",
        }
    }
}

/// A connected output
#[derive(Debug)]
pub enum OutputDevice {
    Bluetooth(BluetoothSpeakerAdapter),
    Wired(WiredSpeakerAdapter),
    Headphones(HeadphonesAdapter),
}

impl OutputDevice {
    /// Render one song
    pub fn play_audio(&mut self, song: &Song) {
        match self {
            OutputDevice::Bluetooth(d) => d.play_audio(song),
            OutputDevice::Wired(d) => d.play_audio(song),
            OutputDevice::Headphones(d) => d.play_audio(song),
        }
    }

    pub fn kind(&self) -> DeviceType {
        match self {
            OutputDevice::Bluetooth(_) => DeviceType::Bluetooth,
            OutputDevice::Wired(_) => DeviceType::Wired,
            OutputDevice::Headphones(_) => DeviceType::Headphones,
        }
    }

    /// Display name of the device
    pub fn name(&self) -> &str {
        match self {
            OutputDevice::Bluetooth(d) => d.name(),
            other => other.kind().name(),
        }
    }

    /// Payloads sent to the device so far
    pub fn transmitted(&self) -> &[String] {
        match self {
            OutputDevice::Bluetooth(d) => d.transmitted(),
            OutputDevice::Wired(d) => d.transmitted(),
            OutputDevice::Headphones(d) => d.transmitted(),
        }
    }
}

/// Builds output devices, owning the vendor SDK state they need
#[derive(Debug, Clone)]
pub struct DeviceFactory {
    bluetooth: BluetoothStack,
    bluetooth_name: String,
}

impl DeviceFactory {
    pub fn new(bluetooth_name: impl Into<String>) -> Self {
        Self {
            bluetooth: BluetoothStack::new(),
            bluetooth_name: bluetooth_name.into(),
        }
    }

    /// Open a new device of the requested kind
    pub fn connect(&self, kind: DeviceType) -> OutputDevice {
        let device = match kind {
            DeviceType::Bluetooth => OutputDevice::Bluetooth(BluetoothSpeakerAdapter::new(
                self.bluetooth.pair(&self.bluetooth_name),
            )),
            DeviceType::Wired => {
                OutputDevice::Wired(WiredSpeakerAdapter::new(WiredSpeakerApi::new()))
            }
            DeviceType::Headphones => {
                OutputDevice::Headphones(HeadphonesAdapter::new(HeadphonesApi::new()))
            }
        };
        log::info!("{} connected", device.name());
        device
    }

    /// The Bluetooth SDK shared by every device this factory opens
    pub fn bluetooth(&self) -> &BluetoothStack {
        &self.bluetooth
    }
}
