//! Bluetooth speaker adapter
//!
//! Owns a raw SDK handle from construction and releases it exactly once,
//! when the adapter is dropped.

use super::external::RawSpeakerHandle;
use crate::model::Song;

pub struct BluetoothSpeakerAdapter {
    /// Always `Some` until `Drop` takes it
    handle: Option<RawSpeakerHandle>,
}

impl BluetoothSpeakerAdapter {
    /// Take ownership of an open handle
    pub fn new(handle: RawSpeakerHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn play_audio(&mut self, song: &Song) {
        if let Some(handle) = self.handle.as_mut() {
            handle.play_sound_via_bluetooth(&song.display_line());
        }
    }

    pub fn name(&self) -> &str {
        self.handle.as_ref().map(|h| h.name()).unwrap_or("")
    }

    pub fn transmitted(&self) -> &[String] {
        self.handle
            .as_ref()
            .map(|h| h.transmitted())
            .unwrap_or(&[])
    }
}

impl std::fmt::Debug for BluetoothSpeakerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BluetoothSpeakerAdapter")
            .field("name", &self.name())
            .field("handle", &self.handle.as_ref().map(|h| h.id()))
            .finish()
    }
}

impl Drop for BluetoothSpeakerAdapter {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
        }
    }
}
