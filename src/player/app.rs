//! The player context object
//!
//! `MusicPlayer` owns the song library, the playlist registry, the active
//! strategy and the active output device. It is built explicitly and passed
//! to whoever needs it; teardown happens in `shutdown` (or on drop).

use super::config::PlayerConfig;
use crate::device::external::BluetoothStack;
use crate::device::{DeviceFactory, DeviceType, OutputDevice};
use crate::error::{PlayerError, Result};
use crate::model::{PlaylistRegistry, SongLibrary, SongRef};
use crate::strategy::{PlayStrategy, StrategyKind};
use std::fmt;
use std::path::PathBuf;

/// What `shutdown` released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShutdownReport {
    pub device_disconnected: bool,
    pub playlists_released: usize,
    pub songs_released: usize,
    /// Bluetooth handles still open afterwards; 0 on a clean shutdown
    pub open_handles: usize,
}

impl fmt::Display for ShutdownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "device disconnected: {}, playlists released: {}, songs released: {}, open handles: {}",
            self.device_disconnected, self.playlists_released, self.songs_released, self.open_handles
        )
    }
}

/// Music player application context
pub struct MusicPlayer {
    config: PlayerConfig,
    library: SongLibrary,
    playlists: PlaylistRegistry,
    strategy: PlayStrategy,
    /// Name of the playlist last passed to `load_playlist`
    loaded: Option<String>,
    devices: DeviceFactory,
    device: Option<OutputDevice>,
    closed: bool,
}

impl MusicPlayer {
    /// Create a player with the configured strategy and no device
    pub fn new(config: PlayerConfig) -> Self {
        log::info!(
            "Music player starting ({} playback)",
            config.strategy.name()
        );

        Self {
            strategy: PlayStrategy::new(config.strategy, config.seed),
            devices: DeviceFactory::new(config.bluetooth_name.clone()),
            config,
            library: SongLibrary::new(),
            playlists: PlaylistRegistry::new(),
            loaded: None,
            device: None,
            closed: false,
        }
    }

    pub fn create_song_in_library(
        &mut self,
        title: &str,
        artist: &str,
        file_path: impl Into<PathBuf>,
    ) -> Result<SongRef> {
        self.library.create_song(title, artist, file_path)
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.create_playlist(name)
    }

    /// Delete a playlist. If it was loaded, the player forgets it.
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.delete_playlist(name)?;
        if self.loaded.as_deref() == Some(name) {
            // A random strategy holds its own snapshot of the songs
            self.strategy.unbind();
            self.loaded = None;
        }
        Ok(())
    }

    pub fn add_song_to_playlist(&mut self, playlist: &str, title: &str) -> Result<()> {
        let song = self.library.get_song(title)?;
        self.playlists.add_song_to_playlist(playlist, song)
    }

    /// Remove every occurrence of a song; false if it was not in the playlist
    pub fn remove_song_from_playlist(&mut self, playlist: &str, title: &str) -> Result<bool> {
        let song = self.library.get_song(title)?;
        self.playlists.remove_song_from_playlist(playlist, &song)
    }

    /// Connect an output, disconnecting (and releasing) the previous one
    pub fn connect_audio_device(&mut self, kind: DeviceType) {
        if let Some(previous) = self.device.take() {
            log::info!("{} disconnected", previous.name());
        }
        self.device = Some(self.devices.connect(kind));
    }

    /// Switch play order. A loaded playlist is bound to the new strategy.
    pub fn select_play_strategy(&mut self, kind: StrategyKind) {
        self.strategy = PlayStrategy::new(kind, self.config.seed);
        log::info!("Play strategy set to {}", kind.name());

        if let Some(name) = &self.loaded {
            if let Ok(playlist) = self.playlists.get_playlist(name) {
                self.strategy.set_playlist(&playlist);
            }
        }
    }

    /// Bind a playlist to the active strategy, restarting traversal.
    ///
    /// On failure the previous binding stays in place.
    pub fn load_playlist(&mut self, name: &str) -> Result<()> {
        let playlist = self.playlists.get_playlist(name)?;
        self.strategy.set_playlist(&playlist);
        self.loaded = Some(name.to_string());
        log::info!("Playlist \"{}\" loaded", name);
        Ok(())
    }

    /// Play until the strategy is exhausted. Returns the number of songs played.
    pub fn play_all_tracks_in_playlist(&mut self) -> Result<usize> {
        let device = self.device.as_mut().ok_or(PlayerError::NoDeviceConnected)?;
        if !self.strategy.is_bound() {
            return Err(PlayerError::EmptyTraversal);
        }

        let mut played = 0;
        while self.strategy.has_next() {
            let song = self.strategy.next()?;
            device.play_audio(&song);
            played += 1;
        }

        if played == 0 {
            log::warn!("Nothing left to play");
        } else {
            log::info!("Played {} song(s) on {}", played, device.name());
        }
        Ok(played)
    }

    /// Play the next song chosen by the strategy
    pub fn play_next_track(&mut self) -> Result<SongRef> {
        let device = self.device.as_mut().ok_or(PlayerError::NoDeviceConnected)?;
        let song = self.strategy.next()?;
        device.play_audio(&song);
        Ok(song)
    }

    /// Step the strategy back and replay that song
    pub fn play_previous_track(&mut self) -> Result<SongRef> {
        let device = self.device.as_mut().ok_or(PlayerError::NoDeviceConnected)?;
        let song = self.strategy.previous()?;
        device.play_audio(&song);
        Ok(song)
    }

    /// Play one song from the library, bypassing the strategy
    pub fn play_single_song(&mut self, title: &str) -> Result<()> {
        let device = self.device.as_mut().ok_or(PlayerError::NoDeviceConnected)?;
        let song = self.library.get_song(title)?;
        device.play_audio(&song);
        Ok(())
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn library(&self) -> &SongLibrary {
        &self.library
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    pub fn strategy(&self) -> &PlayStrategy {
        &self.strategy
    }

    pub fn loaded_playlist(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn active_device(&self) -> Option<&OutputDevice> {
        self.device.as_ref()
    }

    /// Bluetooth SDK state, for checking handle release
    pub fn bluetooth(&self) -> &BluetoothStack {
        self.devices.bluetooth()
    }

    /// Tear everything down in order: strategy, device, playlists, songs
    pub fn shutdown(mut self) -> ShutdownReport {
        self.teardown()
    }

    fn teardown(&mut self) -> ShutdownReport {
        if self.closed {
            return ShutdownReport {
                open_handles: self.bluetooth().open_handles(),
                ..ShutdownReport::default()
            };
        }
        self.closed = true;

        self.strategy.unbind();
        self.loaded = None;

        let device_disconnected = match self.device.take() {
            Some(device) => {
                log::info!("{} disconnected", device.name());
                true
            }
            None => false,
        };

        let playlists_released = self.playlists.clear();
        let songs_released = self.library.clear();

        let report = ShutdownReport {
            device_disconnected,
            playlists_released,
            songs_released,
            open_handles: self.bluetooth().open_handles(),
        };
        log::info!("Music player shut down ({})", report);
        report
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        self.teardown();
    }
}
