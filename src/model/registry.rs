use super::{Playlist, SharedPlaylist, SongRef};
use crate::error::{PlayerError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Playlist registry. Holds the only strong handle to each playlist.
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    playlists: BTreeMap<String, SharedPlaylist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self {
            playlists: BTreeMap::new(),
        }
    }

    /// Create an empty playlist
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        if self.playlists.contains_key(name) {
            return Err(PlayerError::PlaylistAlreadyExists(name.to_string()));
        }

        self.playlists
            .insert(name.to_string(), Rc::new(RefCell::new(Playlist::new(name))));
        log::info!("Playlist \"{}\" created", name);
        Ok(())
    }

    /// Delete a playlist. Strategies still bound to it see it as gone.
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists
            .remove(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))?;
        log::info!("Playlist \"{}\" deleted", name);
        Ok(())
    }

    /// Get a playlist by name
    pub fn get_playlist(&self, name: &str) -> Result<SharedPlaylist> {
        self.playlists
            .get(name)
            .cloned()
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    pub fn add_song_to_playlist(&mut self, name: &str, song: SongRef) -> Result<()> {
        let playlist = self.get_playlist(name)?;
        playlist.borrow_mut().add_song(song);
        Ok(())
    }

    /// Remove every occurrence of `song`; false if it was not there
    pub fn remove_song_from_playlist(&mut self, name: &str, song: &SongRef) -> Result<bool> {
        let playlist = self.get_playlist(name)?;
        let removed = playlist.borrow_mut().remove_song(song);
        Ok(removed)
    }

    /// Playlist names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.playlists.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Drop every playlist, returning how many were held
    pub fn clear(&mut self) -> usize {
        let count = self.playlists.len();
        self.playlists.clear();
        count
    }
}
