use super::{Song, SongRef};
use crate::error::{PlayerError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Song library: owns every song, keyed by title
#[derive(Debug, Default)]
pub struct SongLibrary {
    /// All songs indexed by their title
    songs: HashMap<String, SongRef>,
}

impl SongLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            songs: HashMap::new(),
        }
    }

    /// Create a song and register it under its title
    pub fn create_song(
        &mut self,
        title: &str,
        artist: &str,
        file_path: impl Into<PathBuf>,
    ) -> Result<SongRef> {
        if self.songs.contains_key(title) {
            return Err(PlayerError::SongAlreadyExists(title.to_string()));
        }

        let song = Rc::new(Song::new(title, artist, file_path)?);
        self.songs.insert(title.to_string(), Rc::clone(&song));
        log::info!("Song \"{}\" added to library", title);

        Ok(song)
    }

    /// Get a song by title
    pub fn get_song(&self, title: &str) -> Result<SongRef> {
        self.songs
            .get(title)
            .cloned()
            .ok_or_else(|| PlayerError::SongNotFound(title.to_string()))
    }

    /// Get all songs, sorted by title
    pub fn songs(&self) -> Vec<SongRef> {
        let mut songs: Vec<SongRef> = self.songs.values().cloned().collect();
        songs.sort_by(|a, b| a.title().cmp(b.title()));
        songs
    }

    /// Total number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Drop every song, returning how many were held
    pub fn clear(&mut self) -> usize {
        let count = self.songs.len();
        self.songs.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let lib = SongLibrary::new();
        assert_eq!(lib.len(), 0);
        assert!(lib.is_empty());
    }

    #[test]
    fn test_create_and_get_song() {
        let mut lib = SongLibrary::new();
        let created = lib
            .create_song("Jai Ho", "A. R. Rahman", "/music/jai_ho.mp3")
            .unwrap();

        assert_eq!(lib.len(), 1);
        let fetched = lib.get_song("Jai Ho").unwrap();
        assert!(Rc::ptr_eq(&created, &fetched));
        assert_eq!(fetched.artist(), "A. R. Rahman");
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let mut lib = SongLibrary::new();
        lib.create_song("Zinda", "Siddharth Mahadevan", "/music/zinda.mp3")
            .unwrap();

        let err = lib.create_song("Zinda", "Someone Else", "/x.mp3").unwrap_err();
        assert_eq!(err, PlayerError::SongAlreadyExists("Zinda".to_string()));
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn test_missing_song() {
        let lib = SongLibrary::new();
        assert_eq!(
            lib.get_song("Nope").unwrap_err(),
            PlayerError::SongNotFound("Nope".to_string())
        );
    }

    #[test]
    fn test_songs_sorted_and_clear() {
        let mut lib = SongLibrary::new();
        lib.create_song("B", "x", "/b.mp3").unwrap();
        lib.create_song("A", "x", "/a.mp3").unwrap();

        let titles: Vec<String> = lib.songs().iter().map(|s| s.title().to_string()).collect();
        assert_eq!(titles, vec!["A", "B"]);

        assert_eq!(lib.clear(), 2);
        assert!(lib.is_empty());
    }
}
