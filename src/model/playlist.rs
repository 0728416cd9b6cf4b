use super::SongRef;
use std::cell::RefCell;
use std::rc::Rc;

/// Playlist handle shared between the registry and strategies
pub type SharedPlaylist = Rc<RefCell<Playlist>>;

/// Ordered list of song references. Owns no songs.
#[derive(Debug)]
pub struct Playlist {
    /// Playlist name
    name: String,

    /// Songs in play order; the same song may appear more than once
    songs: Vec<SongRef>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a song to the end
    pub fn add_song(&mut self, song: SongRef) {
        log::debug!("Adding \"{}\" to playlist \"{}\"", song.title(), self.name);
        self.songs.push(song);
    }

    /// Remove every occurrence of `song` (by identity).
    ///
    /// Returns false when the song was not in the playlist.
    pub fn remove_song(&mut self, song: &SongRef) -> bool {
        let before = self.songs.len();
        self.songs.retain(|s| !Rc::ptr_eq(s, song));
        let removed = before - self.songs.len();

        if removed > 0 {
            log::info!(
                "Song \"{}\" removed from playlist \"{}\" ({} occurrence(s))",
                song.title(),
                self.name,
                removed
            );
            true
        } else {
            log::warn!(
                "Song \"{}\" not found in playlist \"{}\"",
                song.title(),
                self.name
            );
            false
        }
    }

    /// Read-only view of the songs
    pub fn songs(&self) -> &[SongRef] {
        &self.songs
    }

    /// Check whether `song` (by identity) is in the playlist
    pub fn contains(&self, song: &SongRef) -> bool {
        self.songs.iter().any(|s| Rc::ptr_eq(s, song))
    }

    /// Number of entries in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
