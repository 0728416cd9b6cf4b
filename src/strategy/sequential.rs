//! Index-based, in-order traversal
//!
//! The strategy reads the bound playlist on every step instead of copying
//! it. Songs added or removed after `set_playlist` are seen by the next call
//! and the cursor keeps its numeric position, so indices shift under it.

use crate::error::{PlayerError, Result};
use crate::model::{Playlist, SharedPlaylist, SongRef};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Plays the bound playlist front to back
#[derive(Debug, Default)]
pub struct SequentialStrategy {
    /// Bound playlist; the registry keeps it alive
    playlist: Option<Weak<RefCell<Playlist>>>,

    /// Index of the last returned song. `None` means "before first".
    cursor: Option<usize>,
}

impl SequentialStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a playlist and rewind to before the first song
    pub fn set_playlist(&mut self, playlist: &SharedPlaylist) {
        log::debug!(
            "Sequential strategy bound to \"{}\" ({} songs)",
            playlist.borrow().name(),
            playlist.borrow().len()
        );
        self.playlist = Some(Rc::downgrade(playlist));
        self.cursor = None;
    }

    pub fn unbind(&mut self) {
        self.playlist = None;
        self.cursor = None;
    }

    /// False once the bound playlist has been deleted
    pub fn is_bound(&self) -> bool {
        self.bound().is_some()
    }

    pub fn has_next(&self) -> bool {
        match self.bound() {
            Some(playlist) => {
                let len = playlist.borrow().len();
                self.next_index() < len
            }
            None => false,
        }
    }

    pub fn next(&mut self) -> Result<SongRef> {
        let shared = self.bound().ok_or(PlayerError::EmptyTraversal)?;
        let playlist = shared.borrow();
        if playlist.is_empty() {
            return Err(PlayerError::EmptyTraversal);
        }

        let index = self.next_index();
        let song = playlist
            .songs()
            .get(index)
            .cloned()
            .ok_or(PlayerError::NoNextSong)?;
        self.cursor = Some(index);

        log::debug!("Sequential next -> [{}] {}", index, song.title());
        Ok(song)
    }

    pub fn has_previous(&self) -> bool {
        let Some(index) = self.cursor else {
            return false;
        };
        match self.bound() {
            Some(playlist) => {
                let len = playlist.borrow().len();
                index > 0 && len > 0
            }
            None => false,
        }
    }

    /// Step the cursor back one song.
    ///
    /// If the playlist shrank below the cursor, lands on its last song.
    pub fn previous(&mut self) -> Result<SongRef> {
        if !self.has_previous() {
            return Err(PlayerError::NoPreviousSong);
        }
        let shared = self.bound().ok_or(PlayerError::NoPreviousSong)?;
        let playlist = shared.borrow();

        let index = self
            .cursor
            .map(|i| (i - 1).min(playlist.len() - 1))
            .ok_or(PlayerError::NoPreviousSong)?;
        let song = Rc::clone(&playlist.songs()[index]);
        self.cursor = Some(index);

        log::debug!("Sequential previous -> [{}] {}", index, song.title());
        Ok(song)
    }

    fn bound(&self) -> Option<SharedPlaylist> {
        self.playlist.as_ref().and_then(Weak::upgrade)
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;

    fn playlist_of(titles: &[&str]) -> (SharedPlaylist, Vec<SongRef>) {
        let songs: Vec<SongRef> = titles
            .iter()
            .map(|t| Rc::new(Song::new(*t, "Artist", "/music/x.mp3").unwrap()))
            .collect();
        let mut playlist = Playlist::new("P");
        for song in &songs {
            playlist.add_song(Rc::clone(song));
        }
        (Rc::new(RefCell::new(playlist)), songs)
    }

    #[test]
    fn test_exactly_n_songs() {
        let (playlist, songs) = playlist_of(&["A", "B", "C", "D"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);

        for expected in &songs {
            assert!(strategy.has_next());
            assert!(Rc::ptr_eq(&strategy.next().unwrap(), expected));
        }
        assert!(!strategy.has_next());
        assert_eq!(strategy.next().unwrap_err(), PlayerError::NoNextSong);
    }

    #[test]
    fn test_back_and_forth() {
        let (playlist, songs) = playlist_of(&["A", "B", "C"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);

        assert!(!strategy.has_previous());
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &songs[0]));
        assert!(!strategy.has_previous());
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &songs[1]));
        assert!(Rc::ptr_eq(&strategy.previous().unwrap(), &songs[0]));
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &songs[1]));
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &songs[2]));
        assert!(!strategy.has_next());
    }

    #[test]
    fn test_previous_at_start_fails() {
        let (playlist, _) = playlist_of(&["A"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);

        assert_eq!(strategy.previous().unwrap_err(), PlayerError::NoPreviousSong);
        strategy.next().unwrap();
        assert_eq!(strategy.previous().unwrap_err(), PlayerError::NoPreviousSong);
    }

    #[test]
    fn test_live_binding_sees_removal() {
        let (playlist, songs) = playlist_of(&["A", "B", "C"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);

        let first = strategy.next().unwrap();
        assert!(Rc::ptr_eq(&first, &songs[0]));

        // Removing A shifts B to index 0 and C to index 1; the cursor stays at 0
        playlist.borrow_mut().remove_song(&first);
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &songs[2]));
        assert!(!strategy.has_next());
    }

    #[test]
    fn test_live_binding_sees_append() {
        let (playlist, _) = playlist_of(&["A"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);
        strategy.next().unwrap();
        assert!(!strategy.has_next());

        let late = Rc::new(Song::new("Late", "Artist", "/late.mp3").unwrap());
        playlist.borrow_mut().add_song(Rc::clone(&late));
        assert!(strategy.has_next());
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &late));
    }

    #[test]
    fn test_previous_after_shrink_clamps() {
        let (playlist, songs) = playlist_of(&["A", "B", "C"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);
        for _ in 0..3 {
            strategy.next().unwrap();
        }

        playlist.borrow_mut().remove_song(&songs[2]);
        playlist.borrow_mut().remove_song(&songs[1]);
        assert!(Rc::ptr_eq(&strategy.previous().unwrap(), &songs[0]));
    }

    #[test]
    fn test_rebind_resets_cursor() {
        let (playlist, songs) = playlist_of(&["A", "B"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);
        strategy.next().unwrap();
        strategy.next().unwrap();

        strategy.set_playlist(&playlist);
        assert!(!strategy.has_previous());
        assert!(Rc::ptr_eq(&strategy.next().unwrap(), &songs[0]));
    }

    #[test]
    fn test_unbound_and_empty() {
        let mut strategy = SequentialStrategy::new();
        assert!(!strategy.is_bound());
        assert!(!strategy.has_next());
        assert_eq!(strategy.next().unwrap_err(), PlayerError::EmptyTraversal);

        let (empty, _) = playlist_of(&[]);
        strategy.set_playlist(&empty);
        assert!(strategy.is_bound());
        assert!(!strategy.has_next());
        assert_eq!(strategy.next().unwrap_err(), PlayerError::EmptyTraversal);
    }

    #[test]
    fn test_dropped_playlist_unbinds() {
        let (playlist, _) = playlist_of(&["A", "B"]);
        let mut strategy = SequentialStrategy::new();
        strategy.set_playlist(&playlist);
        strategy.next().unwrap();

        drop(playlist);
        assert!(!strategy.is_bound());
        assert!(!strategy.has_next());
        assert!(!strategy.has_previous());
        assert_eq!(strategy.next().unwrap_err(), PlayerError::EmptyTraversal);
    }
}
