//! Shuffled traversal without replacement, with an undo history
//!
//! The playlist is copied into a pool when bound, so later edits to the
//! playlist do not affect the running shuffle.

use crate::error::{PlayerError, Result};
use crate::model::{SharedPlaylist, SongRef};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws songs uniformly at random until every song has played once
#[derive(Debug)]
pub struct RandomStrategy {
    /// Name of the bound playlist, kept for logging
    bound_to: Option<String>,

    /// Songs in the snapshot at bind time
    snapshot_len: usize,

    /// Songs not yet drawn
    pool: Vec<SongRef>,

    /// Drawn songs, most recent last
    history: Vec<SongRef>,

    rng: StdRng,
}

impl RandomStrategy {
    /// Create a strategy seeded from OS entropy, or from `seed` for
    /// reproducible order
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            bound_to: None,
            snapshot_len: 0,
            pool: Vec::new(),
            history: Vec::new(),
            rng,
        }
    }

    /// Snapshot the playlist into a fresh pool and clear the history
    pub fn set_playlist(&mut self, playlist: &SharedPlaylist) {
        let playlist = playlist.borrow();
        self.pool = playlist.songs().to_vec();
        self.snapshot_len = self.pool.len();
        self.history.clear();
        self.bound_to = Some(playlist.name().to_string());

        log::debug!(
            "Random strategy bound to \"{}\" ({} songs)",
            playlist.name(),
            self.snapshot_len
        );
    }

    pub fn unbind(&mut self) {
        self.bound_to = None;
        self.snapshot_len = 0;
        self.pool.clear();
        self.history.clear();
    }

    pub fn is_bound(&self) -> bool {
        self.bound_to.is_some()
    }

    pub fn has_next(&self) -> bool {
        !self.pool.is_empty()
    }

    pub fn next(&mut self) -> Result<SongRef> {
        if self.bound_to.is_none() || self.snapshot_len == 0 {
            return Err(PlayerError::EmptyTraversal);
        }
        if self.pool.is_empty() {
            return Err(PlayerError::NoNextSong);
        }

        let index = self.rng.gen_range(0..self.pool.len());
        // swap with the last element and pop: O(1), order of the rest is irrelevant
        let song = self.pool.swap_remove(index);
        self.history.push(SongRef::clone(&song));

        log::debug!(
            "Random next -> {} ({} left)",
            song.title(),
            self.pool.len()
        );
        Ok(song)
    }

    pub fn has_previous(&self) -> bool {
        !self.history.is_empty()
    }

    /// Undo the last draw. The song does not go back into the pool.
    pub fn previous(&mut self) -> Result<SongRef> {
        let song = self.history.pop().ok_or(PlayerError::NoPreviousSong)?;
        log::debug!("Random previous -> {}", song.title());
        Ok(song)
    }

    /// Songs still waiting to be drawn
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Playlist, Song};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn playlist_of(titles: &[&str]) -> (SharedPlaylist, Vec<SongRef>) {
        let songs: Vec<SongRef> = titles
            .iter()
            .map(|t| Rc::new(Song::new(*t, "Artist", "/music/x.mp3").unwrap()))
            .collect();
        let mut playlist = Playlist::new("Shuffle");
        for song in &songs {
            playlist.add_song(Rc::clone(song));
        }
        (Rc::new(RefCell::new(playlist)), songs)
    }

    fn titles(songs: &[SongRef]) -> Vec<String> {
        songs.iter().map(|s| s.title().to_string()).collect()
    }

    #[test]
    fn test_each_song_exactly_once() {
        let (playlist, songs) = playlist_of(&["A", "B", "C", "D", "E"]);
        let mut strategy = RandomStrategy::new(Some(7));
        strategy.set_playlist(&playlist);

        let mut drawn = Vec::new();
        while strategy.has_next() {
            drawn.push(strategy.next().unwrap());
        }

        assert_eq!(drawn.len(), songs.len());
        let drawn_set: HashSet<String> = titles(&drawn).into_iter().collect();
        let expected: HashSet<String> = titles(&songs).into_iter().collect();
        assert_eq!(drawn_set, expected);
        assert_eq!(strategy.next().unwrap_err(), PlayerError::NoNextSong);
    }

    #[test]
    fn test_undo_in_reverse_order() {
        let (playlist, _) = playlist_of(&["A", "B", "C", "D"]);
        let mut strategy = RandomStrategy::new(Some(42));
        strategy.set_playlist(&playlist);

        let drawn: Vec<SongRef> = (0..3).map(|_| strategy.next().unwrap()).collect();
        let undone: Vec<SongRef> = (0..3).map(|_| strategy.previous().unwrap()).collect();

        for (d, u) in drawn.iter().rev().zip(undone.iter()) {
            assert!(Rc::ptr_eq(d, u));
        }
        assert!(!strategy.has_previous());
        assert_eq!(strategy.previous().unwrap_err(), PlayerError::NoPreviousSong);
    }

    #[test]
    fn test_undo_does_not_refill_pool() {
        let (playlist, _) = playlist_of(&["A", "B"]);
        let mut strategy = RandomStrategy::new(Some(1));
        strategy.set_playlist(&playlist);

        strategy.next().unwrap();
        strategy.previous().unwrap();
        assert_eq!(strategy.remaining(), 1);
        strategy.next().unwrap();
        assert!(!strategy.has_next());
    }

    #[test]
    fn test_snapshot_ignores_later_edits() {
        let (playlist, songs) = playlist_of(&["A", "B", "C"]);
        let mut strategy = RandomStrategy::new(Some(3));
        strategy.set_playlist(&playlist);

        playlist.borrow_mut().remove_song(&songs[1]);
        let extra = Rc::new(Song::new("Extra", "Artist", "/e.mp3").unwrap());
        playlist.borrow_mut().add_song(extra);

        let mut drawn = Vec::new();
        while strategy.has_next() {
            drawn.push(strategy.next().unwrap());
        }
        let mut names = titles(&drawn);
        names.sort();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let (playlist, _) = playlist_of(&["A", "B", "C", "D", "E", "F"]);
        let mut first = RandomStrategy::new(Some(99));
        let mut second = RandomStrategy::new(Some(99));
        first.set_playlist(&playlist);
        second.set_playlist(&playlist);

        for _ in 0..6 {
            assert!(Rc::ptr_eq(&first.next().unwrap(), &second.next().unwrap()));
        }
    }

    #[test]
    fn test_empty_and_unbound() {
        let mut strategy = RandomStrategy::new(None);
        assert!(!strategy.is_bound());
        assert_eq!(strategy.next().unwrap_err(), PlayerError::EmptyTraversal);

        let (full, _) = playlist_of(&["A"]);
        strategy.set_playlist(&full);
        strategy.next().unwrap();

        // Binding an empty playlist drops the old pool and history
        let (empty, _) = playlist_of(&[]);
        strategy.set_playlist(&empty);
        assert!(!strategy.has_next());
        assert!(!strategy.has_previous());
        assert_eq!(strategy.next().unwrap_err(), PlayerError::EmptyTraversal);

        strategy.unbind();
        assert!(!strategy.is_bound());
    }
}
