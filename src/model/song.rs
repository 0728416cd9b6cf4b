use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Shared handle to a song; identity is pointer identity
pub type SongRef = Rc<Song>;

/// A single song record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title (unique key in the library)
    title: String,

    /// Artist name
    artist: String,

    /// Path to the audio file
    file_path: PathBuf,
}

impl Song {
    /// Create a song, rejecting blank title or artist
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let title = title.into();
        let artist = artist.into();

        if title.trim().is_empty() {
            return Err(PlayerError::InvalidSong("title is empty".to_string()));
        }
        if artist.trim().is_empty() {
            return Err(PlayerError::InvalidSong(format!(
                "artist is empty for \"{}\"",
                title
            )));
        }

        Ok(Self {
            title,
            artist,
            file_path: file_path.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Human-readable payload sent to output devices
    pub fn display_line(&self) -> String {
        format!("{} by {}", self.title, self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_creation() {
        let song = Song::new("Kesariya", "Arijit Singh", "/music/kesariya.mp3").unwrap();
        assert_eq!(song.title(), "Kesariya");
        assert_eq!(song.artist(), "Arijit Singh");
        assert_eq!(song.file_path(), Path::new("/music/kesariya.mp3"));
        assert_eq!(song.display_line(), "Kesariya by Arijit Singh");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(matches!(
            Song::new("  ", "Artist", "/a.mp3"),
            Err(PlayerError::InvalidSong(_))
        ));
        assert!(matches!(
            Song::new("Title", "", "/a.mp3"),
            Err(PlayerError::InvalidSong(_))
        ));
    }
}
