//! Error types for the music player

use thiserror::Error;

/// Errors raised by registries, strategies and the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// No playlist registered under this name
    #[error("Playlist \"{0}\" not found")]
    PlaylistNotFound(String),

    /// No song registered under this title
    #[error("Song \"{0}\" not found")]
    SongNotFound(String),

    /// A playlist with this name already exists
    #[error("Playlist \"{0}\" already exists")]
    PlaylistAlreadyExists(String),

    /// A song with this title already exists in the library
    #[error("Song \"{0}\" already exists")]
    SongAlreadyExists(String),

    /// Song fields failed validation
    #[error("Invalid song: {0}")]
    InvalidSong(String),

    /// Forward traversal is exhausted
    #[error("No next song available")]
    NoNextSong,

    /// Nothing to step back to
    #[error("No previous song available")]
    NoPreviousSong,

    /// Strategy has no playlist bound, or the bound playlist has no songs
    #[error("No playlist loaded or playlist is empty")]
    EmptyTraversal,

    /// Playback requested before any output device was connected
    #[error("No audio output device connected")]
    NoDeviceConnected,
}

impl PlayerError {
    /// True for the lookup-miss kinds
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlayerError::PlaylistNotFound(_) | PlayerError::SongNotFound(_)
        )
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
