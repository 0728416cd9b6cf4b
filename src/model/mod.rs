//! Data model: songs, playlists and the registries that own them
//!
//! Songs and playlists are shared through `Rc` handles. Registries hold the
//! owning handles; playlists and strategies only reference songs.

mod library;
mod playlist;
mod registry;
mod song;

pub use library::SongLibrary;
pub use playlist::{Playlist, SharedPlaylist};
pub use registry::PlaylistRegistry;
pub use song::{Song, SongRef};
