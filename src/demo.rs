//! Scripted demonstration run by the binary
//!
//! Builds a small library, plays it, edits it, deletes the playlist and then
//! tries to load the deleted playlist again.

use crate::error::{PlayerError, Result};
use crate::player::MusicPlayer;

/// Playlist used by the script
pub const DEMO_PLAYLIST: &str = "Bollywood Vibes";

const LIBRARY: [(&str, &str, &str); 5] = [
    ("Kesariya", "Arijit Singh", "/music/kesariya.mp3"),
    ("Chaiyya Chaiyya", "Sukhwinder Singh", "/music/chaiyya_chaiyya.mp3"),
    ("Tum Hi Ho", "Arijit Singh", "/music/tum_hi_ho.mp3"),
    ("Jai Ho", "A. R. Rahman", "/music/jai_ho.mp3"),
    ("Zinda", "Siddharth Mahadevan", "/music/zinda.mp3"),
];

const PLAYLIST_SONGS: [&str; 3] = ["Kesariya", "Chaiyya Chaiyya", "Tum Hi Ho"];
const SINGLE_SONG: &str = "Zinda";
const REMOVED_SONG: &str = "Chaiyya Chaiyya";

/// What the script observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    /// Songs played on the first full pass
    pub first_pass: usize,
    /// Songs played after removing one
    pub second_pass: usize,
    /// Whether the removal found the song
    pub removed: bool,
    /// Error from loading the deleted playlist
    pub reload_error: Option<PlayerError>,
}

fn section(title: &str) {
    println!("\n-- {} --", title);
}

/// Run the demonstration against `player`.
///
/// Uses the device and strategy from the player's configuration.
pub fn run_demo(player: &mut MusicPlayer) -> Result<DemoSummary> {
    let device = player.config().device;
    let strategy = player.config().strategy;

    for (title, artist, path) in LIBRARY {
        player.create_song_in_library(title, artist, path)?;
    }

    player.create_playlist(DEMO_PLAYLIST)?;
    for title in PLAYLIST_SONGS {
        player.add_song_to_playlist(DEMO_PLAYLIST, title)?;
    }

    section("Playing a single song");
    player.connect_audio_device(device);
    player.play_single_song(SINGLE_SONG)?;

    section(&format!("{} playback", capitalize(strategy.name())));
    player.select_play_strategy(strategy);
    player.load_playlist(DEMO_PLAYLIST)?;
    let first_pass = player.play_all_tracks_in_playlist()?;

    section("Deleting a song from a playlist");
    let removed = player.remove_song_from_playlist(DEMO_PLAYLIST, REMOVED_SONG)?;

    section(&format!("Playing '{}' after deleting a song", DEMO_PLAYLIST));
    player.load_playlist(DEMO_PLAYLIST)?;
    let second_pass = player.play_all_tracks_in_playlist()?;

    section("Deleting a playlist");
    player.delete_playlist(DEMO_PLAYLIST)?;

    section("Attempting to load deleted playlist");
    let reload_error = match player.load_playlist(DEMO_PLAYLIST) {
        Ok(()) => {
            log::warn!("Deleted playlist \"{}\" loaded again", DEMO_PLAYLIST);
            None
        }
        Err(err) if err.is_not_found() => {
            eprintln!("Caught expected error: {}", err);
            Some(err)
        }
        Err(err) => return Err(err),
    };

    Ok(DemoSummary {
        first_pass,
        second_pass,
        removed,
        reload_error,
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
