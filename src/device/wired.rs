use super::external::WiredSpeakerApi;
use crate::model::Song;

/// Wired speaker adapter
#[derive(Debug, Default)]
pub struct WiredSpeakerAdapter {
    api: WiredSpeakerApi,
}

impl WiredSpeakerAdapter {
    pub fn new(api: WiredSpeakerApi) -> Self {
        Self { api }
    }

    pub fn play_audio(&mut self, song: &Song) {
        self.api.play_sound_via_cable(&song.display_line());
    }

    pub fn transmitted(&self) -> &[String] {
        self.api.transmitted()
    }
}
