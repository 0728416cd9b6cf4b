use super::external::HeadphonesApi;
use crate::model::Song;

/// Headphones adapter
#[derive(Debug, Default)]
pub struct HeadphonesAdapter {
    api: HeadphonesApi,
}

impl HeadphonesAdapter {
    pub fn new(api: HeadphonesApi) -> Self {
        Self { api }
    }

    pub fn play_audio(&mut self, song: &Song) {
        self.api.play_sound_via_jack(&song.display_line());
    }

    pub fn transmitted(&self) -> &[String] {
        self.api.transmitted()
    }
}
