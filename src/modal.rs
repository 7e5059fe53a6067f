pub const LOAD_ERROR_MESSAGE: &str = "Error loading video. Please try again later.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoLoad {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl VideoLoad {
    pub fn is_loading(self) -> bool {
        self == VideoLoad::Loading
    }

    pub fn error_message(self) -> Option<&'static str> {
        match self {
            VideoLoad::Failed => Some(LOAD_ERROR_MESSAGE),
            _ => None,
        }
    }
}

/// State of the video overlay. The overlay exists only while a video is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    video: Option<String>,
    playing: bool,
    load: VideoLoad,
}

impl ModalState {
    pub fn open(&mut self, video_url: impl Into<String>) {
        self.video = Some(video_url.into());
        self.playing = true;
        self.load = VideoLoad::Loading;
    }

    pub fn close(&mut self) {
        self.video = None;
        self.playing = false;
    }

    pub fn is_open(&self) -> bool {
        self.video.is_some()
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video.as_deref()
    }

    /// Background scrolling is suspended for as long as the overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn load(&self) -> VideoLoad {
        self.load
    }

    pub fn loaded(&mut self) {
        if self.is_open() {
            self.load = VideoLoad::Ready;
        }
    }

    pub fn failed(&mut self) {
        if self.is_open() {
            self.load = VideoLoad::Failed;
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_locks_scroll() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());

        modal.open("/demo.mp4");
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
        assert!(modal.is_playing());
        assert_eq!(modal.video_url(), Some("/demo.mp4"));
        assert!(modal.load().is_loading());
    }

    #[test]
    fn test_close_restores_scroll_and_stops_playback() {
        let mut modal = ModalState::default();
        modal.open("/demo.mp4");
        modal.loaded();
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
        assert!(!modal.is_playing());
        assert_eq!(modal.video_url(), None);
    }

    #[test]
    fn test_reopen_resets_load_state() {
        let mut modal = ModalState::default();
        modal.open("/broken.mp4");
        modal.failed();
        assert_eq!(modal.load().error_message(), Some(LOAD_ERROR_MESSAGE));
        assert!(!modal.is_playing());

        modal.close();
        modal.open("/demo.mp4");
        assert_eq!(modal.load(), VideoLoad::Loading);
        assert_eq!(modal.load().error_message(), None);
    }

    #[test]
    fn test_playback_tracks_each_opening() {
        let mut modal = ModalState::default();
        assert!(!modal.is_playing());

        modal.open("/broken.mp4");
        modal.failed();
        assert!(!modal.is_playing());

        // A fresh open plays again; a late load event doesn't restart a closed one
        modal.open("/demo.mp4");
        assert!(modal.is_playing());
        modal.close();
        modal.loaded();
        assert!(!modal.is_playing());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_media_events_ignored_when_closed() {
        let mut modal = ModalState::default();
        modal.failed();
        modal.loaded();
        assert_eq!(modal.load(), VideoLoad::Loading);
    }
}
