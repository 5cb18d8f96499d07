//! Announcement channel.
//!
//! Fire-and-forget voice synthesis: the engine hands over a string and
//! never consults a return value.

/// Sink for spoken advisories.
pub trait Announcer {
    fn speak(&mut self, text: &str);
}

/// Discards announcements. For hosts without a voice channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn speak(&mut self, _text: &str) {}
}

/// Routes announcements through the `log` facade (used by the CLI host).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn speak(&mut self, text: &str) {
        log::info!("[speak] {text}");
    }
}
