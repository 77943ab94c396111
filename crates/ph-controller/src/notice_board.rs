use std::time::{Duration, Instant};

use log::debug;
use ph_config::NoticeConfig;
use ph_core::{Notice, NoticeLevel};

/// Visibility windows per kind of notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDurations {
    pub success: Duration,
    pub copy: Duration,
    pub error: Duration,
}

impl Default for NoticeDurations {
    fn default() -> Self {
        Self::from(&NoticeConfig::default())
    }
}

impl From<&NoticeConfig> for NoticeDurations {
    fn from(config: &NoticeConfig) -> Self {
        Self {
            success: config.success(),
            copy: config.copy(),
            error: config.error(),
        }
    }
}

/// Transient messages raised by one controller.
///
/// Notices expire on their own; nothing needs to acknowledge them.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    durations: NoticeDurations,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(durations: NoticeDurations) -> Self {
        Self {
            durations,
            notices: Vec::new(),
        }
    }

    pub fn durations(&self) -> NoticeDurations {
        self.durations
    }

    pub fn success(&mut self, message: impl Into<String>) {
        let ttl = self.durations.success;
        self.push(NoticeLevel::Success, message.into(), ttl);
    }

    /// Copy confirmations use the shorter copy window.
    pub fn copied(&mut self, message: impl Into<String>) {
        let ttl = self.durations.copy;
        self.push(NoticeLevel::Success, message.into(), ttl);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let ttl = self.durations.error;
        self.push(NoticeLevel::Warning, message.into(), ttl);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let ttl = self.durations.error;
        self.push(NoticeLevel::Error, message.into(), ttl);
    }

    /// Notices still visible at `now`, oldest first. Expired ones are dropped.
    pub fn active(&mut self, now: Instant) -> &[Notice] {
        self.notices.retain(|notice| !notice.is_expired_at(now));
        &self.notices
    }

    /// The most recent notice, expired or not
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Take every pending notice, leaving the board empty
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Traced at debug only; rendering belongs to whoever drains the board.
    fn push(&mut self, level: NoticeLevel, message: String, ttl: Duration) {
        debug!("{level:?} notice: {message}");
        self.notices.push(Notice::new(level, message, ttl));
    }
}
