//! Session activity shown in the home page's "Recent Activity" card.
//!
//! Sign-ins, sign-outs and upload queue changes append here. Nothing is
//! persisted; a reload starts with an empty feed.

use std::collections::VecDeque;

use dioxus::prelude::*;

/// Older events are dropped once the feed holds this many.
const CAPACITY: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    fn stamped(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: clock_time(),
            level,
            message: message.into(),
        }
    }
}

/// Bounded, oldest-first feed of [`LogEntry`] values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, entry: LogEntry) {
        while self.entries.len() >= CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(n)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Record an event in the feed, stamped with the current time.
pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(LogEntry::stamped(level, message));
}

#[cfg(target_arch = "wasm32")]
fn clock_time() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: impl Into<String>) -> LogEntry {
        LogEntry::stamped(LogLevel::Info, message)
    }

    #[test]
    fn test_push_drops_oldest_past_capacity() {
        let mut log = ActivityLog::default();
        for i in 0..=CAPACITY {
            log.push(entry(i.to_string()));
        }
        assert_eq!(log.len(), CAPACITY);
        let oldest = log.recent(CAPACITY).last().map(|e| e.message.clone());
        assert_eq!(oldest.as_deref(), Some("1"));
        let newest = log.recent(1).next().map(|e| e.message.clone());
        assert_eq!(newest, Some(CAPACITY.to_string()));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = ActivityLog::default();
        for i in 0..8 {
            log.push(entry(format!("event {i}")));
        }
        let messages: Vec<_> = log.recent(5).map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            ["event 7", "event 6", "event 5", "event 4", "event 3"]
        );
    }

    #[test]
    fn test_recent_on_empty_log() {
        let log = ActivityLog::default();
        assert!(log.is_empty());
        assert_eq!(log.recent(5).count(), 0);
    }
}
