//! Single-slot notice queue with a FIFO backlog.
//!
//! Only one notice is ever visible; later arrivals wait their turn
//! instead of interrupting. A shown notice leaves after a fixed display
//! window or an explicit close — click-away is deliberately ignored so
//! stray clicks cannot swallow feedback.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long one notice stays on screen before the queue advances.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Why the visible notice is being dismissed. `ClickAway` is accepted
/// by the API but never advances the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Timeout,
    Closed,
    ClickAway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    /// Uniqueness key: re-enqueuing an identical message is still a
    /// distinct, separately displayed event.
    pub key: u64,
}

#[derive(Debug)]
pub struct NoticeQueue {
    current: Option<(Notice, Instant)>,
    backlog: VecDeque<(String, Severity)>,
    next_key: u64,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self {
            current: None,
            backlog: VecDeque::new(),
            next_key: 0,
        }
    }

    /// Enqueue a notice. Shown immediately when the slot is idle,
    /// otherwise queued behind whatever is showing.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        if self.current.is_none() {
            let notice = self.mint(message, severity);
            self.current = Some((notice, now));
        } else {
            self.backlog.push_back((message, severity));
        }
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, Severity::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, Severity::Error, now);
    }

    /// The notice that should be on screen, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    /// Advance the queue when the visible notice has run out its
    /// display window. Call from a periodic tick.
    pub fn poll(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .map(|(_, shown_at)| now.duration_since(*shown_at) >= NOTICE_DURATION)
            .unwrap_or(false);
        if expired {
            self.advance(now);
        }
    }

    /// Dismiss the visible notice for `reason`. Click-away dismissals
    /// are ignored and leave the queue untouched.
    pub fn dismiss(&mut self, reason: DismissReason, now: Instant) {
        match reason {
            DismissReason::ClickAway => {}
            DismissReason::Timeout | DismissReason::Closed => self.advance(now),
        }
    }

    fn advance(&mut self, now: Instant) {
        self.current = self
            .backlog
            .pop_front()
            .map(|(message, severity)| (self.mint(message, severity), now));
    }

    fn mint(&mut self, message: String, severity: Severity) -> Notice {
        let key = self.next_key;
        self.next_key += 1;
        Notice {
            message,
            severity,
            key,
        }
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}
