//! Collects lightweight desktop telemetry so product tweaks can be validated during prototyping.

use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    SignInCompleted(String),
    SignInFailed(String),
    SignedOut,
    SnapshotApplied { count: usize },
    MutationApplied(String),
    MutationFailed { action: String, error: String },
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("desktop telemetry app started"),
                Event::SignInCompleted(uid) => {
                    tracing::debug!(uid = uid.as_str(), "desktop telemetry sign-in completed")
                }
                Event::SignInFailed(error) => {
                    tracing::debug!(error = error.as_str(), "desktop telemetry sign-in failed")
                }
                Event::SignedOut => tracing::debug!("desktop telemetry signed out"),
                Event::SnapshotApplied { count } => {
                    tracing::debug!(count, "desktop telemetry snapshot applied")
                }
                Event::MutationApplied(action) => tracing::debug!(
                    action = action.as_str(),
                    "desktop telemetry mutation applied"
                ),
                Event::MutationFailed { action, error } => tracing::debug!(
                    action = action.as_str(),
                    error = %error,
                    "desktop telemetry mutation failed"
                ),
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_event_counts_when_enabled() {
        let handle = Handle::new();
        handle.record(Event::SnapshotApplied { count: 3 });
        if handle.is_enabled() {
            assert_eq!(handle.events_len(), 1);
        } else {
            assert_eq!(handle.events_len(), 0);
        }
    }
}
