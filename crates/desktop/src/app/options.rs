//! Configuration surfaces for tailoring the desktop shell.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DesktopOptions {
    /// Display name the local dev identity signs in with.
    pub display_name: Option<String>,
    /// Seed a handful of demo tasks into the in-process store.
    pub seed_demo_data: bool,
    /// Start in the light theme instead of following the system.
    pub light_theme: bool,
}

impl Default for DesktopOptions {
    fn default() -> Self {
        Self {
            display_name: None,
            seed_demo_data: true,
            light_theme: false,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DesktopFlags {
    pub(crate) display_name: String,
    pub(crate) seed_demo_data: bool,
    pub(crate) light_theme: bool,
    /// Cadence of the notice-queue tick.
    pub(crate) notice_poll: Duration,
}

impl From<DesktopOptions> for DesktopFlags {
    fn from(options: DesktopOptions) -> Self {
        Self {
            display_name: options
                .display_name
                .unwrap_or_else(|| "Tickbox User".to_string()),
            seed_demo_data: options.seed_demo_data,
            light_theme: options.light_theme,
            notice_poll: Duration::from_millis(250),
        }
    }
}
