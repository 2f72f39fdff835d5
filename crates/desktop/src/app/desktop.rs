//! Iced `Application` implementation powering the tickbox desktop shell lifecycle.

use std::sync::Arc;
use std::time::Duration;

use iced::time;
use iced::widget::Id;
use iced::Subscription;
use iced::{window, Size, Theme};

use tickbox_core::auth::{DevIdentity, IdentityProvider};
use tickbox_core::notify::NoticeQueue;
use tickbox_core::session::Session;
use tickbox_core::store::{MemoryStore, TaskStore};

use crate::app::message::{Effect, Message};
use crate::app::options::{DesktopFlags, DesktopOptions};
use crate::app::seeding::seed_demo_data_command;
use crate::app::state::ComposeForm;
use crate::app::theme::{detect_theme, Palette};
use crate::app::views;
use crate::telemetry::{self, Event as TelemetryEvent};

pub fn run(options: DesktopOptions) -> iced::Result {
    let _ = tracing_subscriber::fmt::try_init();

    let boot_flags = DesktopFlags::from(options);
    let window_settings = window::Settings {
        size: Size::new(960.0, 720.0),
        min_size: Some(Size::new(720.0, 540.0)),
        ..window::Settings::default()
    };

    iced::application(
        move || TickboxDesktop::bootstrap(boot_flags.clone()),
        TickboxDesktop::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .subscription(app_subscription)
    .run()
}

fn app_title(_state: &TickboxDesktop) -> String {
    format!("Tickbox v{}", env!("CARGO_PKG_VERSION"))
}

fn app_theme(state: &TickboxDesktop) -> Option<Theme> {
    Some(state.theme.clone())
}

fn app_subscription(state: &TickboxDesktop) -> Subscription<Message> {
    state.subscription()
}

pub(crate) struct TickboxDesktop {
    pub(crate) provider: Arc<dyn IdentityProvider>,
    pub(crate) store: Arc<dyn TaskStore>,
    pub(crate) session: Option<Session>,
    pub(crate) signing_in: bool,
    pub(crate) notices: NoticeQueue,
    pub(crate) form: ComposeForm,
    pub(crate) theme: Theme,
    pub(crate) palette: Palette,
    pub(crate) telemetry: telemetry::Handle,
    pub(crate) pending_mutations: usize,
    pub(crate) notice_poll: Duration,
    pub(crate) title_input_id: Id,
    pub(crate) search_input_id: Id,
}

impl TickboxDesktop {
    pub(crate) fn bootstrap(flags: DesktopFlags) -> (Self, Effect) {
        let provider = Arc::new(DevIdentity::new(&flags.display_name));
        let owner_uid = provider.profile().uid.clone();
        let store = MemoryStore::new();

        let app = Self::with_collaborators(provider, Arc::new(store), &flags);
        app.telemetry.record(TelemetryEvent::AppStarted);

        let effect = if flags.seed_demo_data {
            seed_demo_data_command(Arc::clone(&app.store), owner_uid)
        } else {
            Effect::none()
        };

        (app, effect)
    }

    /// Wire the shell around explicit collaborators. Bootstrap and the
    /// tests both go through here.
    pub(crate) fn with_collaborators(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn TaskStore>,
        flags: &DesktopFlags,
    ) -> Self {
        let theme = if flags.light_theme {
            Theme::Light
        } else {
            detect_theme()
        };
        let palette = Palette::for_theme(&theme);

        Self {
            provider,
            store,
            session: None,
            signing_in: false,
            notices: NoticeQueue::new(),
            form: ComposeForm::default(),
            theme,
            palette,
            telemetry: telemetry::Handle::new(),
            pending_mutations: 0,
            notice_poll: flags.notice_poll,
            title_input_id: Id::new("title_input"),
            search_input_id: Id::new("search_input"),
        }
    }

    pub(crate) fn subscription(&self) -> Subscription<Message> {
        // The tick only matters while a notice is on screen.
        if self.notices.current().is_some() {
            time::every(self.notice_poll).map(|_| Message::NoticeTick)
        } else {
            Subscription::none()
        }
    }
}
