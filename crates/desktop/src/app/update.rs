//! Core update loop translating user interactions into state changes.

use std::sync::Arc;
use std::time::Instant;

use iced::widget::operation::focus;
use iced::Theme;

use tickbox_core::model::{FilterMode, Identity};
use tickbox_core::notify::DismissReason;
use tickbox_core::session::{Mutation, Session};
use tickbox_core::store::TaskFeed;

use crate::app::commands::{mutation_command, sign_in_command, watch_feed_command};
use crate::app::message::{Effect, Message};
use crate::app::theme::Palette;
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::TickboxDesktop;

type TaskSnapshot = Vec<tickbox_core::model::Task>;

impl TickboxDesktop {
    pub(super) fn react(&mut self, message: Message) -> Effect {
        match message {
            Message::SignInPressed => self.begin_sign_in(),
            Message::SignInFinished(result) => self.finish_sign_in(result),
            Message::SignOutPressed => self.sign_out(),
            Message::SnapshotArrived(snapshot, feed) => self.apply_feed(snapshot, feed),
            Message::SeedFinished(result) => self.finish_seed(result),
            Message::TitleChanged(value) => {
                self.form.title = value;
                Effect::none()
            }
            Message::DescriptionChanged(value) => {
                self.form.description = value;
                Effect::none()
            }
            Message::CreateSubmitted => self.submit_create(),
            Message::SearchChanged(value) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_search(value);
                }
                Effect::none()
            }
            Message::FilterPicked(filter) => self.pick_filter(filter),
            Message::PagePressed(page) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_page(page);
                }
                Effect::none()
            }
            Message::CompletedToggled(id) => self.toggle_completed(id),
            Message::FavouriteToggled(id) => self.toggle_favourite(id),
            Message::DeletePressed(id) => self.delete_task(id),
            Message::MutationFinished(mutation, result) => self.finish_mutation(mutation, result),
            Message::NoticeTick => {
                self.notices.poll(Instant::now());
                Effect::none()
            }
            Message::NoticeClosed => {
                self.notices.dismiss(DismissReason::Closed, Instant::now());
                Effect::none()
            }
            Message::ThemeToggled => self.toggle_theme(),
        }
    }

    fn begin_sign_in(&mut self) -> Effect {
        if self.signing_in || self.session.is_some() {
            return Effect::none();
        }
        self.signing_in = true;
        self.notices.success("Signing in", Instant::now());
        sign_in_command(Arc::clone(&self.provider))
    }

    fn finish_sign_in(&mut self, result: Result<Identity, String>) -> Effect {
        self.signing_in = false;
        match result {
            Ok(identity) => {
                self.telemetry
                    .record(TelemetryEvent::SignInCompleted(identity.uid.clone()));
                let mut session = Session::new(identity);
                let feed = self.store.subscribe(&session.identity().uid);
                // The feed always has a current snapshot; render it now
                // instead of waiting for the first change.
                session.apply_snapshot(feed.snapshot());
                self.session = Some(session);
                watch_feed_command(feed)
            }
            Err(error) => {
                self.telemetry
                    .record(TelemetryEvent::SignInFailed(error.clone()));
                tracing::warn!(error = %error, "sign-in failed");
                self.notices.error("Failed to sign in.", Instant::now());
                Effect::none()
            }
        }
    }

    fn sign_out(&mut self) -> Effect {
        self.provider.sign_out();
        // Dropping the session drops its feed handle; the in-flight
        // waiter resolves once more and is discarded as stale.
        self.session = None;
        self.form.clear();
        self.telemetry.record(TelemetryEvent::SignedOut);
        Effect::none()
    }

    fn apply_feed(&mut self, snapshot: Option<TaskSnapshot>, feed: TaskFeed) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::none();
        };
        if session.identity().uid != feed.owner_uid() {
            // Stale feed from a previous identity; dropping it here is
            // the unsubscribe.
            return Effect::none();
        }
        match snapshot {
            Some(tasks) => {
                self.telemetry
                    .record(TelemetryEvent::SnapshotApplied { count: tasks.len() });
                session.apply_snapshot(tasks);
                watch_feed_command(feed)
            }
            None => {
                tracing::warn!(owner = feed.owner_uid(), "task feed closed");
                Effect::none()
            }
        }
    }

    fn finish_seed(&mut self, result: Result<usize, String>) -> Effect {
        match result {
            Ok(count) => tracing::debug!(count, "seeded demo tasks"),
            Err(error) => tracing::warn!(error = %error, "failed to seed demo tasks"),
        }
        Effect::none()
    }

    fn submit_create(&mut self) -> Effect {
        let Some(session) = self.session.as_ref() else {
            return Effect::none();
        };
        match session.compose(&self.form.title, &self.form.description) {
            Ok(task) => {
                self.form.clear();
                self.notices
                    .success("Task added successfully", Instant::now());
                Effect::batch(vec![
                    focus(self.title_input_id.clone()),
                    self.dispatch_mutation(Mutation::Create { task }),
                ])
            }
            Err(err) => {
                self.notices.error(err.to_string(), Instant::now());
                Effect::none()
            }
        }
    }

    fn pick_filter(&mut self, filter: FilterMode) -> Effect {
        if let Some(session) = self.session.as_mut() {
            session.set_filter(filter);
        }
        Effect::none()
    }

    fn toggle_completed(&mut self, id: String) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::none();
        };
        match session.toggle_completed(&id) {
            Some(mutation) => self.dispatch_mutation(mutation),
            None => Effect::none(),
        }
    }

    fn toggle_favourite(&mut self, id: String) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::none();
        };
        match session.toggle_favourite(&id) {
            Some(mutation) => self.dispatch_mutation(mutation),
            None => Effect::none(),
        }
    }

    fn delete_task(&mut self, id: String) -> Effect {
        let Some(session) = self.session.as_ref() else {
            return Effect::none();
        };
        let mutation = session.delete(&id);
        self.dispatch_mutation(mutation)
    }

    fn dispatch_mutation(&mut self, mutation: Mutation) -> Effect {
        self.pending_mutations += 1;
        mutation_command(Arc::clone(&self.store), mutation)
    }

    fn finish_mutation(&mut self, mutation: Mutation, result: Result<(), String>) -> Effect {
        self.pending_mutations = self.pending_mutations.saturating_sub(1);
        match &result {
            Ok(()) => self
                .telemetry
                .record(TelemetryEvent::MutationApplied(mutation.label().into())),
            Err(error) => {
                tracing::warn!(action = mutation.label(), error = %error, "mutation failed");
                self.telemetry.record(TelemetryEvent::MutationFailed {
                    action: mutation.label().into(),
                    error: error.clone(),
                });
            }
        }
        if let Some((message, severity)) = mutation.outcome_notice(&result) {
            self.notices.push(message, severity, Instant::now());
        }
        Effect::none()
    }

    fn toggle_theme(&mut self) -> Effect {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        self.palette = Palette::for_theme(&self.theme);
        Effect::none()
    }
}
