//! Exercised flows ensure the sign-in, compose, and mutation paths stay reliable in the desktop shell.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use tickbox_core::auth::{DevIdentity, IdentityProvider};
use tickbox_core::model::NewTask;
use tickbox_core::session::Mutation;
use tickbox_core::store::{MemoryStore, TaskStore};

use super::desktop::TickboxDesktop;
use super::message::Message;
use super::options::{DesktopFlags, DesktopOptions};

fn init_app() -> (TickboxDesktop, Arc<DevIdentity>, MemoryStore) {
    let provider = Arc::new(DevIdentity::new("Alex"));
    let store = MemoryStore::new();
    let flags = DesktopFlags::from(DesktopOptions {
        seed_demo_data: false,
        ..Default::default()
    });
    let app =
        TickboxDesktop::with_collaborators(provider.clone(), Arc::new(store.clone()), &flags);
    (app, provider, store)
}

fn sign_in(app: &mut TickboxDesktop, provider: &DevIdentity) {
    let profile = provider.profile().clone();
    let _ = app.react(Message::SignInFinished(Ok(profile)));
}

async fn seed_task(store: &MemoryStore, provider: &DevIdentity, title: &str) -> String {
    store
        .create_task(NewTask {
            title: title.to_string(),
            description: format!("{title} details"),
            owner_uid: provider.profile().uid.clone(),
        })
        .await
        .unwrap();
    store
        .subscribe(&provider.profile().uid)
        .snapshot()
        .first()
        .unwrap()
        .id
        .clone()
}

#[test]
fn sign_in_routes_to_dashboard() {
    let (mut app, provider, _store) = init_app();
    assert!(app.session.is_none());

    let _ = app.react(Message::SignInPressed);
    assert!(app.signing_in);

    sign_in(&mut app, &provider);
    assert!(!app.signing_in);
    let session = app.session.as_ref().expect("session established");
    // The feed snapshot lands immediately, empty list included.
    assert!(session.is_loaded());
    assert!(session.tasks().is_empty());
}

#[test]
fn failed_sign_in_stays_on_landing_with_a_notice() {
    let (mut app, _provider, _store) = init_app();
    let _ = app.react(Message::SignInFinished(Err("rejected".into())));

    assert!(app.session.is_none());
    assert_eq!(
        app.notices.current().map(|n| n.message.as_str()),
        Some("Failed to sign in.")
    );
}

#[tokio::test]
async fn create_with_missing_field_notifies_and_skips_the_store() {
    let (mut app, provider, store) = init_app();
    sign_in(&mut app, &provider);

    let _ = app.react(Message::TitleChanged("Buy milk".into()));
    let _ = app.react(Message::CreateSubmitted);

    assert_eq!(
        app.notices.current().map(|n| n.message.as_str()),
        Some("Please fill in both title and description.")
    );
    assert_eq!(app.pending_mutations, 0);
    assert_eq!(store.ops().creates, 0);
    // The form keeps what was typed.
    assert_eq!(app.form.title, "Buy milk");
}

#[test]
fn create_submit_notifies_and_clears_the_form() {
    let (mut app, provider, _store) = init_app();
    sign_in(&mut app, &provider);

    let _ = app.react(Message::TitleChanged("Buy milk".into()));
    let _ = app.react(Message::DescriptionChanged("Two litres".into()));
    let _ = app.react(Message::CreateSubmitted);

    assert_eq!(
        app.notices.current().map(|n| n.message.as_str()),
        Some("Task added successfully")
    );
    assert!(app.form.title.is_empty());
    assert!(app.form.description.is_empty());
    assert_eq!(app.pending_mutations, 1);
}

#[tokio::test]
async fn toggle_flips_local_state_before_the_store_confirms() {
    let (mut app, provider, store) = init_app();
    let id = seed_task(&store, &provider, "Buy milk").await;
    sign_in(&mut app, &provider);

    let _ = app.react(Message::CompletedToggled(id));

    let session = app.session.as_ref().unwrap();
    assert!(session.tasks()[0].completed);
    assert_eq!(app.pending_mutations, 1);
}

#[tokio::test]
async fn failed_toggle_keeps_the_optimistic_value() {
    let (mut app, provider, store) = init_app();
    let id = seed_task(&store, &provider, "Buy milk").await;
    sign_in(&mut app, &provider);

    let _ = app.react(Message::CompletedToggled(id.clone()));
    let mutation = Mutation::ToggleCompleted {
        task_id: id,
        value: true,
    };
    let _ = app.react(Message::MutationFinished(mutation, Err("offline".into())));

    // No rollback; the next authoritative snapshot settles it.
    let session = app.session.as_ref().unwrap();
    assert!(session.tasks()[0].completed);
    assert_eq!(app.pending_mutations, 0);
    assert_eq!(
        app.notices.current().map(|n| n.message.as_str()),
        Some("Failed to update task.")
    );
}

#[tokio::test]
async fn delete_leaves_the_row_until_the_snapshot_confirms() {
    let (mut app, provider, store) = init_app();
    let id = seed_task(&store, &provider, "Buy milk").await;
    sign_in(&mut app, &provider);

    let _ = app.react(Message::DeletePressed(id));

    let session = app.session.as_ref().unwrap();
    assert_eq!(session.tasks().len(), 1);
    assert_eq!(app.pending_mutations, 1);
}

#[tokio::test]
async fn foreign_snapshot_is_ignored() {
    let (mut app, provider, store) = init_app();
    let id = seed_task(&store, &provider, "Mine").await;
    sign_in(&mut app, &provider);

    let other_feed = store.subscribe("someone-else");
    let _ = app.react(Message::SnapshotArrived(Some(Vec::new()), other_feed));

    let session = app.session.as_ref().unwrap();
    assert_eq!(session.tasks().len(), 1);
    assert_eq!(session.tasks()[0].id, id);
}

#[tokio::test]
async fn stranded_page_keeps_the_pager_facts() {
    let (mut app, provider, store) = init_app();
    for index in 0..6 {
        seed_task(&store, &provider, &format!("Task {index}")).await;
    }
    sign_in(&mut app, &provider);

    let _ = app.react(Message::PagePressed(3));

    // Past the last page the slice is empty, but the pager facts
    // survive so the dashboard still offers a way back.
    let page = app.session.as_ref().unwrap().page();
    assert!(page.is_empty());
    assert!(page.needs_pager());
    assert_eq!(page.total_pages, 2);
}

#[test]
fn sign_out_clears_session_and_form() {
    let (mut app, provider, _store) = init_app();
    sign_in(&mut app, &provider);
    let _ = app.react(Message::TitleChanged("half-typed".into()));

    let _ = app.react(Message::SignOutPressed);

    assert!(app.session.is_none());
    assert!(app.form.title.is_empty());
    assert!(provider.watch().borrow().is_none());
}
