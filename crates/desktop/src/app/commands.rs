//! Async adapters that map desktop intents into collaborator calls.

use std::sync::Arc;

use tickbox_core::auth::IdentityProvider;
use tickbox_core::model::TaskPatch;
use tickbox_core::session::Mutation;
use tickbox_core::store::{TaskFeed, TaskStore};

use crate::app::message::{Effect, Message};

pub(crate) fn sign_in_command(provider: Arc<dyn IdentityProvider>) -> Effect {
    Effect::perform(
        async move { provider.sign_in().await.map_err(|err| err.to_string()) },
        Message::SignInFinished,
    )
}

/// Arm a one-shot waiter on the live feed. The resolved message carries
/// the feed back so the update loop can re-arm the same receiver;
/// dropping the message without re-arming is the unsubscribe.
pub(crate) fn watch_feed_command(mut feed: TaskFeed) -> Effect {
    Effect::perform(
        async move {
            let snapshot = feed.next().await;
            (snapshot, feed)
        },
        |(snapshot, feed)| Message::SnapshotArrived(snapshot, feed),
    )
}

/// Issue a mutation against the store and hand the mutation back with
/// its outcome so the finish handler can pick the right notice.
pub(crate) fn mutation_command(store: Arc<dyn TaskStore>, mutation: Mutation) -> Effect {
    Effect::perform(
        async move {
            let result = match &mutation {
                Mutation::Create { task } => store.create_task(task.clone()).await,
                Mutation::ToggleCompleted { task_id, value } => {
                    store
                        .update_task(task_id, TaskPatch::completed(*value))
                        .await
                }
                Mutation::ToggleFavourite { task_id, value } => {
                    store
                        .update_task(task_id, TaskPatch::favourite(*value))
                        .await
                }
                Mutation::Delete { task_id } => store.delete_task(task_id).await,
            };
            (mutation, result.map_err(|err| err.to_string()))
        },
        |(mutation, result)| Message::MutationFinished(mutation, result),
    )
}
