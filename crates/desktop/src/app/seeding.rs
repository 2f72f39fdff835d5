//! Seeds demo tasks so the desktop shell conveys value during first-run.

use std::sync::Arc;

use tickbox_core::model::NewTask;
use tickbox_core::store::TaskStore;

use crate::app::message::{Effect, Message};
use crate::app::state::SAMPLE_SEEDS;

pub(crate) fn seed_demo_data_command(store: Arc<dyn TaskStore>, owner_uid: String) -> Effect {
    Effect::perform(seed_demo_data(store, owner_uid), Message::SeedFinished)
}

pub(crate) async fn seed_demo_data(
    store: Arc<dyn TaskStore>,
    owner_uid: String,
) -> Result<usize, String> {
    let mut created = 0;
    for seed in SAMPLE_SEEDS {
        let new_task = NewTask {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            owner_uid: owner_uid.clone(),
        };
        store
            .create_task(new_task)
            .await
            .map_err(|err| err.to_string())?;
        created += 1;
    }
    Ok(created)
}
