//! Message definitions passed around the desktop update loop.

use iced::Task;
use tickbox_core::model::{FilterMode, Identity, Task as TodoTask};
use tickbox_core::session::Mutation;
use tickbox_core::store::TaskFeed;

#[derive(Debug, Clone)]
pub(crate) enum Message {
    SignInPressed,
    SignInFinished(Result<Identity, String>),
    SignOutPressed,
    /// Next snapshot from the live feed; `None` means the feed closed.
    /// The feed rides along so the waiter can be re-armed.
    SnapshotArrived(Option<Vec<TodoTask>>, TaskFeed),
    SeedFinished(Result<usize, String>),
    TitleChanged(String),
    DescriptionChanged(String),
    CreateSubmitted,
    SearchChanged(String),
    FilterPicked(FilterMode),
    PagePressed(usize),
    CompletedToggled(String),
    FavouriteToggled(String),
    DeletePressed(String),
    MutationFinished(Mutation, Result<(), String>),
    NoticeTick,
    NoticeClosed,
    ThemeToggled,
}

pub(crate) type Effect = Task<Message>;
