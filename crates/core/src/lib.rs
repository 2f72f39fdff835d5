pub mod auth;
pub mod model;
pub mod notify;
pub mod session;
pub mod store;
pub mod view;

pub use auth::{AuthError, DevIdentity, IdentityProvider};
pub use model::{FilterMode, Identity, NewTask, Task, TaskPatch};
pub use notify::{DismissReason, Notice, NoticeQueue, Severity, NOTICE_DURATION};
pub use session::{ComposeError, Mutation, Session};
pub use store::{MemoryStore, StoreError, TaskFeed, TaskStore};
pub use view::{derive_page, TaskPage, ViewQuery, TASKS_PER_PAGE};
