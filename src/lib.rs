pub use tickbox_core as core;
pub use tickbox_core::model;
pub use tickbox_core::notify;
pub use tickbox_core::session;
pub use tickbox_core::store;
pub use tickbox_core::view;

pub use tickbox_desktop as desktop;
pub use tickbox_desktop::DesktopOptions;
