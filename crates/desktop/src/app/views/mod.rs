//! View composition for the desktop shell.

mod dashboard;
mod landing;
mod layout;
mod status;
mod styles;

pub(crate) use layout::compose as compose_root;
