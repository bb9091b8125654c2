//! Employee profile assembly

pub mod service;
pub mod view;

pub use service::ProfileService;
pub use view::{PersonalSection, ProfileHeader, ProfileView};
