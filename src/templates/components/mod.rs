pub mod badge;
pub mod card;
pub mod error;
pub mod notice;

pub use badge::{outline_badge, priority_badge, status_badge};
pub use card::feature_card;
pub use error::error_page;
pub use notice::notice_list;
