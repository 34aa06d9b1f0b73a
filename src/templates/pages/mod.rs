pub mod admin;
pub mod submit;

pub use admin::{admin_page, complaint_list, confirm_delete_page, AdminVm};
pub use submit::submit_page;
