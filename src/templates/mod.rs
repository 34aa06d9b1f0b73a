pub mod components;
pub mod layouts;
pub mod pages;

pub use layouts::desktop::{desktop_layout, Tab};
