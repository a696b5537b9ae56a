pub mod edit;
pub mod list;
pub mod render;
pub mod show;
