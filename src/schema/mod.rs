pub mod about;
pub mod admin;
pub mod common;
pub mod contact;
pub mod page;
pub mod project;
pub mod scene;
