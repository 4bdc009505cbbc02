pub mod about;
#[cfg(test)]
mod about_test;
pub mod admin;
pub mod contact;
#[cfg(test)]
mod contact_test;
pub mod page;
#[cfg(test)]
mod page_test;
pub mod project;
#[cfg(test)]
mod project_test;
pub mod scene;
