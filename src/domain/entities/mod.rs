pub mod blog_post;
pub mod contact;
pub mod listing;
pub mod project;
pub mod technology;
