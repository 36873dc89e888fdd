//! Listing services: one module per listed entity on top of the shared
//! query builder in [`listing`].

pub mod authors;
pub mod book_relations;
pub mod books;
pub mod catalog;
pub mod followers;
pub mod listing;
pub mod publishers;
pub mod reading_lists;
pub mod reviews;
pub mod users;
