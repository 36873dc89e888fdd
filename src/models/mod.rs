//! Flat list rows and DTOs for all listed entities.

pub mod author;
pub mod book;
pub mod pagination;
pub mod publisher;
pub mod relation;
pub mod review;
pub mod taxonomy;
pub mod user;
