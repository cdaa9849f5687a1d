//! Task management module
//!
//! This module provides the persistence-backed task CRUD layer:
//! - Task record (id, title, status) and its JSON shape
//! - TaskStore: loads the backing file on construction, rewrites it
//!   atomically after every mutation

pub mod error;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::{Task, TaskStatus};
pub use store::TaskStore;
