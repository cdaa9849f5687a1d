//! Taskdeck library - persistence-backed task CRUD and the interactive menu shell

pub mod menu;
pub mod task;
