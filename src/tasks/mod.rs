//! Background Tasks Module
//!
//! Long-running tasks spawned at startup.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
