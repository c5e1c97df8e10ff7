//! Domain model for task record management.
//!
//! The task domain models the single managed record (title, description, due
//! date) together with its identifier and listing order, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod sort;
mod task;

pub use error::{ParseSortError, TaskDomainError};
pub use ids::TaskId;
pub use sort::{SortDirection, TaskSort, TaskSortField};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
