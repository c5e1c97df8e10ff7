//! Application services for task record management.

mod tasks;

pub use tasks::{
    CreateTaskRequest, DynTaskService, TaskService, TaskServiceError, TaskServiceResult,
    TitleCheckRequest, UpdateTaskRequest, parse_task_id,
};
