//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use gestor_tareas::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceResult},
};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to noon on 2026-10-19 so "today" is stable in any time zone.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioClock;

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, ScenarioClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub last_create_result: Option<TaskServiceResult<Task>>,
    pub last_delete_result: Option<TaskServiceResult<bool>>,
}

impl TaskWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(ScenarioClock),
            ),
            last_create_result: None,
            last_delete_result: None,
        }
    }

    /// Resolves `today`, `tomorrow` or `yesterday` against the scenario
    /// clock as a `YYYY-MM-DD` string.
    pub fn due_date(day: &str) -> Result<String, eyre::Report> {
        let today = ScenarioClock.local().date_naive();
        let date: Option<NaiveDate> = match day {
            "today" => Some(today),
            "tomorrow" => today.checked_add_days(Days::new(1)),
            "yesterday" => today.checked_sub_days(Days::new(1)),
            other => return Err(eyre::eyre!("unknown relative day '{other}'")),
        };
        date.map(|value| value.format("%Y-%m-%d").to_string())
            .ok_or_else(|| eyre::eyre!("date out of range for '{day}'"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
