//! In-memory repository for tests and ephemeral runs.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskChanges, TaskId, TaskSort},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// The title index plays the part of the store's uniqueness constraint: it is
/// checked and updated under the same write lock as the task map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    title_index: HashMap<String, TaskId>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InMemoryTaskState {
    /// Hands out the next identifier. Identifiers are never reused, even
    /// after the task holding them is deleted.
    fn next_id(&mut self) -> TaskRepositoryResult<TaskId> {
        let candidate = self.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other("task id space exhausted"))
        })?;
        let id = TaskId::new(candidate).map_err(TaskRepositoryError::persistence)?;
        self.last_id = candidate;
        Ok(id)
    }

    fn title_holder(&self, title: &str) -> Option<TaskId> {
        self.title_index.get(title).copied()
    }
}

fn poisoned(err: &impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.title_holder(task.title()).is_some() {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().to_owned()));
        }

        let id = state.next_id()?;
        let stored = task.clone().into_task(id);
        state.title_index.insert(stored.title().to_owned(), id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list(&self, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by(|left, right| sort.compare(left, right));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;

        let old_task = state
            .tasks
            .get(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?
            .clone();

        if state
            .title_holder(changes.title())
            .is_some_and(|holder| holder != id)
        {
            return Err(TaskRepositoryError::DuplicateTitle(
                changes.title().to_owned(),
            ));
        }

        let updated = old_task.with_changes(changes);
        state.title_index.remove(old_task.title());
        state.title_index.insert(updated.title().to_owned(), id);
        state.tasks.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let Some(removed) = state.tasks.remove(&id) else {
            return Ok(false);
        };
        state.title_index.remove(removed.title());
        Ok(true)
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<TaskId>,
    ) -> TaskRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state
            .title_holder(title)
            .is_some_and(|holder| Some(holder) != exclude))
    }
}
