//! Then steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use gestor_tareas::task::{domain::TaskSort, services::TaskServiceError};
use rstest_bdd_macros::then;

#[then("the task is stored with id {id:i64}")]
fn task_stored_with_id(world: &TaskWorld, id: i64) -> Result<(), eyre::Report> {
    let task = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))?;
    if task.id().value() != id {
        return Err(eyre::eyre!("expected id {id}, found {}", task.id()));
    }
    let fetched = run_async(world.service.get(id))
        .map_err(|err| eyre::eyre!("stored task {id} is not retrievable: {err}"))?;
    if &fetched != task {
        return Err(eyre::eyre!("retrieved task does not match the created one"));
    }
    Ok(())
}

#[then("creation fails with a duplicate title error")]
fn creation_fails_as_duplicate(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if !matches!(result, Err(TaskServiceError::DuplicateTitle(_))) {
        return Err(eyre::eyre!("expected a duplicate title error, got {result:?}"));
    }
    Ok(())
}

#[then("creation fails because the due date is in the past")]
fn creation_fails_for_past_date(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    match result {
        Err(error) if error.kind() == "DateInPast" => Ok(()),
        other => Err(eyre::eyre!("expected a past due date error, got {other:?}")),
    }
}

#[then("task {id:i64} is titled \"{title}\"")]
fn task_is_titled(world: &TaskWorld, id: i64, title: String) -> Result<(), eyre::Report> {
    let task = run_async(world.service.get(id))
        .map_err(|err| eyre::eyre!("task {id} is not retrievable: {err}"))?;
    if task.title() != title {
        return Err(eyre::eyre!("expected title '{title}', found '{}'", task.title()));
    }
    Ok(())
}

#[then("the deletion is confirmed")]
fn deletion_confirmed(world: &TaskWorld) -> Result<(), eyre::Report> {
    match world.last_delete_result {
        Some(Ok(true)) => Ok(()),
        ref other => Err(eyre::eyre!("expected a confirmed deletion, got {other:?}")),
    }
}

#[then("nothing was deleted")]
fn nothing_deleted(world: &TaskWorld) -> Result<(), eyre::Report> {
    match world.last_delete_result {
        Some(Ok(false)) => Ok(()),
        ref other => Err(eyre::eyre!("expected no deletion, got {other:?}")),
    }
}

#[then("the task list holds {count:usize} task")]
fn task_list_holds(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list(TaskSort::default()))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskWorld) -> Result<(), eyre::Report> {
    task_list_holds(world, 0)
}
