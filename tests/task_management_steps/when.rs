//! When steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use gestor_tareas::task::services::{CreateTaskRequest, UpdateTaskRequest};
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" due {day} is created"#)]
fn create_task(world: &mut TaskWorld, title: String, day: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title, TaskWorld::due_date(&day)?).with_description("");
    world.last_create_result = Some(run_async(world.service.create(request)));
    Ok(())
}

#[when(r#"task {id:i64} is renamed to "{title}""#)]
fn rename_task(world: &mut TaskWorld, id: i64, title: String) -> Result<(), eyre::Report> {
    let current = run_async(world.service.get(id))
        .map_err(|err| eyre::eyre!("task {id} should exist before renaming: {err}"))?;
    let due_date = current.due_date().format("%Y-%m-%d").to_string();
    let mut request = UpdateTaskRequest::new(id, title, due_date);
    if let Some(description) = current.description() {
        request = request.with_description(description);
    }
    run_async(world.service.update(request))
        .map_err(|err| eyre::eyre!("rename of task {id} failed: {err}"))?;
    Ok(())
}

#[when("task {id:i64} is deleted")]
fn delete_task(world: &mut TaskWorld, id: i64) {
    world.last_delete_result = Some(run_async(world.service.delete(id)));
}
