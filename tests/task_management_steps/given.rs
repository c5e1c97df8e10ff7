//! Given steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use gestor_tareas::task::{domain::TaskSort, services::CreateTaskRequest};
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list(TaskSort::default())).wrap_err("list tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {} tasks", tasks.len()));
    }
    Ok(())
}

#[given(r#"a task titled "{title}" due {day} exists"#)]
fn existing_task(world: &mut TaskWorld, title: String, day: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title, TaskWorld::due_date(&day)?);
    run_async(world.service.create(request)).wrap_err("create existing task")?;
    Ok(())
}
