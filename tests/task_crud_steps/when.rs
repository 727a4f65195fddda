//! When steps for task CRUD BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use jotter::task::domain::TaskId;
use rstest_bdd_macros::when;

#[when(r#"a task "{description}" is added"#)]
fn add_task(world: &mut TodoWorld, description: String) {
    world.last_add_result = Some(run_async(world.service.add(description)));
}

#[when("task {id:u64} is deleted")]
fn delete_task(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("construct task id for delete step")?;
    run_async(world.service.delete(task_id)).wrap_err("delete task")?;
    Ok(())
}

#[when("task {id:u64} is toggled")]
fn toggle_task(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("construct task id for toggle step")?;
    world.last_toggle_result = Some(run_async(world.service.toggle_complete(task_id)));
    Ok(())
}

#[when(r#"task {id:u64} is renamed to "{description}""#)]
fn rename_task(world: &mut TodoWorld, id: u64, description: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("construct task id for rename step")?;
    world.last_update_result = Some(run_async(world.service.update(task_id, description)));
    Ok(())
}
