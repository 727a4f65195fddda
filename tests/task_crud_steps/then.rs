//! Then steps for task CRUD BDD scenarios.

use super::world::{TodoWorld, run_async};
use jotter::task::{
    domain::{TaskDomainError, TaskId},
    services::TaskServiceError,
};
use rstest_bdd_macros::then;

#[then("the newest task has id {id:u64}")]
fn newest_task_has_id(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    let task = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected add failure: {err}"))?;
    if task.id().value() != id {
        return Err(eyre::eyre!("expected id {id}, found {}", task.id()));
    }
    Ok(())
}

#[then(r#"listing the tasks yields ids "{expected}""#)]
fn listing_yields_ids(world: &mut TodoWorld, expected: String) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    let ids: Vec<String> = tasks
        .iter()
        .map(|task| task.id().value().to_string())
        .collect();
    let rendered = ids.join(", ");
    if rendered != expected {
        return Err(eyre::eyre!("expected ids [{expected}], found [{rendered}]"));
    }
    Ok(())
}

#[then("listing the tasks yields no tasks")]
fn listing_yields_nothing(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the add is rejected for an empty description")]
fn add_rejected_for_empty_description(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    if !matches!(
        result,
        Err(TaskServiceError::Validation(
            TaskDomainError::EmptyDescription
        ))
    ) {
        return Err(eyre::eyre!("expected an empty-description rejection"));
    }
    Ok(())
}

#[then("the toggle fails with not found for id {id:u64}")]
fn toggle_failed_not_found(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_toggle_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing toggle result in scenario world"))?;
    if !matches!(
        result,
        Err(TaskServiceError::NotFound(missing)) if missing.value() == id
    ) {
        return Err(eyre::eyre!("expected a not-found failure for id {id}"));
    }
    Ok(())
}

#[then(r#"task {id:u64} reads "{description}" and is incomplete"#)]
fn task_reads_description(
    world: &mut TodoWorld,
    id: u64,
    description: String,
) -> Result<(), eyre::Report> {
    let task_id =
        TaskId::new(id).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))?;
    let task = run_async(world.service.get(task_id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected task {id} to exist"))?;
    if task.description().as_str() != description {
        return Err(eyre::eyre!(
            "expected description '{description}', found '{}'",
            task.description()
        ));
    }
    if task.is_complete() {
        return Err(eyre::eyre!("expected task {id} to remain incomplete"));
    }
    Ok(())
}
