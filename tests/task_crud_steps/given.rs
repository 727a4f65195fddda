//! Given steps for task CRUD BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task "{description}" exists"#)]
fn task_exists(world: &mut TodoWorld, description: String) -> Result<(), eyre::Report> {
    run_async(world.service.add(description)).wrap_err("create task for scenario setup")?;
    Ok(())
}
