//! Console entry point for the Jotter todo list manager.
//!
//! Wires standard input and output to the menu shell over an in-memory
//! task repository. All state is lost when the process ends; that is a
//! deliberate boundary of the program, not an oversight.

use jotter::console::ConsoleShell;
use jotter::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use mockable::DefaultClock;
use std::io;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let mut shell = ConsoleShell::new(service, io::stdin().lock(), io::stdout().lock());
    shell.run().await
}
