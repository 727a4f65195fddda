//! Jotter: an in-memory console todo list manager.
//!
//! This crate provides the task-management core for a single-user,
//! single-process todo list: validated task records, sequential identifier
//! assignment, and CRUD plus completion-status operations. All state lives
//! in memory for the lifetime of one run.
//!
//! # Architecture
//!
//! Jotter follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`task`]: Task records, identifier assignment, and CRUD operations
//! - [`console`]: Menu-driven console front end over the task service

pub mod console;
pub mod task;
