//! Gestor de Tareas: a personal task manager served as JSON over HTTP.
//!
//! Tasks have a unique title, an optional description and a due date that may
//! not lie in the past. The [`task`] module holds the domain, validation,
//! storage ports, adapters and service; [`http`] exposes them through `axum`.

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
