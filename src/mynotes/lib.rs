//! # MyNotes Architecture
//!
//! MyNotes keeps one user's free-text notes grouped by subject and persists them to a
//! plain text file per user. The library does the work; the `mynotes` binary is an
//! interactive menu on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompts, menu loop, colored output, exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One NotesApi per session: user + notes + backend         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, view, list, save, load, delete                      │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data + Storage (notes.rs, format.rs, store/)               │
//! │  - NoteStore: subject -> ordered lines                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result<CmdResult>`.
//! It never reads stdin, never writes stdout and never exits the process. Only the
//! storage backends touch the filesystem.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: One module per operation
//! - [`notes`]: The in-memory note store
//! - [`format`]: The notes file text format
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `User` and display types
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod notes;
pub mod store;
