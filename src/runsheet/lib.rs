//! # Runsheet Architecture
//!
//! Runsheet is a **UI-agnostic test-catalog library**. It maintains a
//! multi-sheet workbook of flight-search test scenarios and records execution
//! results against them. The CLI is one client of the library, not the other
//! way around.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: update, reset, batch, query,        │
//! │    generate                                                 │
//! │  - Operates on Rust types, returns report types             │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes regular Rust
//! arguments, returns regular Rust types, never writes to stdout/stderr,
//! never calls `std::process::exit`, and never assumes a terminal. The same
//! core could serve a REST API or a test harness directly.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing
//!    lives.
//! 2. **Storage** (`tests/fs_store_test.rs`): `FileStore` behavior against
//!    real temp directories.
//! 3. **CLI** (`tests/cli_test.rs`): end-to-end runs of the binary with
//!    `assert_cmd`.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
