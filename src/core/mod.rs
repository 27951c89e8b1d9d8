//! # Core Application Logic
//!
//! The record model, the detail formatting policy, and configuration.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • User (records)       │
//!                    │  • Alert (detail view)  │
//!                    │  • Config               │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`user`]: The `User` record and the built-in roster
//! - [`detail`]: `Alert` building, `DetailError`, and the `AlertPresenter` surface
//! - [`config`]: `~/.passdata/config.toml` loading and resolution

pub mod config;
pub mod detail;
pub mod user;
