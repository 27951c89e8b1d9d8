//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top line with list title, user count, and last status
//! - `AlertDialog`: The centered alert overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `UserRow`: One recyclable row with its two notification channels
//! - `UserTable`: Selection, scrolling, and activation over a pooled window of rows
//! - `AlertSlot`: The single visible alert (also the owner's presenter)
//!
//! ### Owner
//!
//! `UserList` isn't drawn itself. It holds the users and binds rows for the
//! table, wiring both row channels back to itself.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Top status line)
//! ├── user_row.rs    (Row with Delegate + Closure buttons)
//! ├── row_pool.rs    (Row recycling)
//! ├── user_list.rs   (List owner)
//! ├── user_table.rs  (List rendering surface)
//! └── alert.rs       (Modal alert)
//! ```

pub mod alert;
pub mod row_pool;
pub mod title_bar;
pub mod user_list;
pub mod user_row;
pub mod user_table;

pub use alert::{AlertDialog, AlertSlot};
pub use row_pool::RowPool;
pub use title_bar::TitleBar;
pub use user_list::UserList;
pub use user_row::{InfoTapCallback, InfoTapDelegate, RowButton, UserRow};
pub use user_table::{TableEvent, UserTable, UserTableState};
