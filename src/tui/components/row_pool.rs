//! # Row Pool
//!
//! Recycles [`UserRow`] instances across render passes. Only as many rows
//! exist as have ever been visible at once; scrolling rebinds the same rows
//! to different users instead of allocating new ones.
//!
//! ```text
//! pass 1: recycle_all() → dequeue() ×3  → rows[0..3] bound to users 0,1,2
//! pass 2: recycle_all() → dequeue() ×3  → rows[0..3] rebound to users 1,2,3
//! ```

use log::debug;

use super::user_row::UserRow;

#[derive(Default)]
pub struct RowPool {
    rows: Vec<UserRow>,
    in_use: usize,
}

impl RowPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every row to the pool. Bindings stay until the row is dequeued again.
    pub fn recycle_all(&mut self) {
        self.in_use = 0;
    }

    /// Hand out the next free row, allocating only when the pool is exhausted.
    pub fn dequeue(&mut self) -> &mut UserRow {
        if self.in_use == self.rows.len() {
            self.rows.push(UserRow::new());
            debug!("Row pool grew to {} rows", self.rows.len());
        }
        let row = &mut self.rows[self.in_use];
        self.in_use += 1;
        row
    }

    /// Rows handed out since the last `recycle_all`, in dequeue order.
    pub fn in_use(&self) -> &[UserRow] {
        &self.rows[..self.in_use]
    }

    pub fn in_use_mut(&mut self) -> &mut [UserRow] {
        &mut self.rows[..self.in_use]
    }

    /// Total rows ever allocated.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::user::User;
    use std::rc::Rc;

    #[test]
    fn test_dequeue_allocates_on_demand() {
        let mut pool = RowPool::new();
        pool.dequeue();
        pool.dequeue();
        assert_eq!(pool.capacity(), 2);
        assert_eq!(pool.in_use().len(), 2);
    }

    #[test]
    fn test_recycled_rows_are_reused() {
        let mut pool = RowPool::new();
        pool.dequeue().bind(Rc::new(User::new(1, "Au", 22)));
        pool.dequeue();

        pool.recycle_all();
        assert!(pool.in_use().is_empty());

        // Same instance comes back, still holding its old binding
        let row = pool.dequeue();
        assert_eq!(row.label(), "Au");
        assert_eq!(pool.capacity(), 2);
    }
}
