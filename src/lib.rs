//! PassData library exports for testing
//!
//! A list of users whose rows report button taps back to their owner two
//! ways: through a delegate trait object and through a stored closure.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
