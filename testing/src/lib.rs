//! # Shopkeep Testing
//!
//! Testing utilities and helpers for Shopkeep reducers.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - The `ReducerTest` Given-When-Then harness
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use shopkeep_testing::SequentialIdGenerator;
//! use shopkeep_runtime::Store;
//!
//! #[tokio::test]
//! async fn test_add_flow() {
//!     let env = ShoppingListEnvironment::new(Arc::new(SequentialIdGenerator::new()));
//!     let store = Store::new(ShoppingListState::default(), ShoppingListReducer::new(), env);
//!
//!     store.send(ShoppingAction::AddItem { name: "bread".into() }).await;
//!
//!     let count = store.state(|s| s.count()).await;
//!     assert_eq!(count, 1);
//! }
//! ```

use shopkeep_core::environment::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{AtomicU64, IdGenerator, Ordering, Uuid};

    /// Predictable id generator for deterministic tests
    ///
    /// Hands out `00000000-0000-0000-0000-000000000001`, then `...0002`, and
    /// so on. Ids never repeat for the lifetime of the generator.
    ///
    /// # Example
    ///
    /// ```
    /// use shopkeep_testing::mocks::SequentialIdGenerator;
    /// use shopkeep_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `1`
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_after(0)
        }

        /// Create a generator whose first id is `last + 1`
        #[must_use]
        pub const fn starting_after(last: u64) -> Self {
            Self {
                issued: AtomicU64::new(last),
            }
        }

        /// Number of ids issued so far (plus any starting offset)
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }

    /// Id generator that always returns the same id
    ///
    /// Useful for exercising duplicate-id handling.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedIdGenerator(pub Uuid);

    impl IdGenerator for FixedIdGenerator {
        fn next_id(&self) -> Uuid {
            self.0
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use mocks::{FixedIdGenerator, SequentialIdGenerator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(), Uuid::from_u128(1));
        assert_eq!(ids.next_id(), Uuid::from_u128(2));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_sequential_ids_with_offset() {
        let ids = SequentialIdGenerator::starting_after(41);
        assert_eq!(ids.next_id(), Uuid::from_u128(42));
    }

    #[test]
    fn test_fixed_ids_repeat() {
        let ids = FixedIdGenerator(Uuid::from_u128(9));
        assert_eq!(ids.next_id(), ids.next_id());
    }
}
