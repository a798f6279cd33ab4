//! Tourboard Test Utils
//!
//! Shared testing utilities for the tourism portal: a builder for in-memory
//! SQLite test databases and factories that create entity rows with
//! sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_category_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_portal_tables().build().await?;
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
