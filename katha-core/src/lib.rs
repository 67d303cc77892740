//! Story catalog and navigation dispatch for the Katha dashboard.
//!
//! This crate provides:
//! - A validated, ordered, read-only catalog of story records
//! - Route collision reporting for shared destinations
//! - A dispatcher that turns a selected record into one navigation request
//! - Test support for exercising dispatch without a real host
//!
//! # Quick Start
//!
//! ```
//! use katha_core::{sample_records, Catalog, Dispatcher};
//! use katha_core::testing::RecordingNavigator;
//!
//! let catalog = Catalog::new(sample_records())?;
//! let mut dispatcher = Dispatcher::new(RecordingNavigator::new());
//!
//! let first = &catalog.records()[0];
//! dispatcher.dispatch(&catalog, first)?;
//!
//! assert_eq!(dispatcher.navigator().paths(), ["/golconda"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod dispatch;
pub mod testing;

// Primary public API
pub use catalog::{sample_records, Catalog, CatalogError, RouteCollision, StoryRecord};
pub use dispatch::{DispatchError, Dispatcher, Navigator};
pub use testing::{DispatchHarness, RecordingNavigator};
