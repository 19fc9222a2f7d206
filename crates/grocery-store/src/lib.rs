//! Grocery List Store
//!
//! Layered crate:
//! - domain: items, the ordered list and input errors
//! - storage: the key-value persistence contract and its backends
//! - store: the list state plus its persisted mirror
//! - view: pure view-model rendering for list front ends

pub mod config;
pub mod domain;
pub mod storage;
pub mod store;
pub mod view;

pub use config::StoreConfig;
pub use domain::{GroceryItem, GroceryList, InputError};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
#[cfg(feature = "fs")]
pub use storage::FileStorage;
#[cfg(feature = "sqlite")]
pub use storage::SqliteStorage;
pub use store::GroceryListStore;
pub use view::{clear_request, notice_for, render_rows, EmptyState, Intent, ItemRow};
