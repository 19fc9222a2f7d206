//! Domain Layer
//!
//! Grocery entities and the errors user input can produce.
//! No persistence or presentation concerns live here.

mod error;
mod item;

pub use error::InputError;
pub use item::{GroceryItem, GroceryList};
