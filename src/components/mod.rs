//! UI Components
//!
//! Leptos components for the grocery list page.

mod confirm_button;
mod grocery_list_view;
mod grocery_row;
mod list_controls;
mod new_item_form;
mod notice_banner;

pub use confirm_button::ConfirmButton;
pub use grocery_list_view::GroceryListView;
pub use grocery_row::GroceryRow;
pub use list_controls::ListControls;
pub use new_item_form::NewItemForm;
pub use notice_banner::NoticeBanner;
