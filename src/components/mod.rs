//! UI Components
//!
//! Leptos components of the todo widget.

mod add_item_form;
mod edit_field;
mod row_action_button;
mod todo_list;
mod todo_row;

pub use add_item_form::AddItemForm;
pub use edit_field::EditField;
pub use row_action_button::RowActionButton;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
