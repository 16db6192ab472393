//! Todo Row Component
//!
//! Individual item in the list: static text or the inline edit field,
//! followed by the configured action buttons.

use leptos::prelude::*;
use todo_store::TodoItem;

use crate::components::{EditField, RowActionButton};
use crate::context::use_todo_context;

/// A single item row
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_todo_context();

    let id = item.id;
    let text = item.text;
    // Memo so typing in the edit field does not rebuild the row
    let is_editing = Memo::new(move |_| ctx.is_editing_item(id));

    view! {
        <li class=move || if is_editing.get() { "todo-row editing" } else { "todo-row" }>
            {move || if is_editing.get() {
                view! { <EditField /> }.into_any()
            } else {
                view! { <span class="todo-text">{text.clone()}</span> }.into_any()
            }}

            <div class="row-actions">
                {ctx.row_actions().into_iter().map(|action| view! {
                    <RowActionButton action=action id=id />
                }).collect_view()}
            </div>
        </li>
    }
}
