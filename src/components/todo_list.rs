//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;

/// The item list, or a placeholder when empty
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <Show when=move || ctx.is_empty()>
            <p class="empty-list">"🎈 no item here..."</p>
        </Show>

        <ul class="todo-list">
            <For
                each=move || ctx.items()
                // Text is part of the key so confirmed edits re-render the row
                key=|item| (item.id, item.text.clone())
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}
