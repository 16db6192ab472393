//! Add Item Form Component
//!
//! Single text field + submit button for new items.

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Form for prepending new items; locked while an edit is active
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let icon_style = format!("font-size: {};", ctx.icon_size());

    // Focus on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add(&new_text.get_untracked());
        set_new_text.set(String::new());
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    view! {
        <form class="add-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Type here..."
                autofocus=true
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                disabled=move || ctx.is_editing()
            />
            <button
                type="submit"
                title="Add Item"
                style=icon_style
                disabled=move || ctx.is_editing()
            >
                "＋"
            </button>
        </form>
    }
}
