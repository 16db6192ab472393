//! Inline Edit Field Component

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Text field bound to the pending text of the edit session.
///
/// Enter confirms, Escape cancels.
#[component]
pub fn EditField() -> impl IntoView {
    let ctx = use_todo_context();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            class="edit-input"
            placeholder="please edit item..."
            node_ref=input_ref
            prop:value=move || ctx.pending_text()
            on:input=move |ev| ctx.update_edit(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => {
                    ev.prevent_default();
                    ctx.confirm_edit();
                }
                "Escape" => ctx.cancel_edit(),
                _ => {}
            }
        />
    }
}
