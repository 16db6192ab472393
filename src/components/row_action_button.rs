//! Row Action Button Component

use leptos::prelude::*;
use todo_store::ItemId;

use crate::context::use_todo_context;
use crate::controls::{ButtonState, RowAction};

/// One action slot of a row (delete, edit/confirm, complete)
#[component]
pub fn RowActionButton(action: RowAction, id: ItemId) -> impl IntoView {
    let ctx = use_todo_context();
    let state = Memo::new(move |_| ButtonState::new(action, ctx.is_editing_item(id), ctx.is_editing()));
    let icon_style = format!("font-size: {};", ctx.icon_size());

    view! {
        <button
            type="button"
            class=move || state.get().kind.class()
            title=move || state.get().kind.title()
            style=icon_style
            disabled=move || state.get().disabled
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.dispatch(action, id);
            }
        >
            {move || state.get().kind.glyph()}
        </button>
    }
}
