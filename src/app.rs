//! Todo Widget App
//!
//! Root component: opens the store over local storage and lays out the
//! add form above the list.

use leptos::prelude::*;
use log::info;
use todo_store::TodoStore;

use crate::components::{AddItemForm, TodoList};
use crate::context::TodoContext;
use crate::options::WidgetOptions;
use crate::storage::LocalStorage;

#[component]
pub fn App(options: WidgetOptions) -> impl IntoView {
    let storage = LocalStorage::new(options.store.storage_key.clone());
    let store = TodoStore::open(storage, &options.store);
    info!("starting with {} items", store.len());

    // Provide context to all children
    provide_context(TodoContext::new(RwSignal::new(store), options));

    view! {
        <div class="todo-container">
            <AddItemForm />
            <TodoList />
        </div>
    }
}
