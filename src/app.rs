//! Portfolio Gallery App
//!
//! Root component: owns the store, starts the fetch, re-renders the page
//! view model on every state change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryBar, DetailPanel, Header, MainContent};
use crate::config::AppConfig;
use crate::context::Dispatcher;
use crate::render::render;
use crate::update::init;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (initial, startup) = init(config.api_url);
    let store = Store::new(initial);
    let dispatcher = Dispatcher::new(store);

    // Provide context to all children
    provide_context(dispatcher);

    // Startup fetch, issued exactly once
    dispatcher.run(startup);

    view! {
        <div class="app-layout">
            {move || {
                let page = store.with(|state| render(state));
                view! {
                    <Header title=page.title subtitle=page.subtitle />
                    <CategoryBar buttons=page.categories />
                    <DetailPanel detail=page.detail />
                    <MainContent content=page.content />
                }
            }}
        </div>
    }
}
