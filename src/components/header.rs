//! Page Header Component

use leptos::prelude::*;

/// Static title block
#[component]
pub fn Header(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{title}</h1>
            <p class="page-subtitle">{subtitle}</p>
        </header>
    }
}
