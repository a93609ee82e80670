//! Category Bar Component
//!
//! Filter buttons for switching between categories.

use leptos::prelude::*;

use crate::context::use_dispatcher;
use crate::render::CategoryButton;

/// Category navigation bar
#[component]
pub fn CategoryBar(buttons: Vec<CategoryButton>) -> impl IntoView {
    let dispatcher = use_dispatcher();

    view! {
        <nav class="category-bar">
            {buttons
                .into_iter()
                .map(|CategoryButton { id, label, selected, on_click }| {
                    let class = if selected { "category-btn selected" } else { "category-btn" };
                    let pressed = if selected { "true" } else { "false" };
                    match on_click {
                        // Selected category: styled, not wired
                        None => view! {
                            <button class=class data-category-id=id.to_string() aria-pressed=pressed>
                                {label}
                            </button>
                        }
                        .into_any(),
                        Some(msg) => view! {
                            <button
                                class=class
                                data-category-id=id.to_string()
                                aria-pressed=pressed
                                on:click=move |_| dispatcher.send(msg.clone())
                            >
                                {label}
                            </button>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}
        </nav>
    }
}
