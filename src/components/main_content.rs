//! Main Content Component
//!
//! Thumbnail grid for the current category, or the error banner.

use leptos::prelude::*;

use crate::context::use_dispatcher;
use crate::render::{ContentView, Thumbnail};

/// A single thumbnail in the grid
#[component]
fn ThumbnailCard(thumbnail: Thumbnail) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let Thumbnail { item_id, title, image_url, overlay_color, selected, on_click } = thumbnail;
    let class = if selected { "thumbnail selected" } else { "thumbnail" };
    let pressed = if selected { "true" } else { "false" };
    let tooltip = title.clone();
    let alt = title.clone();

    view! {
        <button
            class=class
            data-item-id=item_id.to_string()
            title=tooltip
            aria-pressed=pressed
            on:click=move |_| dispatcher.send(on_click.clone())
        >
            <img class="thumbnail-image" src=image_url alt=alt />
            <span
                class="thumbnail-overlay"
                style=format!("background-color: {};", overlay_color)
            >
                <span class="thumbnail-title">{title}</span>
            </span>
        </button>
    }
}

#[component]
pub fn MainContent(content: ContentView) -> impl IntoView {
    match content {
        ContentView::ErrorBanner(message) => view! {
            <main class="main-content">
                <div class="error-banner" role="alert">{message}</div>
            </main>
        }
        .into_any(),
        ContentView::Grid(thumbnails) => {
            let count = thumbnails.len();
            view! {
                <main class="main-content">
                    <div class="item-grid">
                        {thumbnails
                            .into_iter()
                            .map(|thumbnail| view! { <ThumbnailCard thumbnail=thumbnail /> })
                            .collect_view()}
                    </div>
                    <p class="item-count">{format!("{} items", count)}</p>
                </main>
            }
            .into_any()
        }
    }
}
