//! Detail Panel Component
//!
//! Shows the selected item, collapsed when nothing is selected.

use leptos::prelude::*;

use crate::render::DetailView;

#[component]
pub fn DetailPanel(detail: Option<DetailView>) -> impl IntoView {
    let Some(DetailView { item_id, title, description, image_url, link_url }) = detail else {
        return view! { <section class="detail-panel collapsed"></section> }.into_any();
    };
    let alt = title.clone();

    view! {
        <section class="detail-panel" data-item-id=item_id.to_string()>
            <img class="detail-image" src=image_url alt=alt />
            <div class="detail-body">
                <h2 class="detail-title">{title}</h2>
                <p class="detail-description">{description}</p>
                <a
                    class="detail-link"
                    href=link_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View project"
                </a>
            </div>
        </section>
    }
    .into_any()
}
