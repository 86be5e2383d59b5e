//! ヘッダーコンポーネント

use leptos::prelude::*;
use nyc_finder_common::DOCUMENT_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="hero">
            <div>
                <p class="eyebrow">{DOCUMENT_TITLE}</p>
                <h1>"Find parks across New York City."</h1>
                <p class="subhead">
                    "Explore the NYC Open Data Parks Properties dataset. Save your favorites and share a search."
                </p>
            </div>
        </header>
    }
}
