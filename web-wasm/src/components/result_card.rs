//! 検索結果カード

use leptos::prelude::*;
use nyc_finder_common::{map_search_url, ParkRecord, SavedSet};

#[component]
pub fn ResultCard<F>(
    park: ParkRecord,
    saved: ReadSignal<SavedSet>,
    on_toggle_save: F,
) -> impl IntoView
where
    F: Fn(ParkRecord) + 'static + Clone + Send,
{
    let map_url = map_search_url(&park.map_query);
    let is_saved = {
        let id = park.id.clone();
        Signal::derive(move || saved.with(|s| s.contains(&id)))
    };

    let name = park.name.clone();
    let borough = park.borough.clone();
    let address = park.address.clone();
    let media = park.image_url.clone().map(|src| {
        view! {
            <div class="card-media">
                <img src=src alt=name.clone() loading="lazy" />
            </div>
        }
    });

    view! {
        <article class="card">
            {media}
            <div class="card-content">
                <h3>{name}</h3>
                <p class="meta">{borough}</p>
                <p class="address">{address}</p>
            </div>
            <div class="card-actions">
                <a class="button button-tertiary" href=map_url target="_blank" rel="noreferrer">
                    "Open in Google Maps"
                </a>
                <button
                    class=move || {
                        if is_saved.get() { "button button-primary" } else { "button button-secondary" }
                    }
                    type="button"
                    aria-pressed=move || is_saved.get().to_string()
                    on:click=move |_| on_toggle_save(park.clone())
                >
                    {move || if is_saved.get() { "Saved" } else { "Save" }}
                </button>
            </div>
        </article>
    }
}
