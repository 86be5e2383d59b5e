//! 保存パネル

use leptos::prelude::*;
use nyc_finder_common::{SavedSet, EMPTY_SAVED_MESSAGE};

#[component]
pub fn SavedPanel<F>(saved: ReadSignal<SavedSet>, on_remove: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let count = move || saved.with(SavedSet::len);

    let body = move || {
        let items = saved.with(|s| s.items().to_vec());
        if items.is_empty() {
            return view! { <p class="empty">{EMPTY_SAVED_MESSAGE}</p> }.into_any();
        }

        let rows = items
            .into_iter()
            .map(|park| {
                let on_remove = on_remove.clone();
                let id = park.id.clone();
                let thumb = park.image_url.clone().map(|src| {
                    view! {
                        <div class="saved-thumb">
                            <img src=src alt=park.name.clone() loading="lazy" />
                        </div>
                    }
                });
                view! {
                    <li class="saved-item">
                        <div class="saved-content">
                            {thumb}
                            <div>
                                <h4>{park.name}</h4>
                                <p class="meta">{park.borough}</p>
                                <p class="address">{park.address}</p>
                            </div>
                        </div>
                        <button
                            class="button button-link"
                            type="button"
                            on:click=move |_| on_remove(id.clone())
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect_view();

        view! { <ul class="saved-list">{rows}</ul> }.into_any()
    };

    view! {
        <section class="saved-panel">
            <header class="panel-header">
                <h2>"Saved"</h2>
                <span class="badge" aria-label=move || format!("{} saved parks", count())>
                    {count}
                </span>
            </header>
            {body}
        </section>
    }
}
