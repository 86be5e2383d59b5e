//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<FC, FS>(
    value: ReadSignal<String>,
    on_change: FC,
    on_share: FS,
) -> impl IntoView
where
    FC: Fn(String) + 'static + Clone + Send,
    FS: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="search-bar">
            <label class="search-label" for="search-input">"Search parks"</label>
            <div class="search-row">
                <input
                    id="search-input"
                    class="search-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Try Prospect Park, playground, or lake"
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        on_change(event_target_value(&ev));
                    }
                />
                <button
                    class="button button-secondary"
                    type="button"
                    on:click=move |_| on_share(())
                >
                    "Share"
                </button>
            </div>
        </div>
    }
}
