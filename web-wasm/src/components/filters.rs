//! 区・並び順のフィルタ

use leptos::prelude::*;
use nyc_finder_common::{Borough, BoroughFilter, SortOption};

#[component]
pub fn Filters<FB, FS>(
    borough: ReadSignal<BoroughFilter>,
    sort: ReadSignal<SortOption>,
    on_borough_change: FB,
    on_sort_change: FS,
) -> impl IntoView
where
    FB: Fn(BoroughFilter) + 'static + Clone + Send,
    FS: Fn(SortOption) + 'static + Clone + Send,
{
    let borough_options = std::iter::once(BoroughFilter::All)
        .chain(Borough::ALL.into_iter().map(BoroughFilter::Only))
        .map(|option| {
            view! {
                <option value=option.as_param() selected=move || borough.get() == option>
                    {option.label()}
                </option>
            }
        })
        .collect_view();

    let sort_options = SortOption::ALL
        .into_iter()
        .map(|option| {
            view! {
                <option value=option.as_param() selected=move || sort.get() == option>
                    {option.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="filters">
            <label class="filter">
                <span class="filter-label">"Borough"</span>
                <select
                    class="select"
                    on:change=move |ev| {
                        on_borough_change(BoroughFilter::parse(&event_target_value(&ev)));
                    }
                >
                    {borough_options}
                </select>
            </label>
            <label class="filter">
                <span class="filter-label">"Sort"</span>
                <select
                    class="select"
                    on:change=move |ev| {
                        on_sort_change(SortOption::parse(&event_target_value(&ev)));
                    }
                >
                    {sort_options}
                </select>
            </label>
        </div>
    }
}
