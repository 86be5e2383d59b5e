//! 結果エリア（読み込み中・エラー・0件・一覧）

use leptos::prelude::*;
use nyc_finder_common::{ParkRecord, ResultState, SavedSet, EMPTY_RESULTS_MESSAGE};
use crate::components::result_card::ResultCard;

const SKELETON_COUNT: usize = 5;

#[component]
pub fn ResultList<F>(
    results: ReadSignal<ResultState>,
    saved: ReadSignal<SavedSet>,
    on_toggle_save: F,
) -> impl IntoView
where
    F: Fn(ParkRecord) + 'static + Clone + Send + Sync,
{
    let body = move || match results.get() {
        ResultState::Loading => view! {
            <div class="skeleton-list" aria-busy="true">
                {(0..SKELETON_COUNT)
                    .map(|_| view! {
                        <div class="card skeleton">
                            <div class="skeleton-line" />
                            <div class="skeleton-line short" />
                            <div class="skeleton-line" />
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        ResultState::Error(message) => view! {
            <div class="state state-error" role="alert">
                <p>{message}</p>
            </div>
        }
        .into_any(),
        ResultState::Empty => view! {
            <div class="state state-empty">
                <p>{EMPTY_RESULTS_MESSAGE}</p>
            </div>
        }
        .into_any(),
        ResultState::Populated(records) => {
            let cards = records
                .into_iter()
                .map(|park| {
                    view! { <ResultCard park=park saved=saved on_toggle_save=on_toggle_save.clone() /> }
                })
                .collect_view();
            view! { <div class="results-list">{cards}</div> }.into_any()
        }
    };

    view! {
        <section>
            <div class="section-header">
                <h2>"Results"</h2>
                <span class="meta">
                    {move || format!("{} spots", results.with(|r| r.records().len()))}
                </span>
            </div>
            {body}
        </section>
    }
}
