//! メインアプリケーションコンポーネント
//!
//! 状態遷移はすべて `Finder` が持つ。ここではブラウザのタイマーと
//! 非同期タスクを繋ぎ、変更後に表示用シグナルへ反映するだけ。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nyc_finder_common::{
    BoroughFilter, ClipboardWriter, Finder, ParkRecord, SearchTicket, SortOption,
    DEFAULT_DEBOUNCE_MS, NOTIFICATION_DURATION_MS,
};
use crate::api::parks::FetchParkSource;
use crate::browser::{BrowserClipboard, BrowserUrl, LocalStore};
use crate::components::{
    filters::Filters,
    header::Header,
    result_list::ResultList,
    saved_panel::SavedPanel,
    search_bar::SearchBar,
    toast::Toast,
};

type BrowserFinder = Finder<LocalStore, BrowserUrl>;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn App() -> impl IntoView {
    let (finder, first_ticket) = Finder::start(LocalStore, BrowserUrl, DEFAULT_DEBOUNCE_MS);

    // 表示用シグナル
    let (search_text, set_search_text) = signal(finder.filters().search_text.clone());
    let (borough, set_borough) = signal(finder.filters().borough);
    let (sort, set_sort) = signal(finder.filters().sort);
    let (results, set_results) = signal(finder.results().clone());
    let (saved, set_saved) = signal(finder.saved().clone());
    let (toast, set_toast) = signal(None::<String>);

    let finder = StoredValue::new_local(finder);
    // 置き換えると前のタイマーは破棄される
    let search_timer = StoredValue::new_local(None::<Timeout>);
    let toast_timer = StoredValue::new_local(None::<Timeout>);

    let sync = move || {
        finder.try_with_value(|f: &BrowserFinder| {
            set_borough.set(f.filters().borough);
            set_sort.set(f.filters().sort);
            set_results.set(f.results().clone());
            set_saved.set(f.saved().clone());
            set_toast.set(f.notification().map(|n| n.message.clone()));
        });
    };

    // 検索を実行して結果を戻す（古い世代は Finder 側で捨てる）
    let run = move |ticket: SearchTicket| {
        sync();
        spawn_local(async move {
            let outcome = ticket.execute(&FetchParkSource::default()).await;
            if finder.try_update_value(|f| f.complete(outcome)).unwrap_or(false) {
                sync();
            }
        });
    };

    let on_search_change = move |text: String| {
        set_search_text.set(text.clone());
        let now = now_ms();
        let Some(deadline) = finder.try_update_value(|f| f.set_search_text(text, now)) else {
            return;
        };

        let wait = deadline.saturating_sub(now) as u32;
        let timer = Timeout::new(wait, move || {
            // タイマーが期限ちょうどに発火しても確定させる
            let ticket = finder
                .try_update_value(|f| f.poll_search(now_ms().max(deadline)))
                .flatten();
            if let Some(ticket) = ticket {
                run(ticket);
            }
        });
        search_timer.try_update_value(|t| *t = Some(timer));
    };

    let on_borough_change = move |value: BoroughFilter| {
        if let Some(ticket) = finder.try_update_value(|f| f.set_borough(value)).flatten() {
            run(ticket);
        }
    };

    let on_sort_change = move |value: SortOption| {
        if let Some(ticket) = finder.try_update_value(|f| f.set_sort(value)).flatten() {
            run(ticket);
        }
    };

    let on_toggle_save = move |park: ParkRecord| {
        finder.try_update_value(|f| f.toggle_save(park));
        sync();
    };

    let on_remove = move |id: String| {
        finder.try_update_value(|f| f.remove_saved(&id));
        sync();
    };

    let on_share = move |_: ()| {
        let Some(link) = finder.try_with_value(|f| f.share_link()) else {
            return;
        };

        spawn_local(async move {
            let result = BrowserClipboard.write_text(&link).await;
            let Some(id) = finder.try_update_value(|f| f.finish_share(result, now_ms()).id) else {
                return;
            };
            sync();

            let timer = Timeout::new(NOTIFICATION_DURATION_MS as u32, move || {
                if finder
                    .try_update_value(|f| f.dismiss_notification_if(id))
                    .unwrap_or(false)
                {
                    sync();
                }
            });
            toast_timer.try_update_value(|t| *t = Some(timer));
        });
    };

    let on_close_toast = move |_: ()| {
        toast_timer.try_update_value(|t| *t = None);
        finder.try_update_value(|f| f.dismiss_notification());
        sync();
    };

    on_cleanup(move || {
        search_timer.try_update_value(|t| *t = None);
        toast_timer.try_update_value(|t| *t = None);
        finder.try_update_value(|f| f.shutdown());
    });

    run(first_ticket);

    view! {
        <div class="app">
            <Header />

            <section class="controls">
                <SearchBar
                    value=search_text
                    on_change=on_search_change
                    on_share=on_share
                />
                <Filters
                    borough=borough
                    sort=sort
                    on_borough_change=on_borough_change
                    on_sort_change=on_sort_change
                />
            </section>

            <main class="grid">
                <ResultList results=results saved=saved on_toggle_save=on_toggle_save />
                <SavedPanel saved=saved on_remove=on_remove />
            </main>

            <Toast message=toast on_close=on_close_toast />
        </div>
    }
}
