//! アプリケーションのオーケストレータ
//!
//! フィルタ・検索結果・保存リスト・通知の状態を持ち、
//! リクエストのライフサイクルとURL同期を管理する。
//!
//! 非同期処理はここでは行わない。`SearchTicket` を呼び出し側が実行し、
//! 結果を `complete` に戻す。古い世代の結果は捨てる。

use crate::cancel::CancellationToken;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::normalize::present;
use crate::notification::{Notification, Notifier};
use crate::platform::{ClipboardWriter, ParkSource, UrlStateStore};
use crate::saved::{SavedSet, SAVED_STORAGE_KEY};
use crate::soda::ParkQuery;
use crate::storage::{KeyValueStore, Persisted};
use crate::types::{BoroughFilter, FilterState, ParkRecord, SortOption};
use crate::url_state;

/// ドキュメントタイトル
pub const DOCUMENT_TITLE: &str = "NYC Finder";
/// 検索失敗時にユーザーへ見せる文言（詳細はログのみ）
pub const LOAD_ERROR_MESSAGE: &str = "We could not load parks right now. Please try again.";
pub const SHARE_SUCCESS_MESSAGE: &str = "Link copied";
pub const SHARE_FAILURE_MESSAGE: &str = "Unable to copy link";
pub const EMPTY_RESULTS_MESSAGE: &str = "No parks matched that search. Try a different keyword.";
pub const EMPTY_SAVED_MESSAGE: &str = "No favorites yet. Save parks to keep them here.";

/// 結果エリアの状態
#[derive(Debug, Clone, PartialEq)]
pub enum ResultState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<ParkRecord>),
}

impl ResultState {
    pub fn records(&self) -> &[ParkRecord] {
        match self {
            ResultState::Populated(records) => records,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }
}

/// 発行済みの検索リクエスト
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: ParkQuery,
    pub token: CancellationToken,
}

impl SearchTicket {
    /// 取得元に問い合わせて結果を包む
    pub async fn execute<P: ParkSource + ?Sized>(self, source: &P) -> SearchOutcome {
        let result = self
            .token
            .run(source.fetch_parks(&self.query, &self.token))
            .await;
        self.resolve(result)
    }

    /// 結果をこのチケットに紐づける
    pub fn resolve(self, result: Result<Vec<ParkRecord>>) -> SearchOutcome {
        SearchOutcome {
            generation: self.generation,
            token: self.token,
            result,
        }
    }
}

/// 完了した検索リクエスト
#[derive(Debug)]
pub struct SearchOutcome {
    pub generation: u64,
    token: CancellationToken,
    pub result: Result<Vec<ParkRecord>>,
}

/// オーケストレータ本体
pub struct Finder<K, U> {
    store: K,
    url: U,
    filters: FilterState,
    search: Debouncer<String>,
    results: ResultState,
    saved: Persisted<SavedSet>,
    notifier: Notifier,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl<K: KeyValueStore, U: UrlStateStore> Finder<K, U> {
    /// 起動: URLからフィルタを復元し、保存リストを読み込み、最初の検索を発行
    pub fn start(store: K, url: U, debounce_ms: u64) -> (Self, SearchTicket) {
        let filters = url_state::parse_query(&url.search());
        let saved = Persisted::load(&store, SAVED_STORAGE_KEY, SavedSet::new());
        log::debug!(
            "starting with filters {:?}, {} saved parks",
            filters,
            saved.get().len()
        );

        let mut finder = Self {
            search: Debouncer::new(filters.search_text.clone(), debounce_ms),
            store,
            url,
            filters,
            results: ResultState::Loading,
            saved,
            notifier: Notifier::new(),
            generation: 0,
            in_flight: None,
        };

        finder.mirror_url();
        let ticket = finder.begin_search();
        (finder, ticket)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn results(&self) -> &ResultState {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.results.is_loading()
    }

    pub fn saved(&self) -> &SavedSet {
        self.saved.get()
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.get().contains(id)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    /// 現在の世代番号
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 検索語の入力。URLは即時更新、検索はデバウンス後。期限を返す
    pub fn set_search_text(&mut self, text: impl Into<String>, now_ms: u64) -> u64 {
        let text = text.into();
        self.filters.search_text = text.clone();
        self.mirror_url();
        self.search.update(text, now_ms)
    }

    /// デバウンスが確定していれば新しい検索を発行
    pub fn poll_search(&mut self, now_ms: u64) -> Option<SearchTicket> {
        self.search.poll(now_ms).map(|_| self.begin_search())
    }

    /// 区フィルタ変更（同じ値なら何もしない）
    pub fn set_borough(&mut self, borough: BoroughFilter) -> Option<SearchTicket> {
        if self.filters.borough == borough {
            return None;
        }
        self.filters.borough = borough;
        self.mirror_url();
        Some(self.begin_search())
    }

    /// 並び順変更（同じ値なら何もしない）
    pub fn set_sort(&mut self, sort: SortOption) -> Option<SearchTicket> {
        if self.filters.sort == sort {
            return None;
        }
        self.filters.sort = sort;
        self.mirror_url();
        Some(self.begin_search())
    }

    /// 実行中のリクエストをキャンセルして次の世代を発行
    fn begin_search(&mut self) -> SearchTicket {
        if let Some(previous) = self.in_flight.take() {
            log::debug!("superseding search generation {}", self.generation);
            previous.cancel();
        }

        self.generation += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        self.results = ResultState::Loading;

        let query = ParkQuery::new(
            self.search.settled().clone(),
            self.filters.borough,
            self.filters.sort,
        );
        log::debug!("issuing search generation {}: {:?}", self.generation, query);

        SearchTicket {
            generation: self.generation,
            query,
            token,
        }
    }

    /// 検索結果を反映。古い世代・キャンセル済みは無視して `false`
    pub fn complete(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.generation != self.generation || outcome.token.is_cancelled() {
            log::debug!(
                "discarding stale search generation {} (current {})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        match outcome.result {
            Err(e) if e.is_cancelled() => return false,
            Err(e) => {
                log::warn!("park search failed: {e}");
                self.results = ResultState::Error(LOAD_ERROR_MESSAGE.to_string());
            }
            Ok(records) if records.is_empty() => {
                self.results = ResultState::Empty;
            }
            Ok(records) => {
                let records: Vec<ParkRecord> = records.into_iter().map(present).collect();
                log::debug!("search generation {} returned {} parks", outcome.generation, records.len());
                self.results = ResultState::Populated(records);
            }
        }

        self.in_flight = None;
        true
    }

    /// 保存/解除の切り替え。保存したら `true`
    pub fn toggle_save(&mut self, park: ParkRecord) -> bool {
        let mut added = false;
        self.saved.update(&self.store, |saved| added = saved.toggle(park));
        added
    }

    /// 保存パネルからの削除
    pub fn remove_saved(&mut self, id: &str) -> usize {
        let mut removed = 0;
        self.saved.update(&self.store, |saved| removed = saved.remove(id));
        removed
    }

    pub fn clear_saved(&mut self) {
        self.saved.update(&self.store, SavedSet::clear);
    }

    /// 共有するURL（フィルタ同期済み）
    pub fn share_link(&self) -> String {
        self.url.href()
    }

    /// クリップボード書き込みの結果を通知
    pub fn finish_share(&mut self, result: Result<()>, now_ms: u64) -> &Notification {
        let message = match result {
            Ok(()) => SHARE_SUCCESS_MESSAGE,
            Err(e) => {
                log::warn!("clipboard write failed: {e}");
                SHARE_FAILURE_MESSAGE
            }
        };
        self.notifier.show(message, now_ms)
    }

    /// 共有リンクをコピーして通知を出す
    pub async fn share<C: ClipboardWriter + ?Sized>(
        &mut self,
        clipboard: &C,
        now_ms: u64,
    ) -> &Notification {
        let link = self.share_link();
        let result = clipboard.write_text(&link).await;
        self.finish_share(result, now_ms)
    }

    pub fn dismiss_notification(&mut self) {
        self.notifier.dismiss();
    }

    /// タイマーからの自動消去（別の通知に置き換わっていれば何もしない）
    pub fn dismiss_notification_if(&mut self, id: u64) -> bool {
        self.notifier.dismiss_if(id)
    }

    pub fn expire_notification(&mut self, now_ms: u64) -> bool {
        self.notifier.expire(now_ms)
    }

    /// 終了時: 実行中のリクエストと保留中の入力を破棄
    pub fn shutdown(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.search.cancel();
        self.notifier.dismiss();
    }

    fn mirror_url(&self) {
        let query = url_state::to_query(&self.filters);
        if let Err(e) = self.url.replace_search(&query) {
            log::warn!("failed to update URL: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::platform::MemoryUrl;
    use crate::storage::MemoryStore;
    use crate::types::Borough;

    fn raw_park(id: &str, name: &str, borough: &str) -> ParkRecord {
        ParkRecord {
            id: id.to_string(),
            name: name.to_string(),
            borough: borough.to_string(),
            address: "Somewhere".to_string(),
            ..Default::default()
        }
    }

    fn start(search: &str) -> (Finder<MemoryStore, MemoryUrl>, SearchTicket) {
        Finder::start(
            MemoryStore::new(),
            MemoryUrl::new("https://finder.example/", search),
            300,
        )
    }

    #[test]
    fn test_start_parses_url_and_issues_first_search() {
        let (finder, ticket) = start("?q=prospect&borough=B&sort=name");

        assert_eq!(finder.filters().search_text, "prospect");
        assert_eq!(finder.filters().borough, BoroughFilter::Only(Borough::Brooklyn));
        assert_eq!(finder.filters().sort, SortOption::Name);
        assert!(finder.is_loading());
        assert_eq!(ticket.generation, 1);
        assert_eq!(ticket.query.search_text, "prospect");
        assert_eq!(finder.url().search(), "?q=prospect&borough=B&sort=name");
    }

    #[test]
    fn test_start_normalizes_invalid_url() {
        let (finder, _) = start("?borough=nowhere&sort=stars");
        assert_eq!(finder.url().search(), "?q=&borough=all&sort=relevance");
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let (mut finder, first) = start("");
        let second = finder
            .set_borough(BoroughFilter::Only(Borough::Queens))
            .expect("再検索されない");

        assert!(first.token.is_cancelled());
        let applied = finder.complete(first.resolve(Ok(vec![raw_park("1", "Old", "M")])));
        assert!(!applied);
        assert!(finder.is_loading());

        let applied = finder.complete(second.resolve(Ok(vec![raw_park("2", "New", "Q")])));
        assert!(applied);
        assert_eq!(finder.results().records()[0].name, "New");
        assert_eq!(finder.results().records()[0].borough, "Queens");
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let (mut finder, first) = start("");
        let _second = finder.set_sort(SortOption::Name).expect("再検索されない");

        assert!(!finder.complete(first.resolve(Err(Error::RequestFailed(500)))));
        assert_eq!(finder.results(), &ResultState::Loading);
    }

    #[test]
    fn test_cancelled_result_is_no_op() {
        let (mut finder, ticket) = start("");
        assert!(!finder.complete(ticket.resolve(Err(Error::Cancelled))));
        assert!(finder.is_loading());
    }

    #[test]
    fn test_empty_and_error_states() {
        let (mut finder, ticket) = start("");
        finder.complete(ticket.resolve(Ok(vec![])));
        assert_eq!(finder.results(), &ResultState::Empty);

        let ticket = finder.set_sort(SortOption::Name).expect("再検索されない");
        finder.complete(ticket.resolve(Err(Error::RequestFailed(500))));
        assert_eq!(
            finder.results(),
            &ResultState::Error(LOAD_ERROR_MESSAGE.to_string())
        );
        assert!(finder.results().records().is_empty());
    }

    #[test]
    fn test_same_filter_value_does_not_search() {
        let (mut finder, _) = start("?borough=X");
        assert!(finder.set_borough(BoroughFilter::Only(Borough::Bronx)).is_none());
        assert!(finder.set_sort(SortOption::Relevance).is_none());
        assert_eq!(finder.generation(), 1);
    }

    #[test]
    fn test_search_text_is_debounced() {
        let (mut finder, _) = start("");

        finder.set_search_text("c", 0);
        finder.set_search_text("ce", 100);
        finder.set_search_text("central", 200);
        assert_eq!(finder.url().search(), "?q=central&borough=all&sort=relevance");

        assert!(finder.poll_search(400).is_none());
        let ticket = finder.poll_search(500).expect("確定しない");
        assert_eq!(ticket.query.search_text, "central");
        assert_eq!(ticket.generation, 2);
        assert!(finder.poll_search(10_000).is_none());
    }

    #[test]
    fn test_toggle_save_persists() {
        let (mut finder, _) = start("");
        let park = raw_park("7", "Bryant Park", "Manhattan");

        assert!(finder.toggle_save(park.clone()));
        assert!(finder.is_saved("7"));
        let raw = finder.store().raw(SAVED_STORAGE_KEY).expect("保存されていない");
        assert!(raw.contains("Bryant Park"));

        assert!(!finder.toggle_save(park));
        assert!(!finder.is_saved("7"));
        assert_eq!(finder.store().raw(SAVED_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_saved_persists_empty_list() {
        let (mut finder, _) = start("");
        finder.toggle_save(raw_park("1", "Bryant Park", "Manhattan"));
        finder.toggle_save(raw_park("2", "Prospect Park", "Brooklyn"));

        finder.clear_saved();
        assert!(finder.saved().is_empty());
        assert_eq!(finder.store().raw(SAVED_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_share_link_drops_base_query() {
        let (mut finder, _) = Finder::start(
            MemoryStore::new(),
            MemoryUrl::new("https://finder.example/app?ref=cli", ""),
            300,
        );
        assert_eq!(
            finder.share_link(),
            "https://finder.example/app?q=&borough=all&sort=relevance"
        );

        finder.set_sort(SortOption::Name);
        assert_eq!(
            finder.share_link(),
            "https://finder.example/app?q=&borough=all&sort=name"
        );
    }

    #[test]
    fn test_share_notifications() {
        let (mut finder, _) = start("?q=zoo");
        assert_eq!(
            finder.share_link(),
            "https://finder.example/?q=zoo&borough=all&sort=relevance"
        );

        let id = finder.finish_share(Ok(()), 0).id;
        assert_eq!(finder.notification().map(|n| n.message.as_str()), Some(SHARE_SUCCESS_MESSAGE));

        finder.finish_share(Err(Error::ClipboardDenied("denied".into())), 100);
        assert_eq!(finder.notification().map(|n| n.message.as_str()), Some(SHARE_FAILURE_MESSAGE));
        assert!(!finder.dismiss_notification_if(id));
        assert!(finder.expire_notification(100 + crate::notification::NOTIFICATION_DURATION_MS));
        assert!(finder.notification().is_none());
    }

    #[test]
    fn test_shutdown_cancels_in_flight() {
        let (mut finder, ticket) = start("");
        finder.shutdown();
        assert!(ticket.token.is_cancelled());
        assert!(!finder.complete(ticket.resolve(Ok(vec![raw_park("1", "Late", "B")]))));
    }
}
