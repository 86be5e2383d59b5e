//! 対話式の検索セッション
//!
//! Web版と同じ `Finder` を使う。入力行が検索語の更新になり、
//! `:` で始まる行はコマンド。

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::error::{FinderError, Result};
use crate::render;
use crate::source::HttpParkSource;
use crate::store::FileStore;
use dialoguer::Input;
use nyc_finder_common::{
    BoroughFilter, Finder, KeyValueStore, MemoryUrl, ParkSource, SearchTicket, SortOption,
    UrlStateStore,
};
use std::time::{Duration, Instant};

const HELP: &str = "\
Type to search. Commands:
  :borough all|M|B|Q|X|R   filter by borough
  :sort relevance|name     change ordering
  :save N                  save/unsave result N
  :remove ID               remove a saved park
  :saved                   show saved parks
  :clear                   remove every saved park
  :share                   copy the current search link
  :help                    show this help
  :quit                    leave";

/// 対話アクション
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    /// 検索語を更新
    Search(String),
    Borough(BoroughFilter),
    Sort(SortOption),
    /// 結果の番号（1始まり）
    Save(usize),
    Remove(String),
    Saved,
    /// 保存済みを全削除
    Clear,
    Share,
    Help,
    Quit,
}

/// 入力行をアクションに変換
pub fn parse_action(line: &str) -> Result<BrowseAction> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(BrowseAction::Search(line.to_string()));
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let arg = parts.next().unwrap_or("").trim();

    match name {
        "borough" | "b" => {
            let filter = BoroughFilter::parse(arg);
            if filter == BoroughFilter::All && arg != "all" {
                return Err(FinderError::InvalidBorough(arg.to_string()));
            }
            Ok(BrowseAction::Borough(filter))
        }
        "sort" | "s" => match arg {
            "relevance" | "name" => Ok(BrowseAction::Sort(SortOption::parse(arg))),
            _ => Err(FinderError::InvalidSort(arg.to_string())),
        },
        "save" => arg
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(BrowseAction::Save)
            .ok_or_else(|| FinderError::InvalidCommand(format!("expected a result number, got '{}'", arg))),
        "remove" | "rm" => Ok(BrowseAction::Remove(arg.to_string())),
        "saved" => Ok(BrowseAction::Saved),
        "clear" => Ok(BrowseAction::Clear),
        "share" => Ok(BrowseAction::Share),
        "quit" | "q" | "exit" => Ok(BrowseAction::Quit),
        _ => Ok(BrowseAction::Help),
    }
}

/// 1回分の検索を実行して反映
pub async fn run_ticket<K, U, P>(finder: &mut Finder<K, U>, source: &P, ticket: SearchTicket)
where
    K: KeyValueStore,
    U: UrlStateStore,
    P: ParkSource + ?Sized,
{
    let outcome = ticket.execute(source).await;
    finder.complete(outcome);
}

/// 対話モード本体
pub async fn run_browse(config: &Config) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let source = HttpParkSource::new(config.dataset_url.clone())?;
    let store = FileStore::new(config.data_dir()?);
    let url = MemoryUrl::new(config.share_base_url.clone(), String::new());
    let clipboard = SystemClipboard;

    let (mut finder, ticket) = Finder::start(store, url, config.debounce_ms);
    println!("{}\n", HELP);
    run_ticket(&mut finder, &source, ticket).await;
    println!("{}\n", render::format_results(finder.results(), finder.saved()));

    loop {
        let line: String = Input::new()
            .with_prompt("search")
            .allow_empty(true)
            .interact_text()?;

        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match action {
            BrowseAction::Search(text) => {
                let deadline = finder.set_search_text(text, now_ms());
                // 対話モードでは次の入力まで待つだけなのでデバウンス分だけ眠る
                let wait = deadline.saturating_sub(now_ms());
                tokio::time::sleep(Duration::from_millis(wait)).await;
                match finder.poll_search(now_ms()) {
                    Some(ticket) => run_ticket(&mut finder, &source, ticket).await,
                    None => log::debug!("search text unchanged"),
                }
            }
            BrowseAction::Borough(filter) => {
                if let Some(ticket) = finder.set_borough(filter) {
                    run_ticket(&mut finder, &source, ticket).await;
                }
            }
            BrowseAction::Sort(sort) => {
                if let Some(ticket) = finder.set_sort(sort) {
                    run_ticket(&mut finder, &source, ticket).await;
                }
            }
            BrowseAction::Save(n) => {
                match finder.results().records().get(n - 1).cloned() {
                    Some(park) => {
                        let name = park.name.clone();
                        if finder.toggle_save(park) {
                            println!("✔ Saved {}", name);
                        } else {
                            println!("✔ Removed {}", name);
                        }
                    }
                    None => println!("No result #{}", n),
                }
                continue;
            }
            BrowseAction::Remove(id) => {
                if finder.remove_saved(&id) == 0 {
                    println!("{}", FinderError::SavedNotFound(id));
                }
                println!("{}\n", render::format_saved(finder.saved()));
                continue;
            }
            BrowseAction::Saved => {
                println!("{}\n", render::format_saved(finder.saved()));
                continue;
            }
            BrowseAction::Clear => {
                finder.clear_saved();
                println!("✔ Cleared saved parks\n");
                continue;
            }
            BrowseAction::Share => {
                let notification = finder.share(&clipboard, now_ms()).await;
                println!("{}", notification.message);
                println!("{}\n", finder.share_link());
                finder.dismiss_notification();
                continue;
            }
            BrowseAction::Help => {
                println!("{}\n", HELP);
                continue;
            }
            BrowseAction::Quit => {
                finder.shutdown();
                break;
            }
        }

        println!("{}\n", render::format_results(finder.results(), finder.saved()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyc_finder_common::Borough;

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(
            parse_action("prospect park").expect("パース失敗"),
            BrowseAction::Search("prospect park".into())
        );
        assert_eq!(parse_action("").expect("パース失敗"), BrowseAction::Search(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse_action(":borough Q").expect("パース失敗"),
            BrowseAction::Borough(BoroughFilter::Only(Borough::Queens))
        );
        assert_eq!(
            parse_action(":b all").expect("パース失敗"),
            BrowseAction::Borough(BoroughFilter::All)
        );
        assert_eq!(parse_action(":sort name").expect("パース失敗"), BrowseAction::Sort(SortOption::Name));
        assert_eq!(parse_action(":save 3").expect("パース失敗"), BrowseAction::Save(3));
        assert_eq!(
            parse_action(":rm 1234").expect("パース失敗"),
            BrowseAction::Remove("1234".into())
        );
        assert_eq!(parse_action(":s relevance").expect("パース失敗"), BrowseAction::Sort(SortOption::Relevance));
        assert_eq!(parse_action(":clear").expect("パース失敗"), BrowseAction::Clear);
        assert_eq!(parse_action(":share").expect("パース失敗"), BrowseAction::Share);
        assert_eq!(parse_action(":q").expect("パース失敗"), BrowseAction::Quit);
        assert_eq!(parse_action(":what").expect("パース失敗"), BrowseAction::Help);
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(parse_action(":borough Brooklyn"), Err(FinderError::InvalidBorough(_))));
        assert!(matches!(parse_action(":sort newest"), Err(FinderError::InvalidSort(_))));
        assert!(matches!(parse_action(":sort"), Err(FinderError::InvalidSort(_))));
        assert!(parse_action(":save 0").is_err());
        assert!(parse_action(":save x").is_err());
    }
}
