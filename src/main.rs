use clap::Parser;
use nyc_finder::{browse, cli, clipboard, config, error, render, source, store};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use nyc_finder_common::finder::{SHARE_FAILURE_MESSAGE, SHARE_SUCCESS_MESSAGE};
use nyc_finder_common::{
    url_state, ClipboardWriter, FilterState, Finder, MemoryUrl, Persisted, SavedSet,
    SAVED_STORAGE_KEY,
};

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG があればそちらを優先
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, borough, sort, json, save } => {
            let filters = FilterState {
                search_text: query.unwrap_or_default(),
                borough,
                sort: sort.into(),
            };

            let source = source::HttpParkSource::new(config.dataset_url.clone())?;
            let store = store::FileStore::new(config.data_dir()?);
            let url = MemoryUrl::new(config.share_base_url.clone(), url_state::to_query(&filters));

            let (mut finder, ticket) = Finder::start(store, url, config.debounce_ms);
            browse::run_ticket(&mut finder, &source, ticket).await;

            for n in save {
                match n.checked_sub(1).and_then(|i| finder.results().records().get(i)).cloned() {
                    Some(park) => {
                        let name = park.name.clone();
                        let verb = if finder.toggle_save(park) { "Saved" } else { "Removed" };
                        eprintln!("✔ {} {}", verb, name);
                    }
                    None => eprintln!("No result #{}", n),
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(finder.results().records())?);
            } else {
                println!("{}", render::format_results(finder.results(), finder.saved()));
            }
        }

        Commands::Saved { remove, clear, json } => {
            let store = store::FileStore::new(config.data_dir()?);
            let mut saved = Persisted::load(&store, SAVED_STORAGE_KEY, SavedSet::new());

            if let Some(id) = remove {
                let mut removed = 0;
                saved.update(&store, |s| removed = s.remove(&id));
                if removed == 0 {
                    return Err(error::FinderError::SavedNotFound(id));
                }
                eprintln!("✔ Removed {}", id);
            }

            if clear {
                saved.update(&store, SavedSet::clear);
                eprintln!("✔ Cleared saved parks");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(saved.get())?);
            } else {
                println!("{}", render::format_saved(saved.get()));
            }
        }

        Commands::Share { query, borough, sort, copy } => {
            let filters = FilterState {
                search_text: query.unwrap_or_default(),
                borough,
                sort: sort.into(),
            };
            let link = url_state::share_url(&config.share_base_url, &filters);
            println!("{}", link);

            if copy {
                match clipboard::SystemClipboard.write_text(&link).await {
                    Ok(()) => eprintln!("✔ {}", SHARE_SUCCESS_MESSAGE),
                    Err(e) => {
                        log::warn!("clipboard write failed: {e}");
                        eprintln!("{}", SHARE_FAILURE_MESSAGE);
                    }
                }
            }
        }

        Commands::Browse => {
            browse::run_browse(&config).await?;
        }

        Commands::Config { set_share_url, show } => {
            let mut config = config;

            if let Some(url) = set_share_url {
                config.set_share_base_url(url)?;
                println!("✔ Share URL updated");
            }

            if show {
                println!("Config:");
                println!("  dataset: {}", config.dataset_url);
                println!("  share URL: {}", config.share_base_url);
                println!("  debounce: {}ms", config.debounce_ms);
                println!("  data dir: {}", config.data_dir()?.display());
            }
        }
    }

    Ok(())
}
