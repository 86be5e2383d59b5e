use clap::{Parser, Subcommand, ValueEnum};
use nyc_finder_common::{BoroughFilter, SortOption};

#[derive(Parser)]
#[command(name = "nyc-finder")]
#[command(about = "Search NYC parks, keep favorites and share searches", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 公園を検索
    Search {
        /// 検索語（省略時は全件から上位）
        query: Option<String>,

        /// 区 (all/M/B/Q/X/R)
        #[arg(short, long, default_value = "all", value_parser = parse_borough)]
        borough: BoroughFilter,

        /// 並び順 (relevance/name)
        #[arg(short, long, default_value = "relevance")]
        sort: SortArg,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 指定番号（1始まり）の結果を保存/解除
        #[arg(long = "save", value_name = "N")]
        save: Vec<usize>,
    },

    /// 保存リストを表示/編集
    Saved {
        /// IDを指定して削除
        #[arg(long, value_name = "ID")]
        remove: Option<String>,

        /// すべて削除
        #[arg(long)]
        clear: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 検索条件付きの共有リンクを作成
    Share {
        query: Option<String>,

        #[arg(short, long, default_value = "all", value_parser = parse_borough)]
        borough: BoroughFilter,

        #[arg(short, long, default_value = "relevance")]
        sort: SortArg,

        /// クリップボードにコピー
        #[arg(long)]
        copy: bool,
    },

    /// 対話モードで検索
    Browse,

    /// 設定を表示/編集
    Config {
        /// 共有リンクのベースURLを設定
        #[arg(long, value_name = "URL")]
        set_share_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Relevance,
    Name,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOption::Relevance,
            SortArg::Name => SortOption::Name,
        }
    }
}

/// 区の引数。URLと違い不正値はエラーにする
pub fn parse_borough(value: &str) -> Result<BoroughFilter, String> {
    let filter = BoroughFilter::parse(value);
    if filter == BoroughFilter::All && value != "all" {
        return Err(format!("unknown borough '{}' (expected all, M, B, Q, X or R)", value));
    }
    Ok(filter)
}
