//! Feihua - Classical Chinese Poetry Corpus Search
//! Thin command-line shell over the feihua library

use anyhow::Result;
use clap::{Parser, Subcommand};
use feihua_lib::{default_data_dir, AppState, FeihuaError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feihua", about = "Classical Chinese poetry corpus search")]
struct Cli {
    /// Data directory holding the corpus file and settings database
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search every verse line for a single character
    Search {
        /// The character to search for
        query: String,
    },
    /// Replace the corpus from a remote source
    Update {
        /// Custom source URL (defaults to the official endpoint)
        #[arg(long)]
        url: Option<String>,
    },
    /// Import a local corpus file
    Import {
        /// Path to a UTF-8 plain-text corpus file
        file: PathBuf,
    },
    /// Reset the corpus to the bundled default
    Reset,
    /// Show corpus version and source
    Info,
    /// Show recent searches
    History {
        /// Clear the history instead
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let state = AppState::new(data_dir)?;

    match cli.command {
        Command::Search { query } => {
            // only the first character of the input is queried
            let ch = match query.trim().chars().next() {
                Some(c) if ('\u{4e00}'..='\u{9fa5}').contains(&c) => c,
                _ => return Err(FeihuaError::InvalidQuery("请输入汉字".to_string()).into()),
            };

            let matches = state.search_engine.search(&ch.to_string());
            state.history.record(ch);

            if matches.is_empty() {
                println!("没有找到包含「{}」的诗句", ch);
            } else {
                for (i, m) in matches.iter().enumerate() {
                    println!("{}. {}", i + 1, m.line);
                    println!("   ——{}", m.source);
                }
                println!("共{}条结果", matches.len());
            }
        }
        Command::Update { url } => {
            let provenance = state
                .corpus_manager
                .replace_from_remote(url.as_deref())
                .await?;
            println!("数据更新成功：{} ({})", provenance.source, provenance.version);
        }
        Command::Import { file } => {
            let provenance = state.corpus_manager.replace_from_local_file(&file).await?;
            println!("导入成功：{} ({})", provenance.source, provenance.version);
        }
        Command::Reset => {
            let provenance = state.corpus_manager.reset_to_default()?;
            println!("已恢复默认诗词库 ({})", provenance.version);
        }
        Command::Info => {
            let provenance = state.corpus_manager.provenance();
            println!("数据版本：{}", provenance.version);
            println!("数据来源：{}", provenance.source);
        }
        Command::History { clear } => {
            if clear {
                state.history.clear()?;
                println!("搜索历史已清空");
            } else {
                for entry in state.history.entries() {
                    println!("{}", entry);
                }
            }
        }
    }

    Ok(())
}
