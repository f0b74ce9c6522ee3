use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-hunter")]
#[command(about = "CVキーワード検索・候補者レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 検索・レポート共通の入力
#[derive(Args, Debug, Clone)]
pub struct SearchInput {
    /// CVファイルまたはフォルダ（フォルダは直下の txt/md/pdf/docx）
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// キーワード（複数指定可、重複は警告して無視）
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// 名リストファイル（1行1名、UTF-8）
    #[arg(short, long)]
    pub names: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CVをキーワード検索して一致数順に表示
    Search {
        #[command(flatten)]
        input: SearchInput,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// (氏名, キーワード, CV名) のレポートをExcelに出力
    Report {
        #[command(flatten)]
        input: SearchInput,

        /// 出力ファイル/ディレクトリ（省略時はカレントに日時付きで作成）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話モードでキーワード追加・CVアップロード・検索を行う
    Shell {
        /// 名リストファイル（1行1名、UTF-8）
        #[arg(short, long)]
        names: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 名リストのパスを設定
        #[arg(long)]
        set_names_path: Option<PathBuf>,

        /// レポートのファイル名を設定
        #[arg(long)]
        set_report_title: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "cv-hunter", "search", "cvs/", "-k", "java", "--keyword", "sql", "--names", "names.txt",
        ]);
        match cli.command {
            Commands::Search { input, json } => {
                assert_eq!(input.paths, vec![PathBuf::from("cvs/")]);
                assert_eq!(input.keywords, vec!["java", "sql"]);
                assert_eq!(input.names, Some(PathBuf::from("names.txt")));
                assert!(!json);
            }
            _ => panic!("search として解析されていない"),
        }
    }

    #[test]
    fn test_parse_report_with_verbose() {
        let cli = Cli::parse_from(["cv-hunter", "report", "a.txt", "b.txt", "-k", "rust", "-o", "out.xlsx", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Report { input, output } => {
                assert_eq!(input.paths.len(), 2);
                assert_eq!(output, Some(PathBuf::from("out.xlsx")));
            }
            _ => panic!("report として解析されていない"),
        }
    }

    #[test]
    fn test_search_allows_no_keywords() {
        // キーワード未指定はセッション側で警告する
        let cli = Cli::parse_from(["cv-hunter", "search", "cvs/"]);
        assert!(matches!(cli.command, Commands::Search { .. }));
    }
}
