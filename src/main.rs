use clap::Parser;
use cv_keyword_hunter::{cli, config, error, export, names, shell};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Search { input, json } => {
            println!("🔍 cv-hunter - キーワード検索\n");

            // 1. 名リスト
            println!("[1/3] 名リストを読み込み中...");
            let name_list = names::load_configured_name_list(&config, input.names.as_deref(), cli.verbose)?;
            println!("✔ {}件の名を読み込み\n", name_list.len());

            // 2. CV読み込み
            println!("[2/3] CVを読み込み中...");
            let session = shell::build_session(name_list, &input.paths, &input.keywords, cli.verbose)?;
            println!("✔ {}件のCVを読み込み\n", session.documents().len());

            // 3. 検索
            println!("[3/3] 検索中... ({})", session.keywords_display());
            if json {
                let results = session.search_results()?;
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let listing = session.search()?;
                println!("{}", listing);
            }

            println!("\n✅ 検索完了");
        }

        Commands::Report { input, output } => {
            println!("📄 cv-hunter - レポート生成\n");

            println!("[1/3] 名リストを読み込み中...");
            let name_list = names::load_configured_name_list(&config, input.names.as_deref(), cli.verbose)?;
            println!("✔ {}件の名を読み込み\n", name_list.len());

            println!("[2/3] CVを読み込み中...");
            let session = shell::build_session(name_list, &input.paths, &input.keywords, cli.verbose)?;
            println!("✔ {}件のCVを読み込み\n", session.documents().len());

            println!("[3/3] レポートを生成中...");
            let rows = session.generate_report()?;
            export::export_report(&rows, output.as_deref(), &config.report_title)?;

            println!("\n✅ レポート出力完了");
        }

        Commands::Shell { names: names_arg } => {
            println!("💬 cv-hunter - 対話モード\n");
            let name_list = names::load_configured_name_list(&config, names_arg.as_deref(), cli.verbose)?;
            shell::run_shell(name_list, &config.report_title, cli.verbose)?;
        }

        Commands::Config { set_names_path, set_report_title, show } => {
            let mut config = config;

            if let Some(path) = set_names_path {
                config.set_names_path(path)?;
                println!("✔ 名リストのパスを設定しました");
            }

            if let Some(title) = set_report_title {
                config.set_report_title(title)?;
                println!("✔ レポートのファイル名を設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  名リスト: {}",
                    config
                        .names_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  レポート名: {}", config.report_title);
            }
        }
    }

    Ok(())
}
