use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use storyboard_ai::{analyzer, cli, config, error, export, pipeline, scanner};
use analyzer::{AnalysisResult, GeminiClient};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use pipeline::PipelineOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, output, storyboard_out, no_storyboard, markdown } => {
            println!("🎬 storyboard-ai - ショット解析\n");

            // APIキーが無ければ画像を読む前に終了
            let client = GeminiClient::from_config(&config)?;

            // 1. 画像読み込み
            println!("[1/3] 画像を読み込み中...");
            let input = scanner::load_image(&image, config.max_image_size)?;
            println!("✔ {} ({})\n", image.display(), input.mime_type());

            // 2. 解析 → ストーリーボード
            println!("[2/3] AI解析中...");
            let spinner = spinner();
            let outcome = pipeline::run(
                &client,
                &input,
                PipelineOptions { storyboard: !no_storyboard },
                |stage| spinner.set_message(stage.label()),
            )
            .await;
            spinner.finish_and_clear();
            let outcome = outcome?;
            println!("✔ 解析完了\n");
            print_summary(&outcome.analysis);

            // 3. 保存
            println!("\n[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| sibling_path(&image, "shots.json"));
            export::write_result_json(&outcome.analysis, &output)?;
            println!("✔ 解析結果を保存: {}", output.display());

            if let Some(md_path) = markdown {
                export::markdown::write_markdown(&outcome.analysis, &md_path)?;
                println!("✔ ショットシートを保存: {}", md_path.display());
            }

            match &outcome.storyboard {
                Some(Ok(data_url)) => {
                    let png_path = storyboard_out.unwrap_or_else(|| sibling_path(&image, "storyboard.png"));
                    analyzer::save_storyboard(data_url, &png_path)?;
                    println!("✔ ストーリーボードを保存: {}", png_path.display());
                }
                Some(Err(e)) => {
                    println!("⚠ ストーリーボード生成に失敗しました: {}", e);
                    println!("  解析結果は保存済みです。再実行: storyboard-ai storyboard {}", output.display());
                }
                None => {}
            }

            println!("\n✅ 完了");
        }

        Commands::Storyboard { input, output } => {
            println!("🖼  storyboard-ai - ストーリーボード生成\n");

            let client = GeminiClient::from_config(&config)?;
            let result = export::read_result_json(&input)?;

            let spinner = spinner();
            spinner.set_message(pipeline::Stage::GeneratingStoryboard.label());
            let data_url = analyzer::generate_storyboard(&client, &result).await;
            spinner.finish_and_clear();
            let data_url = data_url?;

            let png_path = output.unwrap_or_else(|| sibling_path(&input, "storyboard.png"));
            analyzer::save_storyboard(&data_url, &png_path)?;
            println!("✔ ストーリーボードを保存: {}", png_path.display());

            println!("\n✅ 完了");
        }

        Commands::Export { input, format, output, title } => {
            println!("📄 storyboard-ai - エクスポート\n");

            let result = export::read_result_json(&input)?;
            let output_dir = output.unwrap_or_else(|| {
                input.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
            });

            let written = export::export_result(&result, &format, &output_dir, &title)?;
            for path in written {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  解析モデル: {}", config.vision_model);
                println!("  画像生成モデル: {}", config.image_model);
                println!("  エンドポイント: {}", config.base_url);
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  アスペクト比: {}", config.aspect_ratio);
                match config.timeout_seconds {
                    Some(t) => println!("  タイムアウト: {}秒", t),
                    None => println!("  タイムアウト: 既定"),
                }
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "storyboard_ai=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// 入力と同じ場所に <stem>.<suffix> のパスを作る
fn sibling_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("result");
    let stem = stem.strip_suffix(".shots").unwrap_or(stem);
    source.with_file_name(format!("{}.{}", stem, suffix))
}

fn print_summary(result: &AnalysisResult) {
    println!("  ログライン: {}", result.narrative_arc.logline);
    println!("  ムード: {}", result.narrative_arc.mood.join(", "));
    for shot in &result.shot_list {
        println!("  {}. [{} {}] {}", shot.id, shot.shot_type, shot.duration, shot.description);
    }
}
