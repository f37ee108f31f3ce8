use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "storyboard-ai")]
#[command(about = "画像から9ショットのシーケンスと3x3ストーリーボードを生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析し、続けてストーリーボードを生成
    Analyze {
        /// 入力画像 (jpg/jpeg/png/webp)
        #[arg(required = true)]
        image: PathBuf,

        /// 出力JSONファイル（デフォルト: 画像と同じ場所の <名前>.shots.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ストーリーボード画像の保存先（デフォルト: <名前>.storyboard.png）
        #[arg(long)]
        storyboard_out: Option<PathBuf>,

        /// 解析のみ行いストーリーボードを生成しない
        #[arg(long)]
        no_storyboard: bool,

        /// ショットシートをMarkdownでも出力
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// 保存済みの解析結果からストーリーボードを再生成
    Storyboard {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力PNGファイル（デフォルト: <入力名>.storyboard.png）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 解析結果からショットシート（Markdown/Excel）を生成
    Export {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (markdown/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ファイル名（ディレクトリ指定時）
        #[arg(short, long, default_value = "shot-list")]
        title: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use markdown, excel, or both", s)),
        }
    }
}
