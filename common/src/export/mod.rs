//! ショットシート出力のコア処理（CLIから呼ばれる）

pub mod markdown;

#[cfg(feature = "excel")]
pub mod shot_sheet;

pub use markdown::render_markdown;

#[cfg(feature = "excel")]
pub use shot_sheet::generate_shot_sheet_xlsx;
