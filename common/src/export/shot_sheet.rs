//! Excel形式のショットシート
//!
//! シート構成:
//! - "Shots": ヘッダ行 + ショット1行ずつ（shotListの順序）
//! - "Anchor": Visual Anchor / Narrative Arc / Consistency Check

use crate::types::{AnalysisResult, Shot};
use rust_xlsxwriter::*;

/// ショット列定義（ヘッダ名, 列幅）
const SHOT_COLUMNS: [(&str, f64); 7] = [
    ("#", 5.0),
    ("Type", 14.0),
    ("Duration", 10.0),
    ("Description", 40.0),
    ("Image Prompt", 50.0),
    ("Motion Prompt", 40.0),
    ("Sound Design", 30.0),
];

/// SHOT_COLUMNS と同じ並びのセル値
fn shot_row(shot: &Shot) -> [String; 7] {
    [
        shot.id.to_string(),
        shot.shot_type.clone(),
        shot.duration.clone(),
        shot.description.clone(),
        shot.image_prompt.clone(),
        shot.motion_prompt.clone(),
        shot.sound_design.clone(),
    ]
}

/// ショットシートをバッファに生成
pub fn generate_shot_sheet_xlsx(result: &AnalysisResult) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x991B1B))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let label_format = Format::new()
        .set_bold()
        .set_font_size(9.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    {
        let shots = workbook.add_worksheet();
        shots.set_name("Shots")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, (header, width)) in SHOT_COLUMNS.iter().enumerate() {
            let col = col as u16;
            shots.set_column_width(col, *width)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
            shots.write_string_with_format(0, col, *header, &header_format)
                .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
        }
        shots.set_freeze_panes(1, 0)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

        for (index, shot) in result.shot_list.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, value) in shot_row(shot).iter().enumerate() {
                shots.write_string_with_format(row, col as u16, value.as_str(), &value_format)
                    .map_err(|e| format!("値書き込みエラー: {}", e))?;
            }
        }
    }

    {
        let anchor = workbook.add_worksheet();
        anchor.set_name("Anchor")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        anchor.set_column_width(0, 20.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        anchor.set_column_width(1, 80.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        let mood = result.narrative_arc.mood.join(", ");
        let rows = [
            ("Subject", result.visual_anchor.subject.as_str()),
            ("Geometry", result.visual_anchor.geometry.as_str()),
            ("Lighting", result.visual_anchor.lighting.as_str()),
            ("Logline", result.narrative_arc.logline.as_str()),
            ("Mood", mood.as_str()),
            ("Consistency Check", result.consistency_check.as_str()),
        ];

        for (row, (label, value)) in rows.iter().enumerate() {
            let row = row as u32;
            anchor.write_string_with_format(row, 0, *label, &label_format)
                .map_err(|e| format!("ラベル書き込みエラー: {}", e))?;
            anchor.write_string_with_format(row, 1, *value, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
