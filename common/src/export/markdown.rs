//! Markdown形式のショットシート

use crate::prompts::shot_summary;
use crate::types::AnalysisResult;
use std::fmt::Write;

/// 解析結果をMarkdownに整形
///
/// 見出し構成: Visual Anchor → Narrative Arc → Shot 1..9 → Consistency Check
pub fn render_markdown(result: &AnalysisResult) -> String {
    let mut md = String::new();
    let anchor = &result.visual_anchor;
    let arc = &result.narrative_arc;

    // String への write! は失敗しない
    let _ = writeln!(md, "# Shot List\n");

    let _ = writeln!(md, "## Visual Anchor\n");
    let _ = writeln!(md, "- **Subject**: {}", anchor.subject);
    let _ = writeln!(md, "- **Geometry**: {}", anchor.geometry);
    let _ = writeln!(md, "- **Lighting**: {}\n", anchor.lighting);

    let _ = writeln!(md, "## Narrative Arc\n");
    let _ = writeln!(md, "> {}\n", arc.logline);
    if !arc.mood.is_empty() {
        let tags = arc
            .mood
            .iter()
            .map(|m| format!("`{}`", m))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(md, "Mood: {}\n", tags);
    }

    let total = result.total_duration_secs();
    if total > 0.0 {
        let _ = writeln!(md, "Total duration: {}s\n", total);
    }

    for shot in &result.shot_list {
        let _ = writeln!(md, "## Shot {} ({}, {})\n", shot.id, shot.shot_type, shot.duration);
        let _ = writeln!(md, "{}\n", shot.description);
        let _ = writeln!(md, "**Image prompt**\n\n```\n{}\n```\n", shot.image_prompt);
        let _ = writeln!(md, "**Motion prompt**\n\n```\n{}\n```\n", shot.motion_prompt);
        let _ = writeln!(md, "**Sound design**: {}\n", shot.sound_design);
    }

    let _ = writeln!(md, "## Consistency Check\n");
    let _ = writeln!(md, "{}\n", result.consistency_check);

    let _ = writeln!(md, "---\n");
    let _ = writeln!(md, "Storyboard summary: {}", shot_summary(result));

    md
}
