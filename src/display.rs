/*!
 * Row assembly for the per-line model comparison table.
 *
 * Pure functions: parsed cells in, labeled rows of (possibly color-marked)
 * cells out. Each section renders in one of two layouts depending on its
 * toggle: detail mode emits one row per bullet line, summary mode joins the
 * split payloads into a single row per section (with a full-text fallback
 * when a cell carried a section body but no bullets).
 */

use std::collections::BTreeMap;

use crate::cell_parser::{ParsedCell, SectionKind};
use crate::line_tokens::{
    split_fields, split_free_translation, split_literal_source, split_literal_target, PosTag,
    SplitLine,
};

/// Row label for the joined source-language summary row
const SOURCE_ROW_LABEL: &str = "Akan";

/// Row label for the joined/fallback literal English rows
const LITERAL_ENGLISH_ROW_LABEL: &str = "Literal English Translation";

/// Placeholder shown when every toggle yielded zero rows
pub const EMPTY_PLACEHOLDER: &str =
    "[No data to display - toggles off or no recognized sections found]";

/// One table row: label cell first, then one cell per model in alphabetical
/// order. Cells may carry inline `<span>` color markup.
pub type TableRow = Vec<String>;

/// The five display toggles, passed explicitly per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Detail mode for the literal-mapping section
    pub show_literal_bullets: bool,
    /// Detail mode for the AI-translation section
    pub show_ai_bullets: bool,
    /// Render the cultural-context row
    pub show_cultural: bool,
    /// Render the clarification row
    pub show_clarification: bool,
    /// Color payloads by recognized part-of-speech tag
    pub color_pos: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_literal_bullets: false,
            show_ai_bullets: false,
            show_cultural: false,
            show_clarification: false,
            color_pos: true,
        }
    }
}

/// Wrap `text` in the tag's color span when coloring is on and the tag is
/// recognized; pass it through untouched otherwise.
fn wrap_pos_span(text: &str, tag: Option<PosTag>, color_on: bool) -> String {
    match tag {
        Some(tag) if color_on => {
            format!("<span style=\"color:{};\">{}</span>", tag.color(), text)
        }
        _ => text.to_string(),
    }
}

/// Detail-mode coloring: the entire bullet line (leading spaces stripped,
/// dash and quoting kept) is colored when its last arrow-delimited field is
/// a recognized tag.
pub fn colorize_full_bullet_line(line: &str, color_on: bool) -> String {
    let raw_line = line.trim_start_matches([' ', '\t']);
    let parts = split_fields(raw_line);
    let tag = parts.last().and_then(|p| PosTag::parse(p));
    wrap_pos_span(raw_line, tag, color_on)
}

fn render_split(split: &SplitLine, color_on: bool) -> String {
    wrap_pos_span(&split.payload, split.tag, color_on)
}

/// Detail mode: one row per bullet line, up to the longest bullet list
/// across models, padding shorter models with empty cells.
fn detail_rows(
    section_label: &str,
    bullets_by_model: &BTreeMap<String, Vec<String>>,
    color_on: bool,
) -> Vec<TableRow> {
    let max_len = bullets_by_model.values().map(Vec::len).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(max_len);
    for i in 0..max_len {
        let label = if i == 0 { section_label } else { "" };
        let mut row: TableRow = vec![label.to_string()];
        for lines in bullets_by_model.values() {
            match lines.get(i) {
                Some(line) => row.push(colorize_full_bullet_line(line, color_on)),
                None => row.push(String::new()),
            }
        }
        rows.push(row);
    }
    rows
}

/// Summary mode: one row joining the chosen payload of every bullet line
/// with spaces, per model.
fn joined_row(
    label: &str,
    bullets_by_model: &BTreeMap<String, Vec<String>>,
    splitter: fn(&str) -> SplitLine,
    color_on: bool,
) -> TableRow {
    let mut row: TableRow = vec![label.to_string()];
    for lines in bullets_by_model.values() {
        let fragments: Vec<String> = lines
            .iter()
            .map(|line| render_split(&splitter(line), color_on))
            .collect();
        row.push(fragments.join(" "));
    }
    row
}

/// Fallback row carrying each model's full section body verbatim.
fn full_text_row(label: &str, full_by_model: &BTreeMap<String, String>) -> TableRow {
    let mut row: TableRow = vec![label.to_string()];
    for text in full_by_model.values() {
        row.push(text.clone());
    }
    row
}

/// A header row: section label followed by empty cells.
fn header_row(label: &str, model_count: usize) -> TableRow {
    let mut row: TableRow = vec![label.to_string()];
    row.resize(model_count + 1, String::new());
    row
}

/// Cultural-context and clarification sections: at most one row, omitted
/// when every model's body is blank.
fn note_section_rows(label: &str, texts_by_model: &BTreeMap<String, String>) -> Vec<TableRow> {
    if texts_by_model.values().all(|t| t.trim().is_empty()) {
        return Vec::new();
    }
    vec![full_text_row(label, texts_by_model)]
}

fn any_bullets(bullets_by_model: &BTreeMap<String, Vec<String>>) -> bool {
    bullets_by_model.values().any(|lines| !lines.is_empty())
}

fn any_text(texts_by_model: &BTreeMap<String, String>) -> bool {
    texts_by_model.values().any(|t| !t.trim().is_empty())
}

/// Assemble the full row set for one displayed line.
///
/// `cells` maps model name to its parsed cell; the BTreeMap keeps the
/// models in the alphabetical column order every row must follow. Returns
/// an empty vector when all toggles yielded nothing; the renderer turns
/// that into the placeholder message.
pub fn assemble_rows(cells: &BTreeMap<String, ParsedCell>, opts: DisplayOptions) -> Vec<TableRow> {
    let model_count = cells.len();
    let literal_bullets: BTreeMap<String, Vec<String>> = cells
        .iter()
        .map(|(m, c)| (m.clone(), c.literal_bullets.clone()))
        .collect();
    let literal_full: BTreeMap<String, String> = cells
        .iter()
        .map(|(m, c)| (m.clone(), c.literal_full.clone()))
        .collect();
    let ai_bullets: BTreeMap<String, Vec<String>> = cells
        .iter()
        .map(|(m, c)| (m.clone(), c.ai_bullets.clone()))
        .collect();
    let ai_full: BTreeMap<String, String> = cells
        .iter()
        .map(|(m, c)| (m.clone(), c.ai_full.clone()))
        .collect();

    let mut rows: Vec<TableRow> = Vec::new();

    // Literal mapping section
    if opts.show_literal_bullets && any_bullets(&literal_bullets) {
        rows.push(header_row(
            SectionKind::LiteralMapping.display_label(),
            model_count,
        ));
        rows.extend(detail_rows("", &literal_bullets, opts.color_pos));
    } else if any_bullets(&literal_bullets) {
        rows.push(joined_row(
            SOURCE_ROW_LABEL,
            &literal_bullets,
            split_literal_source,
            opts.color_pos,
        ));
        rows.push(joined_row(
            LITERAL_ENGLISH_ROW_LABEL,
            &literal_bullets,
            split_literal_target,
            opts.color_pos,
        ));
    } else if any_text(&literal_full) {
        rows.push(full_text_row(LITERAL_ENGLISH_ROW_LABEL, &literal_full));
    }

    // AI translation section
    if opts.show_ai_bullets && any_bullets(&ai_bullets) {
        rows.push(header_row(
            SectionKind::AiTranslation.display_label(),
            model_count,
        ));
        rows.extend(detail_rows("", &ai_bullets, opts.color_pos));
    } else if any_bullets(&ai_bullets) {
        rows.push(joined_row(
            SectionKind::AiTranslation.display_label(),
            &ai_bullets,
            split_free_translation,
            opts.color_pos,
        ));
    } else if any_text(&ai_full) {
        rows.push(full_text_row(SectionKind::AiTranslation.display_label(), &ai_full));
    }

    // Cultural context / clarification notes
    if opts.show_cultural {
        let cultural: BTreeMap<String, String> = cells
            .iter()
            .map(|(m, c)| (m.clone(), c.cultural.clone()))
            .collect();
        rows.extend(note_section_rows(
            SectionKind::CulturalContext.display_label(),
            &cultural,
        ));
    }
    if opts.show_clarification {
        let clarification: BTreeMap<String, String> = cells
            .iter()
            .map(|(m, c)| (m.clone(), c.clarification.clone()))
            .collect();
        rows.extend(note_section_rows(
            SectionKind::Clarification.display_label(),
            &clarification,
        ));
    }

    rows
}
