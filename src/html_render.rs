/*!
 * HTML rendering for the story navigator and model comparison views.
 *
 * Inline-styled, self-contained fragments meant for embedding; the
 * comparison table uses a fixed layout so model columns stay equal width.
 */

use crate::display::{TableRow, EMPTY_PLACEHOLDER};
use crate::story_store::AlignedLine;

/// Auto-scroll script bringing the selected navigator row into view
const SCROLL_SCRIPT: &str = concat!(
    "<script>",
    "document.addEventListener('DOMContentLoaded',function(){",
    "var s=document.querySelector('tr[selected-line=\"true\"]');",
    "if(s){s.scrollIntoView({block:'center', inline:'center'});}",
    "});</script>"
);

/// Render the aligned story table (Line#, source, reference) with the
/// selected row bolded and marked for auto-scroll.
pub fn render_navigator_table(lines: &[AlignedLine], selected_idx: usize, font_size: u32) -> String {
    let mut html = format!(
        "<table style=\"border-collapse:collapse; font-size:{}px; width:100%;\">\
         <thead><tr style='background-color:#ddd;'>\
         <th style='padding:4px;'>Line#</th>\
         <th style='padding:4px;'>AKAN</th>\
         <th style='padding:4px;'>ENGLISH</th>\
         </tr></thead><tbody>",
        font_size
    );
    for (i, line) in lines.iter().enumerate() {
        let bg_color = if i % 2 == 0 { "#f9f9f9" } else { "#fff" };
        let (weight, selected_attr) = if i == selected_idx {
            ("font-weight:bold;", " selected-line=\"true\"")
        } else {
            ("", "")
        };
        html.push_str(&format!(
            "<tr style='background-color:{}; {}'{}>\
             <td style='padding:4px; text-align:center;'>{}</td>\
             <td style='padding:4px;'>{}</td>\
             <td style='padding:4px;'>{}</td>\
             </tr>",
            bg_color,
            weight,
            selected_attr,
            i + 1,
            line.source,
            line.reference
        ));
    }
    html.push_str("</tbody></table>");
    html.push_str(SCROLL_SCRIPT);
    html
}

/// Render the model comparison table: a Section column plus one column per
/// model, alternating row backgrounds, equal fixed column widths.
pub fn render_comparison_table(model_names: &[String], rows: &[TableRow]) -> String {
    let num_cols = 1 + model_names.len();
    let mut html = String::from(
        "<table style='border-collapse:collapse; width:100%; table-layout:fixed;'><colgroup>",
    );
    for _ in 0..num_cols {
        html.push_str(&format!("<col style='width:{}%;'>", 100.0 / num_cols as f64));
    }
    html.push_str("</colgroup><thead><tr style='background-color:#ddd;'><th>Section</th>");
    for name in model_names {
        html.push_str(&format!("<th>{}</th>", name));
    }
    html.push_str("</tr></thead><tbody>");
    for (i, row) in rows.iter().enumerate() {
        let bg = if i % 2 == 0 { "#f9f9f9" } else { "#fff" };
        html.push_str(&format!("<tr style='background-color:{};'>", bg));
        for cell in row {
            html.push_str(&format!(
                "<td style='padding:4px; vertical-align:top; word-wrap:break-word;'>{}</td>",
                cell
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Render the full page for one line: source and reference header
/// paragraphs above the comparison table (or the placeholder when no rows
/// survived the toggles), wrapped in a font-size div.
pub fn render_line_page(
    source: &str,
    reference: &str,
    model_names: &[String],
    rows: &[TableRow],
    font_size: u32,
) -> String {
    let table_html = if rows.is_empty() {
        format!("<p>{}</p>", EMPTY_PLACEHOLDER)
    } else {
        render_comparison_table(model_names, rows)
    };
    format!(
        "<div style='font-size:{}px;'>\
         <p><strong>AKAN:</strong> {}</p>\
         <p><strong>ReferenceEN:</strong> {}</p>\
         {}</div>",
        font_size, source, reference, table_html
    )
}
