/*!
 * Tests for comparison-table row assembly
 */

use std::collections::BTreeMap;

use storylens::cell_parser::ParsedCell;
use storylens::display::{assemble_rows, colorize_full_bullet_line, DisplayOptions};

fn cells_for(models: &[(&str, &str)]) -> BTreeMap<String, ParsedCell> {
    models
        .iter()
        .map(|(name, raw)| (name.to_string(), ParsedCell::parse(raw)))
        .collect()
}

const LITERAL_ONLY_CELL: &str = concat!(
    "**1. Literal Translation Mapping**\n",
    "- okyena => tomorrow => adverb\n",
    "- papa => father => noun\n",
);

/// Test whole-line coloring keyed by the last delimiter field
#[test]
fn test_colorize_full_bullet_line_withRecognizedTag_shouldWrapWholeLine() {
    let colored = colorize_full_bullet_line("  - okyena => tomorrow => adverb", true);
    assert_eq!(
        colored,
        "<span style=\"color:green;\">- okyena => tomorrow => adverb</span>"
    );

    // Unrecognized tag: line passes through, leading spaces still stripped
    let plain = colorize_full_bullet_line("  - okyena => tomorrow => xyz", true);
    assert_eq!(plain, "- okyena => tomorrow => xyz");

    // Coloring off: never wrapped
    let off = colorize_full_bullet_line("- go => verb", false);
    assert_eq!(off, "- go => verb");
}

/// Test detail mode pads shorter models with empty cells
#[test]
fn test_assemble_rows_withDetailMode_shouldPadShorterModels() {
    let short_cell = "**1. Literal Translation Mapping**\n- okyena => tomorrow => adverb\n";
    let cells = cells_for(&[("alpha", LITERAL_ONLY_CELL), ("beta", short_cell)]);
    let opts = DisplayOptions {
        show_literal_bullets: true,
        ..DisplayOptions::default()
    };
    let rows = assemble_rows(&cells, opts);

    // Header row + one row per bullet line of the longest model
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "Literal Translation Mapping");
    assert_eq!(rows[0][1], "");
    assert_eq!(rows[0][2], "");

    // Bullet rows carry no label; beta's second cell pads empty
    assert_eq!(rows[1][0], "");
    assert!(rows[1][1].contains("- okyena => tomorrow => adverb"));
    assert_eq!(rows[2][2], "");
    assert!(rows[2][1].contains("- papa => father => noun"));
}

/// Test summary mode emits joined source and target rows
#[test]
fn test_assemble_rows_withSummaryMode_shouldJoinLiteralPayloads() {
    let cells = cells_for(&[("alpha", LITERAL_ONLY_CELL)]);
    let rows = assemble_rows(&cells, DisplayOptions::default());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Akan");
    assert_eq!(
        rows[0][1],
        "<span style=\"color:green;\">okyena</span> <span style=\"color:navy;\">papa</span>"
    );
    assert_eq!(rows[1][0], "Literal English Translation");
    assert_eq!(
        rows[1][1],
        "<span style=\"color:green;\">tomorrow</span> <span style=\"color:navy;\">father</span>"
    );
}

/// Test summary mode without coloring joins bare payloads
#[test]
fn test_assemble_rows_withColorOff_shouldEmitPlainPayloads() {
    let cells = cells_for(&[("alpha", LITERAL_ONLY_CELL)]);
    let opts = DisplayOptions {
        color_pos: false,
        ..DisplayOptions::default()
    };
    let rows = assemble_rows(&cells, opts);
    assert_eq!(rows[0][1], "okyena papa");
    assert_eq!(rows[1][1], "tomorrow father");
}

/// Test the full-text fallback when a section has a body but no bullets
#[test]
fn test_assemble_rows_withBulletlessSections_shouldFallBackToFullText() {
    let cell = concat!(
        "**AI English Translation**\nA plain prose translation.\n",
        "**1. Literal Translation Mapping**\nNo mapping was produced.\n",
    );
    let cells = cells_for(&[("alpha", cell)]);
    let rows = assemble_rows(&cells, DisplayOptions::default());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Literal English Translation");
    assert_eq!(rows[0][1], "No mapping was produced.");
    assert_eq!(rows[1][0], "AI English Translation");
    assert_eq!(rows[1][1], "A plain prose translation.");
}

/// Test cultural and clarification rows obey their toggles and blankness
#[test]
fn test_assemble_rows_withNoteSections_shouldGateOntogglesAndContent() {
    let cell = concat!(
        "**2. Cultural Context**\nSpider stories are told at night.\n",
        "**3. Translation Clarification**\n \n",
    );
    let cells = cells_for(&[("alpha", cell)]);

    let hidden = assemble_rows(&cells, DisplayOptions::default());
    assert!(hidden.is_empty());

    let opts = DisplayOptions {
        show_cultural: true,
        show_clarification: true,
        ..DisplayOptions::default()
    };
    let rows = assemble_rows(&cells, opts);

    // Clarification is blank for every model, so only cultural renders
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Cultural Context");
    assert_eq!(rows[0][1], "Spider stories are told at night.");
}

/// Test model cells appear in alphabetical column order
#[test]
fn test_assemble_rows_withUnsortedModels_shouldOrderColumnsAlphabetically() {
    let zeta = "**AI English Translation**\nzeta text\n";
    let alpha = "**AI English Translation**\nalpha text\n";
    let cells = cells_for(&[("zeta", zeta), ("alpha", alpha)]);
    let rows = assemble_rows(&cells, DisplayOptions::default());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["AI English Translation", "alpha text", "zeta text"]);
}

/// Test empty cells under every toggle produce zero rows
#[test]
fn test_assemble_rows_withEmptyCells_shouldProduceNoRows() {
    let cells = cells_for(&[("alpha", ""), ("beta", "")]);
    let opts = DisplayOptions {
        show_literal_bullets: true,
        show_ai_bullets: true,
        show_cultural: true,
        show_clarification: true,
        color_pos: true,
    };
    assert!(assemble_rows(&cells, opts).is_empty());
}
