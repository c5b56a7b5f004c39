/*!
 * # storylens - Bilingual Story Navigator
 *
 * A Rust library for browsing aligned bilingual story data and comparing
 * AI-model translations line by line.
 *
 * ## Features
 *
 * - Parse annotated model cells into labeled sections (AI translation,
 *   literal mapping, cultural context, clarification)
 * - Split arrow-delimited bullet lines into source/target/part-of-speech
 *   fields with per-consumer field policies
 * - Color-code payloads by recognized part-of-speech tag
 * - Assemble per-line comparison tables in detail or summary layout
 * - Merge per-model sheets into one row-indexed story view
 * - Render self-contained HTML fragments for embedding
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text_utils`: Punctuation normalization
 * - `cell_parser`: Section extraction and bullet classification
 * - `line_tokens`: Arrow-delimited field splitting and POS tags
 * - `display`: Row assembly for the comparison table
 * - `html_render`: HTML output for navigator and comparison views
 * - `story_store`: Story data loading and model-sheet merging
 * - `navigation`: Explicit line-navigation state
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cell_parser;
pub mod display;
pub mod errors;
pub mod html_render;
pub mod line_tokens;
pub mod navigation;
pub mod story_store;
pub mod text_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use cell_parser::{ParsedCell, SectionKind};
pub use display::{assemble_rows, DisplayOptions, TableRow};
pub use errors::{AppError, NavigationError, StoreError};
pub use line_tokens::PosTag;
pub use navigation::Navigator;
pub use story_store::{AlignedLine, CombinedLine, StoryStore};
pub use text_utils::normalize_text;
