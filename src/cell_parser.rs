use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::text_utils::normalize_text;

// @module: Model cell parsing - section extraction and bullet line handling

/// Arrow delimiter separating fields within a bullet line
pub const FIELD_DELIMITER: &str = "=>";

/// Minimum number of delimiters for a bullet line to count as a literal mapping
const LITERAL_DELIMITER_THRESHOLD: usize = 2;

const AI_HEADING: &str = "AI English Translation";
const LITERAL_HEADING: &str = "1. Literal Translation Mapping";
const CULTURAL_HEADING: &str = "2. Cultural Context";
const CLARIFICATION_HEADING: &str = "3. Translation Clarification";
const FOOTNOTE_HEADING: &str = "Footnote";

// @const: Bespoke fallback for cells that drop the bold AI heading
static ENGLISH_TRANSLATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)English Translation:\s*(.*?)\s*(?:\d+\.\s*Literal Translation Mapping:|$)")
        .unwrap()
});

/// The four labeled sections a model cell may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Free-form AI translation of the line
    AiTranslation,
    /// Word-by-word literal mapping bullets
    LiteralMapping,
    /// Cultural background notes
    CulturalContext,
    /// Notes on translation choices
    Clarification,
}

impl SectionKind {
    /// Heading text as it appears (bolded) inside a cell
    pub fn heading(self) -> &'static str {
        match self {
            Self::AiTranslation => AI_HEADING,
            Self::LiteralMapping => LITERAL_HEADING,
            Self::CulturalContext => CULTURAL_HEADING,
            Self::Clarification => CLARIFICATION_HEADING,
        }
    }

    /// Headings that terminate this section's body
    pub fn end_headings(self) -> &'static [&'static str] {
        match self {
            Self::AiTranslation => &[
                LITERAL_HEADING,
                CULTURAL_HEADING,
                CLARIFICATION_HEADING,
                FOOTNOTE_HEADING,
            ],
            Self::LiteralMapping => &[CULTURAL_HEADING, CLARIFICATION_HEADING, FOOTNOTE_HEADING],
            Self::CulturalContext => &[CLARIFICATION_HEADING, FOOTNOTE_HEADING],
            Self::Clarification => &[FOOTNOTE_HEADING],
        }
    }

    /// Row label used when the section is rendered
    pub fn display_label(self) -> &'static str {
        match self {
            Self::AiTranslation => "AI English Translation",
            Self::LiteralMapping => "Literal Translation Mapping",
            Self::CulturalContext => "Cultural Context",
            Self::Clarification => "Translation Clarification",
        }
    }

    /// Ordered extraction strategies for this section, tried until one
    /// yields non-blank output. Only the loose fallbacks differ per section:
    /// the generic plain-heading match is reserved for Cultural Context and
    /// Clarification, the `English Translation:` fallback for the AI section.
    pub fn strategies(self) -> &'static [ExtractionStrategy] {
        match self {
            Self::AiTranslation => &[
                ExtractionStrategy::BoldHeading(Self::AiTranslation),
                ExtractionStrategy::EnglishTranslationLine,
            ],
            Self::LiteralMapping => &[ExtractionStrategy::BoldHeading(Self::LiteralMapping)],
            Self::CulturalContext => &[
                ExtractionStrategy::BoldHeading(Self::CulturalContext),
                ExtractionStrategy::PlainHeading(Self::CulturalContext),
            ],
            Self::Clarification => &[
                ExtractionStrategy::BoldHeading(Self::Clarification),
                ExtractionStrategy::PlainHeading(Self::Clarification),
            ],
        }
    }
}

/// One way of locating a section's body inside a cell.
///
/// Strategies never fail: a miss is an empty string.
#[derive(Debug, Clone, Copy)]
pub enum ExtractionStrategy {
    /// Primary: `**Heading**` up to the earliest `**End**` marker
    BoldHeading(SectionKind),
    /// Loose: `Heading:` or `Heading-` up to the next numbered heading
    PlainHeading(SectionKind),
    /// Bespoke: `English Translation: ...` up to the literal-mapping heading
    EnglishTranslationLine,
}

impl ExtractionStrategy {
    /// Apply this strategy to the full cell text
    pub fn apply(self, cell_text: &str) -> String {
        match self {
            Self::BoldHeading(kind) => {
                extract_bold_section(cell_text, kind.heading(), kind.end_headings())
            }
            Self::PlainHeading(kind) => extract_plain_section(cell_text, kind.heading()),
            Self::EnglishTranslationLine => ENGLISH_TRANSLATION_REGEX
                .captures(cell_text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Try each strategy in order, returning the first non-blank body.
pub fn extract_section(cell_text: &str, strategies: &[ExtractionStrategy]) -> String {
    for (i, strategy) in strategies.iter().enumerate() {
        let body = strategy.apply(cell_text);
        if !body.trim().is_empty() {
            if i > 0 {
                debug!("Section extracted via fallback strategy {:?}", strategy);
            }
            return body;
        }
    }
    String::new()
}

/// Find a case-insensitive literal match, returning its byte range.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let re = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find(haystack).map(|m| (m.start(), m.end()))
}

/// Extract the body between `**start_heading**` and the earliest of the
/// `**end**` markers built from `end_headings`, case-insensitive.
///
/// Returns `""` when the start marker is absent; runs to end-of-text when no
/// end marker follows.
pub fn extract_bold_section(cell_text: &str, start_heading: &str, end_headings: &[&str]) -> String {
    if cell_text.is_empty() {
        return String::new();
    }
    let start_marker = format!("**{}**", start_heading);
    let Some((_, body_start)) = find_case_insensitive(cell_text, &start_marker) else {
        return String::new();
    };
    let body = &cell_text[body_start..];

    let mut earliest_end: Option<usize> = None;
    for end_heading in end_headings {
        let end_marker = format!("**{}**", end_heading);
        if let Some((pos, _)) = find_case_insensitive(body, &end_marker) {
            if earliest_end.is_none_or(|e| pos < e) {
                earliest_end = Some(pos);
            }
        }
    }
    match earliest_end {
        Some(end) => body[..end].to_string(),
        None => body.to_string(),
    }
}

/// Loose extraction: `Heading` followed by `:` or `-`, captured up to the
/// next numbered heading or end of text, across line breaks.
fn extract_plain_section(cell_text: &str, heading: &str) -> String {
    let pattern = format!(r"(?is){}\s*[:\-]\s*(.*?)(?:\d+\.|$)", regex::escape(heading));
    let Ok(re) = Regex::new(&pattern) else {
        return String::new();
    };
    re.captures(cell_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Collect the list-item lines of a text block.
///
/// A line qualifies when its trimmed form starts with `"- "` or `"• "`; the
/// line itself is kept untouched (leading whitespace, dash and quoting
/// included) so detail-mode rows can show it verbatim.
pub fn bullet_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.starts_with("- ") || trimmed.starts_with("\u{2022} ")
        })
        .map(|line| line.to_string())
        .collect()
}

/// Reassign bullet lines between the free-translation and literal buckets by
/// delimiter count alone: two or more `=>` make a literal mapping, fewer make
/// a free translation, regardless of which section the line came from.
///
/// Output order is lines-from-`ai_candidates` first, then
/// lines-from-`literal_candidates`, each in original order.
pub fn reclassify_bullets(
    ai_candidates: Vec<String>,
    literal_candidates: Vec<String>,
) -> (Vec<String>, Vec<String>) {
    let mut final_ai = Vec::new();
    let mut final_literal = Vec::new();
    for line in ai_candidates {
        if line.matches(FIELD_DELIMITER).count() >= LITERAL_DELIMITER_THRESHOLD {
            final_literal.push(line);
        } else {
            final_ai.push(line);
        }
    }
    for line in literal_candidates {
        if line.matches(FIELD_DELIMITER).count() < LITERAL_DELIMITER_THRESHOLD {
            final_ai.push(line);
        } else {
            final_literal.push(line);
        }
    }
    (final_ai, final_literal)
}

/// One model's cell, broken into its recognized sections.
///
/// Every field degrades to empty rather than erroring: a cell without a
/// given section simply has a blank body and no bullets.
#[derive(Debug, Clone, Default)]
pub struct ParsedCell {
    /// Full AI-translation body, trimmed
    pub ai_full: String,
    /// Bullet lines landing in the free-translation bucket
    pub ai_bullets: Vec<String>,
    /// Full literal-mapping body, trimmed
    pub literal_full: String,
    /// Bullet lines landing in the literal bucket
    pub literal_bullets: Vec<String>,
    /// Cultural-context body, trimmed
    pub cultural: String,
    /// Clarification body, trimmed
    pub clarification: String,
}

impl ParsedCell {
    /// Parse a raw cell into its sections and classified bullet lines.
    pub fn parse(raw_cell: &str) -> Self {
        let cell_text = normalize_text(raw_cell);

        let ai_block = extract_section(&cell_text, SectionKind::AiTranslation.strategies());
        let literal_block = extract_section(&cell_text, SectionKind::LiteralMapping.strategies());
        let ai_candidates = bullet_lines(&ai_block);
        let literal_candidates = bullet_lines(&literal_block);
        let (ai_bullets, literal_bullets) = reclassify_bullets(ai_candidates, literal_candidates);

        ParsedCell {
            ai_full: ai_block.trim().to_string(),
            ai_bullets,
            literal_full: literal_block.trim().to_string(),
            literal_bullets,
            cultural: extract_section(&cell_text, SectionKind::CulturalContext.strategies())
                .trim()
                .to_string(),
            clarification: extract_section(&cell_text, SectionKind::Clarification.strategies())
                .trim()
                .to_string(),
        }
    }

    /// True when no section produced any content
    pub fn is_empty(&self) -> bool {
        self.ai_full.is_empty()
            && self.literal_full.is_empty()
            && self.cultural.is_empty()
            && self.clarification.is_empty()
    }
}
