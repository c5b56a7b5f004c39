use once_cell::sync::Lazy;
use regex::Regex;

// @module: Bullet line splitting - arrow-delimited fields and POS tags

// @const: Arrow delimiter, optionally surrounded by whitespace
static DELIMITER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*=>\s*").unwrap());

// @const: Leading whitespace/dash/bullet prefix of a list item
static BULLET_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s\-\x{2022}]+").unwrap());

/// Recognized part-of-speech tags and their fixed display colors.
///
/// Parsing is lowercase-exact; anything else (including an empty tag) is
/// unrecognized and never produces coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Pronoun,
    Verb,
    Adverb,
    Adjective,
    Conjunction,
    Preposition,
    Punctuation,
    AuxiliaryVerb,
    Contraction,
    Noun,
    Interjection,
}

impl PosTag {
    /// Parse a tag field, case-insensitively. `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "pronoun" => Some(Self::Pronoun),
            "verb" => Some(Self::Verb),
            "adverb" => Some(Self::Adverb),
            "adjective" => Some(Self::Adjective),
            "conjunction" => Some(Self::Conjunction),
            "preposition" => Some(Self::Preposition),
            "punctuation" => Some(Self::Punctuation),
            "auxiliary verb" => Some(Self::AuxiliaryVerb),
            "contraction" => Some(Self::Contraction),
            "noun" => Some(Self::Noun),
            "interjection" => Some(Self::Interjection),
            _ => None,
        }
    }

    /// CSS color name assigned to this tag
    pub fn color(self) -> &'static str {
        match self {
            Self::Pronoun => "blue",
            Self::Verb => "red",
            Self::Adverb => "green",
            Self::Adjective => "darkorange",
            Self::Conjunction => "teal",
            Self::Preposition => "brown",
            Self::Punctuation => "gray",
            Self::AuxiliaryVerb => "purple",
            Self::Contraction => "darkred",
            Self::Noun => "navy",
            Self::Interjection => "olive",
        }
    }
}

/// A bullet line reduced to the fragment one consumer cares about, plus the
/// tag that drives its coloring (when recognized).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    /// Display payload; may be empty or, for unsplittable literal lines, the
    /// raw unbulleted line
    pub payload: String,
    /// Recognized part-of-speech tag, if any
    pub tag: Option<PosTag>,
}

impl SplitLine {
    fn new(payload: impl Into<String>, tag: Option<PosTag>) -> Self {
        SplitLine { payload: payload.into(), tag }
    }
}

/// Strip the leading whitespace/dash/bullet prefix from a list item.
pub fn strip_bullet(line: &str) -> String {
    BULLET_PREFIX_REGEX.replace(line, "").to_string()
}

/// Split a line on the arrow delimiter into trimmed, unquoted fields,
/// discarding fields that were blank before unquoting.
pub fn split_fields(line: &str) -> Vec<String> {
    DELIMITER_REGEX
        .split(line)
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim().trim_matches('"').to_string())
        .collect()
}

/// Free-translation policy: the English fragment of an AI-bucket line.
///
/// One field is the payload on its own; with two, the second is the tag;
/// with three or more, the first field is dropped and the middle fields are
/// joined to form the payload, the last being the tag.
pub fn split_free_translation(line: &str) -> SplitLine {
    let parts = split_fields(&strip_bullet(line));
    match parts.len() {
        0 => SplitLine::new("", None),
        1 => SplitLine::new(parts[0].clone(), None),
        2 => SplitLine::new(parts[0].clone(), PosTag::parse(&parts[1])),
        _ => {
            let tag = PosTag::parse(parts.last().map(String::as_str).unwrap_or_default());
            SplitLine::new(parts[1..parts.len() - 1].join(" "), tag)
        }
    }
}

/// Literal-mapping policy, target side: the English (second) field.
///
/// Lines with fewer than two fields are returned unsplit, as the raw
/// unbulleted text, with no tag.
pub fn split_literal_target(line: &str) -> SplitLine {
    let unbulleted = strip_bullet(line);
    let parts = split_fields(&unbulleted);
    if parts.len() < 2 {
        return SplitLine::new(unbulleted, None);
    }
    let tag = if parts.len() > 2 {
        PosTag::parse(parts.last().map(String::as_str).unwrap_or_default())
    } else {
        None
    };
    SplitLine::new(parts[1].clone(), tag)
}

/// Literal-mapping policy, source side: the source-language (first) field,
/// colored by the last field when there are three or more.
pub fn split_literal_source(line: &str) -> SplitLine {
    let parts = split_fields(&strip_bullet(line));
    match parts.len() {
        0 => SplitLine::new("", None),
        1 => SplitLine::new(parts[0].clone(), None),
        2 => SplitLine::new(parts[0].clone(), PosTag::parse(&parts[1])),
        _ => {
            let tag = PosTag::parse(parts.last().map(String::as_str).unwrap_or_default());
            SplitLine::new(parts[0].clone(), tag)
        }
    }
}
