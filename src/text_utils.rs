/*!
 * Text normalization helpers shared by the cell parser.
 *
 * Model cells frequently arrive with typographic punctuation (curly quotes,
 * en/em dashes) that breaks the marker and delimiter matching downstream, so
 * everything is funneled through `normalize_text` before parsing.
 */

/// Characters stripped from the edges of a word by `clean_word`
const PUNCT_TO_STRIP: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|',
    '}', '~', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{2026}',
];

/// Replace curly quotes and en/em dashes with their ASCII equivalents.
///
/// Idempotent: running it on already-normalized text is a no-op.
pub fn normalize_text(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{2013}', '\u{2014}'], "-")
}

/// Remove leading/trailing punctuation and quote characters from a word.
pub fn clean_word(word: &str) -> &str {
    word.trim_matches(PUNCT_TO_STRIP)
}
