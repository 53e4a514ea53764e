//! Line classification for the raw poem corpus
//!
//! The source corpus is hand-typed plain text: poem headers, verse lines
//! and typesetting furniture (banners, tables of contents, page numbers,
//! leader dots) are interleaved with inconsistent separators. Rules are
//! evaluated in a fixed priority order so each one can be tested on its
//! own.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Corpus title banner; also appears as a running-head prefix on pages
const CORPUS_BANNER: &str = "唐诗三百首";
/// Running-head prefix inside poem bodies
const CORPUS_TITLE_TOKEN: &str = "唐诗";
/// Front-matter marker: punctuation guide
const PUNCTUATION_GUIDE_MARKER: &str = "标点";
/// Front-matter marker: digitization credit
const DIGITIZATION_CREDIT_MARKER: &str = "此电子版";
/// Chapter/volume marker, noise only when combined with a leader ellipsis
const VOLUME_MARKER: &str = "卷";
/// Table-of-contents marker
const TOC_MARKER: &str = "目录";

/// Parsed fields of a poem header line
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    pub id: String,
    pub author: String,
    pub title: String,
}

/// Classification of one trimmed corpus line
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Opens a new poem and terminates the previous one
    Header(HeaderInfo),
    /// Corpus furniture, skipped unconditionally
    Noise,
    /// Verse line belonging to the currently open poem
    Body,
    /// Id-like line that fails the header patterns; suspends body
    /// accumulation until the next valid header
    SectionBreak,
}

/// Classify one trimmed corpus line.
///
/// `in_body` is the parser's current state: page artifacts are only
/// meaningful inside a poem body, and text outside any poem is
/// unattributable and dropped.
pub fn classify(line: &str, in_body: bool) -> LineClass {
    if is_front_matter(line) {
        return LineClass::Noise;
    }
    if let Some(header) = parse_header(line) {
        return LineClass::Header(header);
    }
    if is_section_break(line) {
        return LineClass::SectionBreak;
    }
    if !in_body {
        return LineClass::Noise;
    }
    if is_page_artifact(line) || line.chars().count() < 2 {
        return LineClass::Noise;
    }
    LineClass::Body
}

/// Empty lines, front-matter markers, volume lines with leader ellipses,
/// table-of-contents lines and the corpus banner.
fn is_front_matter(line: &str) -> bool {
    line.is_empty()
        || line.starts_with(PUNCTUATION_GUIDE_MARKER)
        || line.starts_with(DIGITIZATION_CREDIT_MARKER)
        || (line.starts_with(VOLUME_MARKER) && line.contains("..."))
        || line.contains(TOC_MARKER)
        || line == CORPUS_BANNER
}

/// Strict header pattern: zero-padded 3-digit id, full-width colon
fn header_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{3})(.+?)：(.+)$").unwrap())
}

/// Loose header pattern: variable-length id with optional trailing
/// period/comma, full- or half-width colon
fn loose_header_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)[.。、,，]?(.+?)[：:](.+)$").unwrap())
}

/// Try both header patterns in order; captured fields are trimmed.
pub fn parse_header(line: &str) -> Option<HeaderInfo> {
    for pattern in [header_pattern(), loose_header_pattern()] {
        if let Some(caps) = pattern.captures(line) {
            return Some(HeaderInfo {
                id: caps[1].trim().to_string(),
                author: caps[2].trim().to_string(),
                title: caps[3].trim().to_string(),
            });
        }
    }
    None
}

/// Lines opening with a 3-digit id that failed the header patterns are
/// malformed headers, not page numbers.
fn is_section_break(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3}").unwrap()).is_match(line)
}

/// Page numbers, running heads and leader runs inside a poem body
fn is_page_artifact(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let numeric = RE.get_or_init(|| Regex::new(r"^\d+$").unwrap());
    numeric.is_match(line)
        || line.starts_with(CORPUS_TITLE_TOKEN)
        || line.contains("....")
        || line.contains("----")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_header() {
        let header = parse_header("001张九龄：感遇四首之一").unwrap();
        assert_eq!(header.id, "001");
        assert_eq!(header.author, "张九龄");
        assert_eq!(header.title, "感遇四首之一");
    }

    #[test]
    fn test_loose_header_variable_id_and_half_width_colon() {
        let header = parse_header("12.王维:鹿柴").unwrap();
        assert_eq!(header.id, "12");
        assert_eq!(header.author, "王维");
        assert_eq!(header.title, "鹿柴");

        let header = parse_header("7、李白：静夜思").unwrap();
        assert_eq!(header.id, "7");
        assert_eq!(header.author, "李白");
        assert_eq!(header.title, "静夜思");
    }

    #[test]
    fn test_header_classification_outside_body() {
        match classify("001李白：静夜思", false) {
            LineClass::Header(h) => assert_eq!(h.id, "001"),
            other => panic!("expected header, got {:?}", other),
        }
    }

    #[test]
    fn test_front_matter_is_noise() {
        assert_eq!(classify("", true), LineClass::Noise);
        assert_eq!(classify("唐诗三百首", true), LineClass::Noise);
        assert_eq!(classify("标点符号已统一为全角标点。", false), LineClass::Noise);
        assert_eq!(classify("此电子版由网络公开文本整理而来。", false), LineClass::Noise);
        assert_eq!(classify("卷一 五言古诗...1", true), LineClass::Noise);
        assert_eq!(classify("目录", false), LineClass::Noise);
    }

    #[test]
    fn test_malformed_header_is_section_break() {
        assert_eq!(classify("001张九龄", true), LineClass::SectionBreak);
        assert_eq!(classify("123", true), LineClass::SectionBreak);
    }

    #[test]
    fn test_page_artifacts_inside_body() {
        assert_eq!(classify("27", true), LineClass::Noise);
        assert_eq!(classify("唐诗三百首 卷一", true), LineClass::Noise);
        assert_eq!(classify("感遇四首之一....1", true), LineClass::Noise);
        assert_eq!(classify("--------", true), LineClass::Noise);
    }

    #[test]
    fn test_single_stray_character_dropped() {
        assert_eq!(classify("页", true), LineClass::Noise);
    }

    #[test]
    fn test_verse_line_inside_body() {
        assert_eq!(classify("床前明月光，疑是地上霜。", true), LineClass::Body);
    }

    #[test]
    fn test_text_outside_any_poem_is_noise() {
        assert_eq!(classify("床前明月光，疑是地上霜。", false), LineClass::Noise);
    }
}
