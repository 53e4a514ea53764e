//! Corpus parsing: raw text to ordered poem records

use crate::classify::{classify, LineClass};
use crate::poem::Poem;

/// Parse the raw corpus text into poems, in corpus order.
///
/// Line-by-line state machine over the classified line stream. A header
/// emits the previous poem and opens a new one; a malformed header
/// suspends body accumulation until the next valid header, so lines in
/// between are dropped as unattributable. Headers with no surviving body
/// lines are never emitted, so every returned poem has non-empty content.
pub fn parse_corpus(raw: &str) -> Vec<Poem> {
    let mut poems = Vec::new();
    let mut current: Option<Poem> = None;
    let mut in_body = false;

    for raw_line in raw.split('\n') {
        let line = raw_line.trim();
        match classify(line, in_body) {
            LineClass::Noise => {}
            LineClass::Header(header) => {
                flush(&mut current, &mut poems);
                current = Some(Poem::new(header.id, header.author, header.title));
                in_body = true;
            }
            LineClass::SectionBreak => {
                in_body = false;
            }
            LineClass::Body => {
                if let Some(poem) = current.as_mut() {
                    poem.content.push(line.to_string());
                }
            }
        }
    }
    flush(&mut current, &mut poems);

    poems
}

/// Emit the in-progress poem if it has any non-empty content left after
/// filtering residual blank lines.
fn flush(current: &mut Option<Poem>, poems: &mut Vec<Poem>) {
    if let Some(mut poem) = current.take() {
        poem.content.retain(|line| !line.trim().is_empty());
        if !poem.content.is_empty() {
            poems.push(poem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_poem_corpus() {
        let raw = "001李白：静夜思\n床前明月光\n疑是地上霜\n002杜甫：春望\n国破山河在";
        let poems = parse_corpus(raw);

        assert_eq!(poems.len(), 2);
        assert_eq!(poems[0].id, "001");
        assert_eq!(poems[0].author, "李白");
        assert_eq!(poems[0].title, "静夜思");
        assert_eq!(poems[0].content, vec!["床前明月光", "疑是地上霜"]);
        assert_eq!(poems[0].source, "李白《静夜思》");
        assert_eq!(poems[1].id, "002");
        assert_eq!(poems[1].author, "杜甫");
        assert_eq!(poems[1].content, vec!["国破山河在"]);
    }

    #[test]
    fn test_header_without_body_is_dropped() {
        let raw = "001李白：静夜思\n002杜甫：春望\n国破山河在";
        let poems = parse_corpus(raw);

        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].id, "002");

        let raw = "001李白：静夜思\n床前明月光\n002杜甫：春望";
        let poems = parse_corpus(raw);
        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].id, "001");
    }

    #[test]
    fn test_no_poem_has_empty_content() {
        let raw = "001李白：静夜思\n\n002杜甫：春望\n国破山河在\n\n003王维：相思";
        for poem in parse_corpus(raw) {
            assert!(!poem.content.is_empty());
        }
    }

    #[test]
    fn test_section_break_suspends_accumulation() {
        // the malformed header pauses the first poem; verses after it are
        // unattributable and lost until the next valid header
        let raw = "001李白：静夜思\n床前明月光\n002杜甫\n国破山河在\n003王维：相思\n红豆生南国";
        let poems = parse_corpus(raw);

        assert_eq!(poems.len(), 2);
        assert_eq!(poems[0].title, "静夜思");
        assert_eq!(poems[0].content, vec!["床前明月光"]);
        assert_eq!(poems[1].title, "相思");
        assert_eq!(poems[1].content, vec!["红豆生南国"]);
    }

    #[test]
    fn test_furniture_and_page_artifacts_skipped() {
        let raw = "唐诗三百首\n此电子版由网络公开文本整理而来。\n目录\n卷一 五言古诗...1\n\
                   001李白：静夜思\n床前明月光\n12\n唐诗三百首 卷一\n疑是地上霜";
        let poems = parse_corpus(raw);

        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].content, vec!["床前明月光", "疑是地上霜"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "001李白：静夜思\n床前明月光\n疑是地上霜\n002杜甫：春望\n国破山河在";
        assert_eq!(parse_corpus(raw), parse_corpus(raw));
    }

    #[test]
    fn test_crlf_lines() {
        let raw = "001李白：静夜思\r\n床前明月光\r\n疑是地上霜\r\n";
        let poems = parse_corpus(raw);

        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].content, vec!["床前明月光", "疑是地上霜"]);
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_corpus("").is_empty());
        assert!(parse_corpus("没有任何标题行的散文文本\n第二行").is_empty());
    }
}
