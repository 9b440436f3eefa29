//! Turning raw text into a document sequence.
//!
//! Splitters work on an ordered list of documents. When the input is one
//! long text, something has to decide what a "document" is first:
//!
//! | Unit | Function | Typical source |
//! |------|----------|----------------|
//! | Paragraph | [`paragraphs`] | Articles, docs |
//! | Sentence | [`sentences`] | Dense prose |
//! | Line | [`lines`] | Transcripts, chat logs |
//!
//! All three trim whitespace and drop empty pieces, so every returned
//! document has content. The returned slices borrow from the input.
//!
//! ## Sentences
//!
//! Sentence detection uses Unicode Standard Annex #29 (UAX #29), which
//! copes with decimal numbers, ellipses and most abbreviations:
//!
//! ```text
//! "Pi is 3.14. That's it."  →  ["Pi is 3.14.", "That's it."]
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Split text on blank lines.
///
/// ```rust
/// use driftcut::documents::paragraphs;
///
/// let text = "First paragraph.\nStill first.\n\n\nSecond paragraph.\n";
/// assert_eq!(
///     paragraphs(text),
///     ["First paragraph.\nStill first.", "Second paragraph."]
/// );
/// ```
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            push_trimmed(&mut out, &text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    push_trimmed(&mut out, &text[start..]);

    out
}

/// Split text into sentences (UAX #29).
///
/// ```rust
/// use driftcut::documents::sentences;
///
/// let docs = sentences("The cat sat. The dog ran!  Birds?");
/// assert_eq!(docs, ["The cat sat.", "The dog ran!", "Birds?"]);
/// ```
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for sentence in text.split_sentence_bounds() {
        push_trimmed(&mut out, sentence);
    }
    out
}

/// Split text into non-blank lines, e.g. transcript turns.
///
/// ```rust
/// use driftcut::documents::lines;
///
/// let docs = lines("alice: hi\n\n  bob: hello  \r\n");
/// assert_eq!(docs, ["alice: hi", "bob: hello"]);
/// ```
pub fn lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for line in text.lines() {
        push_trimmed(&mut out, line);
    }
    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(paragraphs("").is_empty());
        assert!(sentences("").is_empty());
        assert!(lines("").is_empty());
        assert!(paragraphs("  \n\n \n").is_empty());
    }

    #[test]
    fn test_paragraphs_without_trailing_newline() {
        assert_eq!(paragraphs("one\n\ntwo"), ["one", "two"]);
        assert_eq!(paragraphs("single"), ["single"]);
    }

    #[test]
    fn test_paragraphs_whitespace_only_separator() {
        assert_eq!(paragraphs("one\n   \t\ntwo"), ["one", "two"]);
    }

    #[test]
    fn test_sentences_decimal_number() {
        let docs = sentences("Pi is 3.14. That's it.");
        assert_eq!(docs, ["Pi is 3.14.", "That's it."]);
    }

    #[test]
    fn test_sentences_unicode() {
        let docs = sentences("Привет мир. Hello 世界.");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0], "Привет мир.");
    }

    #[test]
    fn test_pieces_borrow_from_input() {
        let text = String::from("a\n\nb");
        let docs = paragraphs(&text);
        let base = text.as_ptr() as usize;
        for doc in docs {
            let at = doc.as_ptr() as usize - base;
            assert_eq!(&text[at..at + doc.len()], doc);
        }
    }
}
