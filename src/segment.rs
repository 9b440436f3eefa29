//! The Segment type: a run of consecutive documents on one topic.

/// A maximal run of consecutive input documents judged topically coherent.
///
/// Segments returned by one call partition the input: concatenating their
/// `docs` in order gives back the original sequence.
///
/// ## Triggered vs Trailing
///
/// A segment is *triggered* when it was closed because the similarity
/// between its accumulated context and the next document fell below the
/// threshold. The score that caused the cut is kept. The final segment of a
/// run is never triggered: it simply ends with the input.
///
/// ```text
/// Input:     [A] [B] [C] [D]
/// Scores:      0.9 0.9 0.2
///                       ↑ cut
/// Segment 0: [A, B, C]  triggered_score = Some(0.2)
/// Segment 1: [D]        triggered_score = None
/// ```
///
/// ```rust
/// use driftcut::Segment;
///
/// let seg = Segment::triggered(vec!["A".into(), "B".into(), "C".into()], 0, 0.2);
/// assert!(seg.is_triggered());
/// assert_eq!(seg.span(), 0..3);
///
/// let tail = Segment::trailing(vec!["D".into()], 3);
/// assert!(!tail.is_triggered());
/// assert_eq!(tail.triggered_score, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The documents of this segment, in input order.
    pub docs: Vec<String>,
    /// Index in the input of the first document.
    pub start: usize,
    /// Similarity that closed this segment. `Some` only for triggered segments.
    pub triggered_score: Option<f32>,
}

impl Segment {
    /// Create a segment closed by a threshold trigger.
    #[must_use]
    pub fn triggered(docs: Vec<String>, start: usize, score: f32) -> Self {
        Self {
            docs,
            start,
            triggered_score: Some(score),
        }
    }

    /// Create the trailing segment of a run.
    #[must_use]
    pub fn trailing(docs: Vec<String>, start: usize) -> Self {
        Self {
            docs,
            start,
            triggered_score: None,
        }
    }

    /// Whether this segment was closed by a similarity drop.
    pub fn is_triggered(&self) -> bool {
        self.triggered_score.is_some()
    }

    /// Number of documents in this segment.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether this segment holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Index range of this segment in the input sequence.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.docs.len()
    }

    /// The segment's documents joined with single spaces.
    pub fn content(&self) -> String {
        self.docs.join(" ")
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{ span: {}..{}, docs: {}",
            self.start,
            self.start + self.docs.len(),
            self.docs.len()
        )?;
        match self.triggered_score {
            Some(score) => write!(f, ", triggered_score: {score:.4} }}"),
            None => write!(f, " }}"),
        }
    }
}
