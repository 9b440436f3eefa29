//! Topic Segmentation
//!
//! Segment a short transcript into topics with a toy keyword embedder.
//!
//! ```bash
//! RUST_LOG=driftcut=debug cargo run --example topic_segmentation
//! ```

use driftcut::{documents, CumulativeSimSplitter, Embedder};
use tracing_subscriber::EnvFilter;

/// One axis per keyword group. Stands in for a real embedding model.
struct KeywordEmbedder;

const GROUPS: [&[&str]; 3] = [
    &["deploy", "release", "rollback", "staging"],
    &["lunch", "pizza", "order", "hungry"],
    &["bug", "crash", "stack", "trace"],
];

impl Embedder for KeywordEmbedder {
    type Error = std::convert::Infallible;

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                GROUPS
                    .iter()
                    .map(|words| {
                        words
                            .iter()
                            .map(|w| lower.matches(w).count())
                            .sum::<usize>() as f32
                    })
                    .collect()
            })
            .collect())
    }
}

fn main() -> Result<(), driftcut::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let transcript = "\
        alice: the release is on staging now\n\
        bob: good, deploy to prod after lunch?\n\
        alice: yes, and keep the rollback plan ready\n\
        bob: speaking of lunch, should we order pizza\n\
        alice: I'm hungry, order two\n\
        bob: wait, staging has a crash in the logs\n\
        alice: send me the stack trace for that bug\n";

    let turns = documents::lines(transcript);
    let splitter = CumulativeSimSplitter::new(KeywordEmbedder).with_threshold(0.45);
    let segments = splitter.segment(&turns)?;

    println!("Turns: {}", turns.len());
    println!("Segments: {}\n", segments.len());

    for seg in &segments {
        println!("{seg}");
        for doc in &seg.docs {
            println!("    {doc}");
        }
    }

    Ok(())
}
