use crate::domain::TextChunk;

/// Splits arbitrary-length text into ordered, bounded-size chunks.
///
/// Implementations must be pure and total: no overlap, no loss, empty input
/// yields an empty sequence.
pub trait TextChunker: Send + Sync {
    fn chunk(&self, text: &str) -> Vec<TextChunk>;
}
