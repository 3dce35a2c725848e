use crate::application::ports::TextChunker;
use crate::domain::TextChunk;

/// Splits text into consecutive segments of at most `max_chunk_length`
/// characters, no overlap. Character-based rather than byte-based so the cut
/// never lands inside a multi-byte sequence.
pub struct FixedSizeChunker {
    max_chunk_length: usize,
}

impl FixedSizeChunker {
    pub fn new(max_chunk_length: usize) -> Self {
        Self { max_chunk_length }
    }
}

impl TextChunker for FixedSizeChunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let chars: Vec<char> = text.chars().collect();
        let total_len = chars.len();
        // A zero-length window would never advance.
        let step = self.max_chunk_length.max(1);

        let mut chunks = Vec::new();
        let mut offset = 0;
        let mut index = 0;

        while offset < total_len {
            let end = (offset + step).min(total_len);
            let chunk_text: String = chars[offset..end].iter().collect();
            chunks.push(TextChunk::new(index, chunk_text));
            offset = end;
            index += 1;
        }

        chunks
    }
}
