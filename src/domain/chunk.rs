/// A bounded-length contiguous segment of a larger input text.
///
/// Chunks are ordered by `index`; concatenating chunk texts in index order
/// reconstructs the original input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
}

impl TextChunk {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }
}
