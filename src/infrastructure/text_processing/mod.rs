mod fixed_size_chunker;

pub use fixed_size_chunker::FixedSizeChunker;
