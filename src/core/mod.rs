//! 병음 정규화, 음절 분리, 한글 렌더링, 성조 판별

pub mod normalizer;
pub mod renderer;
pub mod segmenter;
pub mod tone;
pub mod transliterator;
