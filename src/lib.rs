//! pinyin-ko - 병음(pinyin) → 한글 발음 표기 변환 엔진
//!
//! ```
//! use pinyin_ko::{detect_tone, free_text_pinyin_to_korean, PinyinDictionary};
//!
//! let dict = PinyinDictionary::from_pairs([("ni", "니"), ("hao", "하오")]).unwrap();
//! assert_eq!(free_text_pinyin_to_korean("Nǐ hǎo!", &dict), "니 하오");
//! assert_eq!(detect_tone("mǎ").tone.number(), 3);
//! ```

pub mod config;
pub mod core;
pub mod dictionary;

pub use crate::core::normalizer::normalize_pinyin;
pub use crate::core::renderer::{free_text_pinyin_to_korean, pinyin_array_to_korean};
pub use crate::core::segmenter::{split_pinyin, split_pinyin_with_bound, DEFAULT_MAX_SYLLABLE_LEN};
pub use crate::core::tone::{annotate_tones, detect_tone, Tone, ToneInfo};
pub use crate::core::transliterator::Transliterator;
pub use dictionary::{DictEntry, DictionaryError, PinyinDictionary};
