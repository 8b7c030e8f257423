//! 병음 → 한글 발음 사전
//!
//! 사전은 시작 시 한 번 로드하고 이후에는 읽기 전용으로 공유합니다.
//!
//! # 사용 예시
//!
//! ```
//! use pinyin_ko::dictionary::PinyinDictionary;
//!
//! // 내장 사전
//! let dict = PinyinDictionary::bundled();
//! assert_eq!(dict.korean("hao"), Some("하오"));
//!
//! // 직접 구성
//! let dict = PinyinDictionary::from_json(r#"[{"pinyin": "ni", "korean": "니"}]"#).unwrap();
//! assert!(dict.contains("ni"));
//! ```

mod model;

pub use model::{DictEntry, DictionaryError, PinyinDictionary};
