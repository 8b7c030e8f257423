//! 병음 → 한글 사전 로드 및 조회
//!
//! JSON 배열 형식의 사전 파일을 로드하여
//! 조회용 맵과 음절 집합을 한 번만 구성합니다.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::core::normalizer::normalize_pinyin;

/// 내장 사전 데이터
const BUNDLED_JSON: &str = include_str!("../../data/pinyin_korean.json");

lazy_static! {
    static ref BUNDLED: PinyinDictionary = match PinyinDictionary::from_json(BUNDLED_JSON) {
        Ok(dict) => dict,
        Err(e) => {
            log::error!("내장 사전 로드 실패, 빈 사전 사용: {}", e);
            PinyinDictionary::empty()
        }
    };
}

/// 사전 로드/파싱 에러
#[derive(Debug)]
pub enum DictionaryError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 항목 형식 오류
    FormatError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            DictionaryError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            DictionaryError::FormatError(s) => write!(f, "사전 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::IoError(e)
    }
}

/// 사전 항목 한 줄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// 성조 없는 소문자 병음 음절 (예: "ni", "lü")
    pub pinyin: String,
    /// 한글 발음 표기 (예: "니")
    pub korean: String,
}

impl DictEntry {
    pub fn new(pinyin: impl Into<String>, korean: impl Into<String>) -> Self {
        Self {
            pinyin: pinyin.into(),
            korean: korean.into(),
        }
    }
}

/// 병음 → 한글 사전
///
/// 생성 후에는 변경되지 않으므로 여러 스레드에서 동시에 읽어도 안전합니다.
#[derive(Debug, Clone, Default)]
pub struct PinyinDictionary {
    /// 음절 -> 한글 표기
    lookup: HashMap<String, String>,
    /// 알려진 음절 집합 (분리기에서 사용)
    syllables: HashSet<String>,
}

impl PinyinDictionary {
    /// JSON 파일에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// [
    ///   { "pinyin": "ni", "korean": "니" },
    ///   { "pinyin": "hao", "korean": "하오" }
    /// ]
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let entries: Vec<DictEntry> = serde_json::from_reader(reader)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        let dict = Self::from_entries(entries)?;
        log::info!("사전 로드 완료: {} ({}개 음절)", path.display(), dict.len());
        Ok(dict)
    }

    /// JSON 문자열에서 사전 로드
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<DictEntry> = serde_json::from_str(json_str)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        Self::from_entries(entries)
    }

    /// (병음, 한글) 쌍 목록에서 사전 생성
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::from_entries(
            pairs
                .into_iter()
                .map(|(pinyin, korean)| DictEntry::new(pinyin, korean)),
        )
    }

    /// 항목 목록에서 사전 생성
    ///
    /// - 병음 키는 정규화하여 저장 (`lv` -> `lü`)
    /// - 같은 키가 여러 번 나오면 마지막 항목 사용
    /// - 정규화 후 빈 키, 빈 한글 표기는 형식 오류
    pub fn from_entries<I>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = DictEntry>,
    {
        let mut lookup = HashMap::new();

        for (idx, entry) in entries.into_iter().enumerate() {
            let key = normalize_pinyin(&entry.pinyin);
            if key.is_empty() {
                return Err(DictionaryError::FormatError(format!(
                    "{}번째 항목의 병음이 비어 있습니다: {:?}",
                    idx + 1,
                    entry.pinyin
                )));
            }

            let korean = entry.korean.trim();
            if korean.is_empty() {
                return Err(DictionaryError::FormatError(format!(
                    "{}번째 항목({})의 한글 표기가 비어 있습니다",
                    idx + 1,
                    entry.pinyin
                )));
            }

            if key != entry.pinyin {
                log::warn!("비정규 병음 키 '{}' -> '{}'로 저장", entry.pinyin, key);
            }

            if let Some(prev) = lookup.insert(key.clone(), korean.to_string()) {
                log::debug!("중복 병음 키 '{}': '{}' 대신 '{}' 사용", key, prev, korean);
            }
        }

        let syllables = lookup.keys().cloned().collect();
        Ok(Self { lookup, syllables })
    }

    /// 빈 사전 생성
    pub fn empty() -> Self {
        Self::default()
    }

    /// 내장 사전 (프로세스당 한 번 구성)
    pub fn bundled() -> &'static PinyinDictionary {
        &BUNDLED
    }

    /// 정규화된 음절의 한글 표기 조회
    pub fn korean(&self, syllable: &str) -> Option<&str> {
        self.lookup.get(syllable).map(String::as_str)
    }

    /// 음절이 사전에 있는지 확인
    pub fn contains(&self, syllable: &str) -> bool {
        self.syllables.contains(syllable)
    }

    /// 알려진 음절 집합
    pub fn syllables(&self) -> &HashSet<String> {
        &self.syllables
    }

    /// 음절 수
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"[
            { "pinyin": "ni", "korean": "니" },
            { "pinyin": "hao", "korean": "하오" },
            { "pinyin": "lü", "korean": "뤼" }
        ]"#
    }

    #[test]
    fn test_load_from_json() {
        let dict = PinyinDictionary::from_json(sample_json()).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.korean("ni"), Some("니"));
        assert_eq!(dict.korean("hao"), Some("하오"));
        assert_eq!(dict.korean("ma"), None); // 없는 음절
        assert!(dict.contains("lü"));
        assert!(dict.syllables().contains("hao"));
    }

    #[test]
    fn test_duplicate_last_wins() {
        let dict = PinyinDictionary::from_pairs([("ni", "니"), ("ni", "니이")]).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.korean("ni"), Some("니이"));
    }

    #[test]
    fn test_keys_canonicalized() {
        let dict = PinyinDictionary::from_pairs([("lv", "뤼"), ("Nǚ", "뉘")]).unwrap();
        assert_eq!(dict.korean("lü"), Some("뤼"));
        assert_eq!(dict.korean("nü"), Some("뉘"));
        assert!(!dict.contains("lv"));
    }

    #[test]
    fn test_empty_pinyin_error() {
        let result = PinyinDictionary::from_pairs([("ni", "니"), ("123", "일이삼")]);
        assert!(matches!(result, Err(DictionaryError::FormatError(_))));
    }

    #[test]
    fn test_empty_korean_error() {
        let result = PinyinDictionary::from_pairs([("ni", "  ")]);
        assert!(matches!(result, Err(DictionaryError::FormatError(_))));
    }

    #[test]
    fn test_json_parse_error() {
        let missing_field = r#"[{ "pinyin": "ni" }]"#;
        let result = PinyinDictionary::from_json(missing_field);
        assert!(matches!(result, Err(DictionaryError::ParseError(_))));

        let not_array = r#"{ "ni": "니" }"#;
        let result = PinyinDictionary::from_json(not_array);
        assert!(matches!(result, Err(DictionaryError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PinyinDictionary::load("/nonexistent/pinyin_korean.json");
        assert!(matches!(result, Err(DictionaryError::IoError(_))));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = PinyinDictionary::empty();
        assert!(dict.is_empty());
        assert!(dict.syllables().is_empty());
    }

    #[test]
    fn test_bundled_dictionary() {
        let dict = PinyinDictionary::bundled();
        assert!(dict.len() > 400);
        assert_eq!(dict.korean("ni"), Some("니"));
        assert_eq!(dict.korean("hao"), Some("하오"));
        assert_eq!(dict.korean("zhuang"), Some("좡"));
        assert_eq!(dict.korean("lü"), Some("뤼"));
    }

    #[test]
    fn test_bundled_keys_are_canonical() {
        for key in PinyinDictionary::bundled().syllables() {
            assert_eq!(&normalize_pinyin(key), key);
            assert!(key.chars().count() <= crate::core::segmenter::DEFAULT_MAX_SYLLABLE_LEN);
        }
    }
}
