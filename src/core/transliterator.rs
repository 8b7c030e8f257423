//! 병음 → 한글 발음 변환기
//!
//! 사전 참조와 최대 음절 길이를 묶은 읽기 전용 핸들.
//! 여러 스레드에서 공유해도 안전합니다.

use crate::core::renderer::{pinyin_array_to_korean, render_free_text, segment_free_text};
use crate::core::segmenter::{split_pinyin_with_bound, DEFAULT_MAX_SYLLABLE_LEN};
use crate::dictionary::PinyinDictionary;

/// 병음 → 한글 발음 변환기
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'d> {
    dict: &'d PinyinDictionary,
    max_syllable_len: usize,
}

impl Transliterator<'static> {
    /// 내장 사전을 사용하는 변환기
    pub fn bundled() -> Self {
        Self::new(PinyinDictionary::bundled())
    }
}

impl<'d> Transliterator<'d> {
    /// 사전을 지정하여 변환기 생성 (기본 최대 음절 길이)
    pub fn new(dict: &'d PinyinDictionary) -> Self {
        Self {
            dict,
            max_syllable_len: DEFAULT_MAX_SYLLABLE_LEN,
        }
    }

    /// 최대 음절 길이 설정 (1 미만은 1로 보정)
    pub fn with_max_syllable_len(mut self, len: usize) -> Self {
        self.max_syllable_len = len.max(1);
        self
    }

    pub fn max_syllable_len(&self) -> usize {
        self.max_syllable_len
    }

    pub fn dictionary(&self) -> &'d PinyinDictionary {
        self.dict
    }

    /// 정규화된 병음 문자열을 음절로 분리
    pub fn split(&self, alpha: &str) -> Vec<String> {
        split_pinyin_with_bound(alpha, self.dict.syllables(), self.max_syllable_len)
    }

    /// 자유 텍스트를 단어별 음절 목록으로 분리
    pub fn segment_words(&self, text: &str) -> Vec<Vec<String>> {
        segment_free_text(text, self.dict.syllables(), self.max_syllable_len)
    }

    /// 자유 텍스트를 한글 표기로 변환
    ///
    /// # Examples
    /// ```
    /// use pinyin_ko::Transliterator;
    ///
    /// let engine = Transliterator::bundled();
    /// assert_eq!(engine.free_text_to_korean("Nǐ hǎo!"), "니 하오");
    /// ```
    pub fn free_text_to_korean(&self, text: &str) -> String {
        render_free_text(text, self.dict, self.max_syllable_len)
    }

    /// 분리된 음절 배열을 한글 표기로 변환
    pub fn syllables_to_korean<S: AsRef<str>>(&self, syllables: &[S]) -> String {
        pinyin_array_to_korean(syllables, self.dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dict() -> PinyinDictionary {
        PinyinDictionary::from_pairs([
            ("ni", "니"),
            ("hao", "하오"),
            ("zhuan", "좐"),
            ("zhuang", "좡"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_bound() {
        let dict = sample_dict();
        let engine = Transliterator::new(&dict);
        assert_eq!(engine.max_syllable_len(), DEFAULT_MAX_SYLLABLE_LEN);
        assert_eq!(engine.split("zhuang"), vec!["zhuang"]);
        assert_eq!(engine.free_text_to_korean("Zhuàng"), "좡");
    }

    #[test]
    fn test_custom_bound() {
        let dict = sample_dict();
        let engine = Transliterator::new(&dict).with_max_syllable_len(5);
        assert_eq!(engine.split("zhuang"), vec!["zhuan", "g"]);
        assert_eq!(engine.free_text_to_korean("zhuang"), "좐 g");
    }

    #[test]
    fn test_bound_clamped() {
        let dict = sample_dict();
        let engine = Transliterator::new(&dict).with_max_syllable_len(0);
        assert_eq!(engine.max_syllable_len(), 1);
    }

    #[test]
    fn test_segment_words() {
        let dict = sample_dict();
        let engine = Transliterator::new(&dict);
        assert_eq!(
            engine.segment_words("Nǐhǎo zhuàng!"),
            vec![vec!["ni", "hao"], vec!["zhuang"]]
        );
        assert!(engine.segment_words("  ").is_empty());
    }

    #[test]
    fn test_syllables_to_korean() {
        let dict = sample_dict();
        let engine = Transliterator::new(&dict);
        assert_eq!(engine.syllables_to_korean(&["ni", "foo"]), "니 foo");
    }

    #[test]
    fn test_shared_across_threads() {
        let engine = Transliterator::bundled();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || engine.free_text_to_korean("nǐ hǎo")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "니 하오");
        }
    }
}
