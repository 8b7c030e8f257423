//! 병음 -> 한글 발음 표기 렌더링
//!
//! 사전에 없는 음절은 실패하지 않고 원래 철자를 그대로 출력한다.

use std::collections::HashSet;

use crate::core::normalizer::normalize_pinyin;
use crate::core::segmenter::{split_pinyin_with_bound, DEFAULT_MAX_SYLLABLE_LEN};
use crate::core::tone::is_tone_mark;
use crate::dictionary::PinyinDictionary;

/// 이미 분리된 음절 배열을 한글 표기로 변환
///
/// 각 음절을 정규화하여 조회하고, 없으면 정규화 전 원문을 사용한다.
pub fn pinyin_array_to_korean<S: AsRef<str>>(syllables: &[S], dict: &PinyinDictionary) -> String {
    let rendered: Vec<&str> = syllables
        .iter()
        .map(|s| {
            let raw = s.as_ref();
            dict.korean(&normalize_pinyin(raw)).unwrap_or(raw)
        })
        .collect();

    collapse_whitespace(&rendered.join(" "))
}

/// 자유 텍스트(성조 부호, 문장부호 포함)를 한글 표기로 변환
///
/// 기본 최대 음절 길이로 분리한다.
pub fn free_text_pinyin_to_korean(text: &str, dict: &PinyinDictionary) -> String {
    render_free_text(text, dict, DEFAULT_MAX_SYLLABLE_LEN)
}

pub(crate) fn render_free_text(text: &str, dict: &PinyinDictionary, max_len: usize) -> String {
    segment_free_text(text, dict.syllables(), max_len)
        .iter()
        .map(|word| {
            word.iter()
                .map(|syllable| dict.korean(syllable).unwrap_or(syllable.as_str()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 자유 텍스트를 단어별 음절 목록으로 분리
///
/// 영문자, 공백, 성조 부호 모음 이외의 문자는 공백으로 바꿔
/// 인접 단어가 붙지 않게 한다. 정규화 후 비어 버린 단어는 버린다.
pub(crate) fn segment_free_text(text: &str, known: &HashSet<String>, max_len: usize) -> Vec<Vec<String>> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() || is_tone_mark(c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(normalize_pinyin)
        .filter(|word| !word.is_empty())
        .map(|word| split_pinyin_with_bound(&word, known, max_len))
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
