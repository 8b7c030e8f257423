//! 병음 음절 분리 (탐욕적 최장 일치)

use std::collections::HashSet;

/// 기본 최대 음절 길이 (zhuang, chuang, shuang = 6글자)
pub const DEFAULT_MAX_SYLLABLE_LEN: usize = 6;

/// 알파벳 병음 문자열을 알려진 음절 단위로 분리
///
/// 기본 최대 음절 길이(`DEFAULT_MAX_SYLLABLE_LEN`)를 사용한다.
pub fn split_pinyin(alpha: &str, known: &HashSet<String>) -> Vec<String> {
    split_pinyin_with_bound(alpha, known, DEFAULT_MAX_SYLLABLE_LEN)
}

/// 최대 음절 길이를 지정하여 분리
///
/// 커서 위치에서 `max_len`글자부터 1글자까지 줄여가며 `known`에 있는
/// 첫 후보를 채택한다. 어떤 길이도 일치하지 않으면 한 글자를 그대로 내보낸다.
/// 역추적은 하지 않는다 (`xian`은 항상 `xian`).
///
/// 길이는 바이트가 아닌 문자 단위이며 (`ü`도 한 글자),
/// 결과를 이어 붙이면 항상 입력과 같다.
pub fn split_pinyin_with_bound(alpha: &str, known: &HashSet<String>, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);

    // 문자 경계 바이트 오프셋 (마지막은 문자열 끝)
    let bounds: Vec<usize> = alpha
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(alpha.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut syllables = Vec::new();
    let mut cursor = 0;

    while cursor < char_count {
        let start = bounds[cursor];
        let longest = max_len.min(char_count - cursor);

        let len = (1..=longest)
            .rev()
            .find(|&len| known.contains(&alpha[start..bounds[cursor + len]]))
            .unwrap_or(1);

        syllables.push(alpha[start..bounds[cursor + len]].to_string());
        cursor += len;
    }

    syllables
}
