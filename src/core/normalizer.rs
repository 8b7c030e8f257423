//! 병음 정규화
//!
//! 성조 부호 제거, `ü` 표기 통일(`u:`, `v`), 알파벳 이외 문자 제거.

use crate::core::tone::lookup_tone_mark;

/// 정규화 결과에 남을 수 있는 문자인지 확인 (`a`~`z`, `ü`)
pub fn is_pinyin_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ü'
}

/// 임의의 텍스트를 성조 없는 소문자 병음 알파벳으로 정규화
///
/// 1. 소문자화
/// 2. 성조 부호 모음 -> 기본 모음
/// 3. `u:` -> `ü`
/// 4. 남은 `v` -> `ü`
/// 5. `[a-zü]` 이외 문자 제거
///
/// 결과는 `[a-zü]`만 포함하며, 두 번 적용해도 같은 결과가 나온다.
pub fn normalize_pinyin(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .map(|c| match lookup_tone_mark(c) {
            Some((base, _)) => base,
            None => c,
        })
        .collect();

    stripped
        .replace("u:", "ü")
        .replace('v', "ü")
        .chars()
        .filter(|&c| is_pinyin_letter(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tone_marks() {
        assert_eq!(normalize_pinyin("māma"), "mama");
        assert_eq!(normalize_pinyin("lǜsè"), "lüse");
        assert_eq!(normalize_pinyin("Zhōngguó"), "zhongguo");
    }

    #[test]
    fn test_umlaut_spellings() {
        assert_eq!(normalize_pinyin("lu:"), "lü");
        assert_eq!(normalize_pinyin("LU:"), "lü");
        assert_eq!(normalize_pinyin("nv"), "nü");
        assert_eq!(normalize_pinyin("nü"), "nü");
    }

    #[test]
    fn test_uppercase_tone_mark() {
        assert_eq!(normalize_pinyin("Ǎ"), "a");
        assert_eq!(normalize_pinyin("LǛ"), "lü");
    }

    #[test]
    fn test_filter_non_pinyin() {
        assert_eq!(normalize_pinyin("nǐ hǎo!"), "nihao");
        assert_eq!(normalize_pinyin("ni3hao3"), "nihao");
        assert_eq!(normalize_pinyin("你好"), "");
        assert_eq!(normalize_pinyin("xi'an"), "xian");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_pinyin(""), "");
        assert_eq!(normalize_pinyin("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "māma",
            "Lu:shi V",
            "lǜsè",
            "NǏ HǍO, 你好!",
            "ǖǘǚǜ vv u:u:",
            "Çà va? İstanbul",
            "",
        ] {
            let once = normalize_pinyin(s);
            assert_eq!(normalize_pinyin(&once), once, "input: {:?}", s);
            assert!(once.chars().all(is_pinyin_letter));
        }
    }
}
