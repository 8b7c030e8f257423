//! 병음 성조 부호 테이블 및 성조 판별

use std::fmt;

/// 성조 (0 = 경성/성조 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// 경성 (성조 부호 없음)
    Neutral,
    /// 1성 (ā)
    First,
    /// 2성 (á)
    Second,
    /// 3성 (ǎ)
    Third,
    /// 4성 (à)
    Fourth,
}

impl Tone {
    /// 성조 번호로부터 생성 (0~4 이외는 None)
    pub fn from_number(n: u8) -> Option<Tone> {
        match n {
            0 => Some(Tone::Neutral),
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            4 => Some(Tone::Fourth),
            _ => None,
        }
    }

    /// 성조 번호 (0~4)
    pub fn number(&self) -> u8 {
        match self {
            Tone::Neutral => 0,
            Tone::First => 1,
            Tone::Second => 2,
            Tone::Third => 3,
            Tone::Fourth => 4,
        }
    }

    /// 화면 표시용 라벨 (예: "3성")
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Neutral => "경성",
            Tone::First => "1성",
            Tone::Second => "2성",
            Tone::Third => "3성",
            Tone::Fourth => "4성",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 성조 부호가 붙은 모음 -> (기본 모음, 성조)
#[rustfmt::skip]
const TONE_MARKS: [(char, char, Tone); 24] = [
    ('ā', 'a', Tone::First), ('á', 'a', Tone::Second), ('ǎ', 'a', Tone::Third), ('à', 'a', Tone::Fourth),
    ('ē', 'e', Tone::First), ('é', 'e', Tone::Second), ('ě', 'e', Tone::Third), ('è', 'e', Tone::Fourth),
    ('ī', 'i', Tone::First), ('í', 'i', Tone::Second), ('ǐ', 'i', Tone::Third), ('ì', 'i', Tone::Fourth),
    ('ō', 'o', Tone::First), ('ó', 'o', Tone::Second), ('ǒ', 'o', Tone::Third), ('ò', 'o', Tone::Fourth),
    ('ū', 'u', Tone::First), ('ú', 'u', Tone::Second), ('ǔ', 'u', Tone::Third), ('ù', 'u', Tone::Fourth),
    ('ǖ', 'ü', Tone::First), ('ǘ', 'ü', Tone::Second), ('ǚ', 'ü', Tone::Third), ('ǜ', 'ü', Tone::Fourth),
];

/// 성조 부호 모음을 (기본 모음, 성조)로 변환
/// 테이블에 없는 문자는 None 반환
pub fn lookup_tone_mark(c: char) -> Option<(char, Tone)> {
    TONE_MARKS
        .iter()
        .find(|(marked, _, _)| *marked == c)
        .map(|&(_, base, tone)| (base, tone))
}

/// 성조 부호가 붙은 모음인지 확인
pub fn is_tone_mark(c: char) -> bool {
    lookup_tone_mark(c).is_some()
}

/// 성조 판별 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneInfo {
    /// 성조 부호를 제거한 음절
    pub base: String,
    /// 성조
    pub tone: Tone,
}

/// 음절에서 첫 번째 성조 부호를 찾아 성조를 판별
///
/// 부호가 여러 개인 경우 첫 번째만 반영하고 나머지는 그대로 둔다.
/// 부호가 없으면 입력 그대로와 `Tone::Neutral`을 반환한다.
pub fn detect_tone(syllable: &str) -> ToneInfo {
    let mut base = String::with_capacity(syllable.len());
    let mut tone = None;

    for c in syllable.chars() {
        if tone.is_none() {
            if let Some((plain, t)) = lookup_tone_mark(c) {
                base.push(plain);
                tone = Some(t);
                continue;
            }
        }
        base.push(c);
    }

    ToneInfo {
        base,
        tone: tone.unwrap_or(Tone::Neutral),
    }
}

/// 공백으로 구분된 각 음절의 성조 판별 (UI 라벨용)
pub fn annotate_tones(text: &str) -> Vec<ToneInfo> {
    text.split_whitespace().map(detect_tone).collect()
}
