//! 텍스트 정규화 파이프라인
//!
//! 1. 정규 합성(NFC) 후 호환 정규화 (문자 단위 NFKC)
//! 2. 리트 치환
//! 3. 잡음 문자 제거
//! 4. 자모 분해 후 음절 재조합
//! 5. 강조 문자 반복 축약
//!
//! 1~3단계는 [`clean`]으로 따로 노출되며, 낱자모 검출기는 재조합 전의 이
//! 결과를 사용한다.

mod tables;

use std::fmt;
use std::iter;
use std::ops::Deref;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::core::unicode::decompose_syllable;
use crate::core::{HangulFsm, Jamo};

pub use tables::{is_emphasis, is_noise, substitute_leet};

/// 정규화가 끝난 텍스트
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 전체 정규화 (1~5단계)
///
/// # Examples
/// ```
/// use hangul_guard::normalize::normalize;
///
/// assert_eq!(normalize("시....발!!!").as_str(), "시발");
/// assert_eq!(normalize("ㅅ ㅣ ㅂ ㅏ ㄹ").as_str(), "시발");
/// assert_eq!(normalize("ㅋㅋㅋㅋㅋ").as_str(), "ㅋㅋ");
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    let cleaned = clean(text);
    let recomposed = recompose(&cleaned);
    let collapsed = collapse_repeats(&recomposed);
    log::trace!("normalize: {:?} -> {:?}", text, collapsed);
    NormalizedText(collapsed)
}

/// 1~3단계: 호환 정규화, 리트 치환, 잡음 제거
///
/// 먼저 전체에 NFC를 적용해 분해형(NFD) 음절을 합친다. NFC는 호환용 자모를
/// 건드리지 않는다. 호환 정규화는 문자마다 따로 적용하므로 낱자모끼리 음절로
/// 합쳐지지 않는다.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfc() {
        for folded in iter::once(c).nfkc() {
            let substituted = substitute_leet(folded);
            if !is_noise(substituted) {
                out.push(substituted);
            }
        }
    }
    out
}

/// 4단계: 음절과 자모를 낱자모로 분해한 뒤 다시 조합
///
/// 조합할 수 없는 자모는 호환용 자모로 남고, 자모가 아닌 문자는 그대로 통과한다.
pub fn recompose(text: &str) -> String {
    let mut fsm = HangulFsm::with_capacity(text.len());
    for c in text.chars() {
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            fsm.feed(Jamo::from_choseong(cho));
            fsm.feed(Jamo::Vowel { jung_index: jung });
            if jong != 0 {
                fsm.feed(Jamo::from_jongseong(jong));
            }
        } else if let Some(jamo) = Jamo::from_char(c) {
            fsm.feed(jamo);
        } else {
            fsm.feed_passthrough(c);
        }
    }
    fsm.finish()
}

/// 5단계: 강조 문자가 3번 이상 연속되면 2번으로 줄인다
pub fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run > 2 && is_emphasis(c) {
            continue;
        }
        out.push(c);
    }
    out
}
