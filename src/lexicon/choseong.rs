//! 초성 추출

use crate::core::unicode::{choseong_to_jamo_char, decompose_syllable};
use crate::core::Jamo;

/// 초성만 남긴 문자열 생성
///
/// - 완성형 음절: 초성을 호환용 자모로 추출
/// - 초성이 될 수 있는 낱자음: 그대로 통과 (조합형이면 호환용으로)
/// - 옛한글 초성(U+1113~U+115E, 확장 A): 그대로 통과
/// - 그 외 (모음, 복합 종성, 영문 등): 버림
///
/// # Examples
/// ```
/// use hangul_guard::lexicon::choseong_projection;
///
/// assert_eq!(choseong_projection("시발"), "ㅅㅂ");
/// assert_eq!(choseong_projection("ㅅ발ㅏ"), "ㅅㅂ");
/// ```
pub fn choseong_projection(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if let Some((cho, _, _)) = decompose_syllable(c) {
            out.extend(choseong_to_jamo_char(cho));
        } else if let Some(jamo) = Jamo::from_char(c) {
            out.extend(jamo.choseong_index().and_then(choseong_to_jamo_char));
        } else if is_archaic_choseong(c) {
            out.push(c);
        }
    }
    out
}

fn is_archaic_choseong(c: char) -> bool {
    matches!(c as u32, 0x1113..=0x115E | 0xA960..=0xA97C)
}
