//! 낱자모 검출
//!
//! 자음/모음만 입력해 금칙어 필터를 우회하는 경우를 잡습니다.
//! 두 검사 모두 재조합 전 문자열([`clean`] 결과)을 본다.

use crate::core::unicode::is_syllable;
use crate::core::JamoKind;
use crate::normalize::clean;

/// 연속 낱자모 검사의 기본 최소 길이
pub const DEFAULT_MIN_JAMO_RUN: usize = 2;

/// 입력 전체가 자음만, 또는 모음만으로 이루어졌는지 검사
///
/// - 완성형 음절이 하나라도 있으면 false
/// - 자모가 아닌 문자(영문, 숫자 등)가 있으면 false
/// - 자음과 모음이 섞여 있으면 false (연속 낱자모 검사가 담당)
///
/// # Examples
/// ```
/// use hangul_guard::detection::is_bare_jamo;
///
/// assert!(is_bare_jamo("ㅅㅂ"));
/// assert!(is_bare_jamo("ㅠ ㅠ"));
/// assert!(!is_bare_jamo("안녕 ㅅㅂ"));
/// ```
pub fn is_bare_jamo(text: &str) -> bool {
    is_bare_jamo_cleaned(&clean(text))
}

/// 입력 안에 `min_run`개 이상 연속된 낱자모가 있는지 검사
///
/// 자모가 아닌 문자(완성형 음절 포함)를 만나면 카운터를 0으로 되돌린다.
/// `min_run`이 0이면 1로 취급한다.
pub fn has_bare_jamo_run(text: &str, min_run: usize) -> bool {
    has_bare_jamo_run_cleaned(&clean(text), min_run)
}

/// [`is_bare_jamo`]와 같지만 이미 정리된 문자열을 받는다
pub(crate) fn is_bare_jamo_cleaned(cleaned: &str) -> bool {
    let mut consonants = 0usize;
    let mut vowels = 0usize;

    for ch in cleaned.chars() {
        if is_syllable(ch) {
            return false;
        }
        match JamoKind::of(ch) {
            JamoKind::Consonant => consonants += 1,
            JamoKind::Vowel => vowels += 1,
            JamoKind::NotJamo => return false,
        }
    }

    (consonants > 0) != (vowels > 0)
}

/// [`has_bare_jamo_run`]과 같지만 이미 정리된 문자열을 받는다
pub(crate) fn has_bare_jamo_run_cleaned(cleaned: &str, min_run: usize) -> bool {
    let min_run = min_run.max(1);
    let mut run = 0usize;

    for ch in cleaned.chars() {
        if JamoKind::of(ch).is_jamo() {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonants_only() {
        assert!(is_bare_jamo("ㄱ"));
        assert!(is_bare_jamo("ㅅㅂ"));
        assert!(is_bare_jamo("ㅋㅋㅋㅋ"));
        assert!(is_bare_jamo("ㅂ ㅅ"));
        assert!(is_bare_jamo("ㄳㄵ"));
    }

    #[test]
    fn test_vowels_only() {
        assert!(is_bare_jamo("ㅏ"));
        assert!(is_bare_jamo("ㅠㅠ"));
        assert!(is_bare_jamo("ㅗ.ㅗ"));
    }

    #[test]
    fn test_other_jamo_forms() {
        // 조합형 초성, 반각 자모
        assert!(is_bare_jamo("\u{1109}\u{1107}"));
        assert!(is_bare_jamo("\u{FFA1}\u{FFA4}"));
    }

    #[test]
    fn test_mixed_consonant_vowel_not_flagged() {
        assert!(!is_bare_jamo("ㄱㅏ"));
        assert!(!is_bare_jamo("ㅅㅣㅂㅏㄹ"));
    }

    #[test]
    fn test_syllable_disqualifies() {
        assert!(!is_bare_jamo("안녕ㅎ"));
        assert!(!is_bare_jamo("ㅋㅋ웃겨"));
    }

    #[test]
    fn test_non_jamo_disqualifies() {
        assert!(!is_bare_jamo("ㅋㅋlol"));
        assert!(!is_bare_jamo("ㅋ2"));
    }

    #[test]
    fn test_empty_is_not_bare_jamo() {
        assert!(!is_bare_jamo(""));
        assert!(!is_bare_jamo("  !!! "));
    }

    #[test]
    fn test_embedded_run() {
        assert!(has_bare_jamo_run("안녕 ㄴㄹ 하세요", 2));
        assert!(has_bare_jamo_run("ㄱㅏ", 2));
        assert!(has_bare_jamo_run("이거 ㅅ ㅂ 뭐야", 2));
    }

    #[test]
    fn test_single_jamo_below_run() {
        assert!(!has_bare_jamo_run("안녕ㅎ", 2));
        assert!(!has_bare_jamo_run("ㅅ발", 2));
        assert!(!has_bare_jamo_run("오늘 산책 다녀왔어요", 2));
    }

    #[test]
    fn test_syllable_resets_run() {
        assert!(!has_bare_jamo_run("ㅅ가ㅂ", 2));
        assert!(!has_bare_jamo_run("ㄴㄹ가ㄴㄹ", 3));
        assert!(has_bare_jamo_run("ㄴㄹㅁ가", 3));
    }

    #[test]
    fn test_min_run_zero_treated_as_one() {
        assert!(has_bare_jamo_run("가ㄱ", 0));
        assert!(!has_bare_jamo_run("가나", 0));
        assert!(!has_bare_jamo_run("", 0));
    }
}
