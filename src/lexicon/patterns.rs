//! 기본 금칙어 패턴 데이터
//!
//! 알고리즘이 아닌 설정 데이터이며 [`LexiconConfig`](crate::config::LexiconConfig)로
//! 교체할 수 있다. 패턴은 정규화된 텍스트(공백/기호 제거, 음절 재조합 후)에
//! 대소문자 구분 없이 적용된다.

/// 강한 욕설 (차단)
pub const STRICT_PATTERNS: &[&str] = &[
    "씨발",
    "시발",
    "좆",
    "병신",
    "븅신",
    "개새끼",
    "개색기",
    "조카튼",
    "엿",
    // 낱자모가 섞인 변형
    "[씨시][ㅂ빨벌]",
    "[ㅅㅆ][발빨벌]",
    "개[새색섀][끼기ㄲ]",
    "[병븅][ㅅ싄]",
    "fuck",
    "shit",
    "bitch",
];

/// 약한 모욕/공격적 표현 (경고)
pub const SOFT_PATTERNS: &[&str] = &[
    "꺼져",
    "닥쳐",
    "미친",
    "지랄",
    "멍청",
    "바보",
    "존나",
    "졸라",
    "찐따",
    "idiot",
    "stupid",
    "shutup",
];

/// 강한 욕설의 초성 약어
///
/// 초성 추출 결과 전체와 일치해야 한다. 부분 일치로 두면
/// "세브란스"(ㅅㅂㄹ), "쌀밥"(ㅆㅂ) 같은 평범한 문장이 걸린다.
pub const STRICT_CHOSEONG_PATTERNS: &[&str] = &["^ㅆㅂㄴ?$", "^ㅅㅂㄹ[ㅁㄴ]?$", "^ㄱㅅㄲ$", "^ㅂㅅㄱㅌ$"];

/// 약한 모욕의 초성 약어 (추출 결과 전체 일치)
pub const SOFT_CHOSEONG_PATTERNS: &[&str] = &["^ㅁㅊㄴ$", "^ㄲㅈㄹ$", "^ㄷㅊㄹ$", "^ㅈㄹㅎㄴ$"];

/// `&[&str]` 패턴 목록을 설정용 `Vec<String>`으로 변환
pub(crate) fn to_owned_patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_all_default_patterns_compile() {
        for set in [
            STRICT_PATTERNS,
            SOFT_PATTERNS,
            STRICT_CHOSEONG_PATTERNS,
            SOFT_CHOSEONG_PATTERNS,
        ] {
            for pattern in set {
                assert!(Regex::new(pattern).is_ok(), "패턴 컴파일 실패: {}", pattern);
            }
        }
    }

    #[test]
    fn test_choseong_patterns_match_whole_projection() {
        let any_match = |patterns: &[&str], text: &str| {
            patterns.iter().any(|p| Regex::new(p).unwrap().is_match(text))
        };
        assert!(any_match(STRICT_CHOSEONG_PATTERNS, "ㅆㅂ"));
        assert!(any_match(STRICT_CHOSEONG_PATTERNS, "ㅆㅂㄴ"));
        assert!(any_match(STRICT_CHOSEONG_PATTERNS, "ㅅㅂㄹㅁ"));
        assert!(any_match(SOFT_CHOSEONG_PATTERNS, "ㅁㅊㄴ"));
        // 평범한 문장의 초성
        assert!(!any_match(STRICT_CHOSEONG_PATTERNS, "ㅅㅂㄹㅅㅂㅇㅇㄷㄴㅇㅇㅇ"));
        assert!(!any_match(STRICT_CHOSEONG_PATTERNS, "ㄱㅅㄲㅇㄴㅇㅇㄷ"));
        assert!(!any_match(STRICT_CHOSEONG_PATTERNS, "ㅆㅂㅁㅇㅇㅇ"));
        assert!(!any_match(SOFT_CHOSEONG_PATTERNS, "ㅇㅁㅊㄴㄱ"));
    }

    #[test]
    fn test_original_deny_list_present() {
        for word in ["씨발", "시발", "좆", "병신", "븅신", "개새끼", "개색기", "조카튼", "엿"] {
            assert!(STRICT_PATTERNS.contains(&word));
        }
    }
}
