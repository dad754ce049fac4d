//! 정규화 단계에서 쓰는 고정 문자 테이블

/// 리트(leet) 치환: 숫자/기호 -> 비슷하게 생긴 영문자
///
/// 치환 결과 문자는 다시 치환 대상이 아니다 (한 번만 적용).
pub fn substitute_leet(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '7' => 't',
        '@' => 'a',
        '$' => 's',
        _ => c,
    }
}

/// 잡음 문자인지 확인
///
/// 공백, 문장부호, 괄호, 따옴표, 기호, 보이지 않는 서식 문자 등 글자나 숫자가
/// 아닌 모든 문자와 한글 채움 문자가 해당된다.
pub fn is_noise(c: char) -> bool {
    matches!(c, '\u{115F}' | '\u{1160}' | '\u{3164}' | '\u{FFA0}') || !c.is_alphanumeric()
}

/// 반복을 2회로 줄이는 강조 문자 (ㅋㅋㅋ, ㅎㅎㅎ, ㅠㅠㅠ 등)
pub fn is_emphasis(c: char) -> bool {
    matches!(c, 'ㅋ' | 'ㅎ' | 'ㅠ' | 'ㅜ' | 'ㄷ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leet_table() {
        assert_eq!(substitute_leet('0'), 'o');
        assert_eq!(substitute_leet('1'), 'i');
        assert_eq!(substitute_leet('$'), 's');
        assert_eq!(substitute_leet('2'), '2');
        assert_eq!(substitute_leet('가'), '가');
    }

    #[test]
    fn test_leet_is_not_recursive() {
        for c in ['0', '1', '3', '4', '5', '7', '@', '$'] {
            let once = substitute_leet(c);
            assert_eq!(substitute_leet(once), once);
        }
    }

    #[test]
    fn test_noise() {
        for c in [' ', '\t', '.', '!', '?', '(', '"', '「', '♥', '\u{200B}', '\u{3164}'] {
            assert!(is_noise(c), "{:?} 는 잡음이어야 함", c);
        }
        for c in ['가', 'ㄱ', 'a', 'Z', '9', '\u{1100}'] {
            assert!(!is_noise(c), "{:?} 는 잡음이 아니어야 함", c);
        }
    }

    #[test]
    fn test_emphasis() {
        assert!(is_emphasis('ㅋ'));
        assert!(is_emphasis('ㅠ'));
        assert!(!is_emphasis('ㅅ'));
        assert!(!is_emphasis('하'));
    }
}
