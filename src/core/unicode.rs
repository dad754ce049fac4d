//! 유니코드 한글 조합/분해 유틸리티
//!
//! 완성형 음절(U+AC00~U+D7A3), 호환용 자모(U+3131~), 첫가끝 조합형 자모(U+1100~)
//! 사이의 인덱스 변환을 담당합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 조합형 초성 시작 (ᄀ)
const CONJOINING_CHOSEONG_BASE: u32 = 0x1100;
/// 조합형 중성 시작 (ᅡ)
const CONJOINING_JUNGSEONG_BASE: u32 = 0x1161;
/// 조합형 종성 시작 직전 (ᆨ = 0x11A8 이 종성 인덱스 1)
const CONJOINING_JONGSEONG_BASE: u32 = 0x11A7;

/// 호환용 자모: 초성 인덱스 순서
#[rustfmt::skip]
const CHOSEONG_COMPAT: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 호환용 자모: 종성 인덱스 순서 (0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_COMPAT: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 호환용 모음 자모 시작 (ㅏ). ㅏ~ㅣ는 중성 인덱스 순서와 같다.
const JUNGSEONG_COMPAT_BASE: u32 = 0x314F;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    // 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    // ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    // ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 다음 글자의 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ + ㅅ
        5 => Some((4, 12)),  // ㄵ -> ㄴ + ㅈ
        6 => Some((4, 18)),  // ㄶ -> ㄴ + ㅎ
        9 => Some((8, 0)),   // ㄺ -> ㄹ + ㄱ
        10 => Some((8, 6)),  // ㄻ -> ㄹ + ㅁ
        11 => Some((8, 7)),  // ㄼ -> ㄹ + ㅂ
        12 => Some((8, 9)),  // ㄽ -> ㄹ + ㅅ
        13 => Some((8, 16)), // ㄾ -> ㄹ + ㅌ
        14 => Some((8, 17)), // ㄿ -> ㄹ + ㅍ
        15 => Some((8, 18)), // ㅀ -> ㄹ + ㅎ
        18 => Some((17, 9)), // ㅄ -> ㅂ + ㅅ
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스를 종성 인덱스로 변환
/// ㄸ, ㅃ, ㅉ은 받침이 될 수 없으므로 None
pub fn choseong_to_jongseong(cho: u32) -> Option<u32> {
    match cho {
        0 => Some(1),   // ㄱ
        1 => Some(2),   // ㄲ
        2 => Some(4),   // ㄴ
        3 => Some(7),   // ㄷ
        5 => Some(8),   // ㄹ
        6 => Some(16),  // ㅁ
        7 => Some(17),  // ㅂ
        9 => Some(19),  // ㅅ
        10 => Some(20), // ㅆ
        11 => Some(21), // ㅇ
        12 => Some(22), // ㅈ
        14 => Some(23), // ㅊ
        15 => Some(24), // ㅋ
        16 => Some(25), // ㅌ
        17 => Some(26), // ㅍ
        18 => Some(27), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스 -> 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_COMPAT.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 모음 자모 문자
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(JUNGSEONG_COMPAT_BASE + jung)
    } else {
        None
    }
}

/// 종성 인덱스 -> 호환용 자모 문자 (복합 종성 포함)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG_COMPAT.get(jong as usize).copied().flatten()
}

/// 호환용 자모 문자 -> 초성 인덱스
pub fn compat_to_choseong(c: char) -> Option<u32> {
    CHOSEONG_COMPAT.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자모 문자 -> 종성 인덱스
pub fn compat_to_jongseong(c: char) -> Option<u32> {
    JONGSEONG_COMPAT
        .iter()
        .position(|&j| j == Some(c))
        .map(|i| i as u32)
}

/// 호환용 모음 자모 문자 -> 중성 인덱스
pub fn compat_to_jungseong(c: char) -> Option<u32> {
    let cp = c as u32;
    if (JUNGSEONG_COMPAT_BASE..JUNGSEONG_COMPAT_BASE + JUNGSEONG_COUNT).contains(&cp) {
        Some(cp - JUNGSEONG_COMPAT_BASE)
    } else {
        None
    }
}

/// 조합형 초성 (U+1100~U+1112) -> 초성 인덱스
pub fn conjoining_to_choseong(c: char) -> Option<u32> {
    let cp = c as u32;
    if (CONJOINING_CHOSEONG_BASE..CONJOINING_CHOSEONG_BASE + CHOSEONG_COUNT).contains(&cp) {
        Some(cp - CONJOINING_CHOSEONG_BASE)
    } else {
        None
    }
}

/// 조합형 중성 (U+1161~U+1175) -> 중성 인덱스
pub fn conjoining_to_jungseong(c: char) -> Option<u32> {
    let cp = c as u32;
    if (CONJOINING_JUNGSEONG_BASE..CONJOINING_JUNGSEONG_BASE + JUNGSEONG_COUNT).contains(&cp) {
        Some(cp - CONJOINING_JUNGSEONG_BASE)
    } else {
        None
    }
}

/// 조합형 종성 (U+11A8~U+11C2) -> 종성 인덱스
pub fn conjoining_to_jongseong(c: char) -> Option<u32> {
    let cp = c as u32;
    if (CONJOINING_JONGSEONG_BASE + 1..CONJOINING_JONGSEONG_BASE + JONGSEONG_COUNT).contains(&cp) {
        Some(cp - CONJOINING_JONGSEONG_BASE)
    } else {
        None
    }
}

/// NFKC가 옛한글 초성으로 접는 겹받침 (ㄶ ㅀ ㅄ) -> 종성 인덱스
///
/// 호환용 ㅀ(U+3140), ㅄ(U+3144)과 반각 자모는 NFKC에서 종성이 아닌
/// 옛한글 초성 ᄚ(U+111A), ᄡ(U+1121)로 바뀐다. ᅜ(U+115C)도 같은 겹자음이다.
pub fn folded_compound_to_jongseong(c: char) -> Option<u32> {
    match c {
        '\u{115C}' => Some(6),
        '\u{111A}' => Some(15),
        '\u{1121}' => Some(18),
        _ => None,
    }
}
