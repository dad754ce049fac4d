//! 자모 분류 및 인덱스 매핑
//!
//! 호환용 자모와 첫가끝 조합형 자모를 모두 같은 [`Jamo`] 값으로 매핑합니다.

use crate::core::unicode::{
    choseong_to_jongseong, compat_to_choseong, compat_to_jongseong, compat_to_jungseong,
    conjoining_to_choseong, conjoining_to_jongseong, conjoining_to_jungseong,
    folded_compound_to_jongseong, jongseong_to_choseong,
};

/// 코드포인트 단위 자모 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoKind {
    /// 자음 (초성/종성 블록 포함)
    Consonant,
    /// 모음
    Vowel,
    /// 자모가 아님 (완성형 음절, 채움 문자, 기타 문자)
    NotJamo,
}

impl JamoKind {
    /// 문자 하나를 자음/모음/비자모로 분류
    pub fn of(c: char) -> Self {
        match c as u32 {
            // 채움 문자는 자모가 아님
            0x115F | 0x1160 | 0x3164 | 0xFFA0 => JamoKind::NotJamo,
            // 호환용 자모 (현대 + 옛한글)
            0x3131..=0x314E | 0x3165..=0x3186 => JamoKind::Consonant,
            0x314F..=0x3163 | 0x3187..=0x318E => JamoKind::Vowel,
            // 첫가끝 조합형: 초성 / 중성 / 종성
            0x1100..=0x115E | 0x11A8..=0x11FF => JamoKind::Consonant,
            0x1161..=0x11A7 => JamoKind::Vowel,
            // 확장 A (초성), 확장 B (중성, 종성)
            0xA960..=0xA97C | 0xD7CB..=0xD7FB => JamoKind::Consonant,
            0xD7B0..=0xD7C6 => JamoKind::Vowel,
            // 반각 자모
            0xFFA1..=0xFFBE => JamoKind::Consonant,
            0xFFC2..=0xFFC7 | 0xFFCA..=0xFFCF | 0xFFD2..=0xFFD7 | 0xFFDA..=0xFFDC => {
                JamoKind::Vowel
            }
            _ => JamoKind::NotJamo,
        }
    }

    /// 자음 또는 모음인지 확인
    pub fn is_jamo(self) -> bool {
        !matches!(self, JamoKind::NotJamo)
    }
}

/// 현대 한글 자모 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음
    /// - cho_index: 초성 인덱스 (복합 종성 ㄳ, ㄵ 등은 None)
    /// - jong_index: 종성 인덱스 (ㄸ, ㅃ, ㅉ은 None)
    Consonant {
        cho_index: Option<u32>,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 호환용 자모 또는 조합형 자모 문자를 자모로 변환
    /// 옛한글(NFKC가 만드는 ᄚ ᄡ ᅜ 제외), 완성형 음절, 기타 문자는 None
    pub fn from_char(c: char) -> Option<Jamo> {
        if let Some(cho) = compat_to_choseong(c).or_else(|| conjoining_to_choseong(c)) {
            return Some(Self::from_choseong(cho));
        }
        let jong = compat_to_jongseong(c)
            .or_else(|| conjoining_to_jongseong(c))
            .or_else(|| folded_compound_to_jongseong(c));
        if let Some(jong) = jong {
            return Some(Self::from_jongseong(jong));
        }
        compat_to_jungseong(c)
            .or_else(|| conjoining_to_jungseong(c))
            .map(|jung_index| Jamo::Vowel { jung_index })
    }

    /// 초성 인덱스로 자음 생성
    pub fn from_choseong(cho: u32) -> Jamo {
        Jamo::Consonant {
            cho_index: Some(cho),
            jong_index: choseong_to_jongseong(cho),
        }
    }

    /// 종성 인덱스로 자음 생성
    pub fn from_jongseong(jong: u32) -> Jamo {
        Jamo::Consonant {
            cho_index: jongseong_to_choseong(jong),
            jong_index: Some(jong),
        }
    }

    /// 초성 인덱스 반환 (초성이 될 수 있는 자음인 경우만)
    pub fn choseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Consonant { cho_index, .. } => *cho_index,
            Jamo::Vowel { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_compat() {
        assert_eq!(JamoKind::of('ㄱ'), JamoKind::Consonant);
        assert_eq!(JamoKind::of('ㅎ'), JamoKind::Consonant);
        assert_eq!(JamoKind::of('ㄳ'), JamoKind::Consonant);
        assert_eq!(JamoKind::of('ㅏ'), JamoKind::Vowel);
        assert_eq!(JamoKind::of('ㅣ'), JamoKind::Vowel);
    }

    #[test]
    fn test_kind_conjoining_and_extended() {
        assert_eq!(JamoKind::of('\u{1100}'), JamoKind::Consonant); // ᄀ
        assert_eq!(JamoKind::of('\u{1161}'), JamoKind::Vowel); // ᅡ
        assert_eq!(JamoKind::of('\u{11A8}'), JamoKind::Consonant); // ᆨ
        assert_eq!(JamoKind::of('\u{A960}'), JamoKind::Consonant);
        assert_eq!(JamoKind::of('\u{D7B0}'), JamoKind::Vowel);
        assert_eq!(JamoKind::of('\u{FFA1}'), JamoKind::Consonant); // 반각 ㄱ
    }

    #[test]
    fn test_kind_not_jamo() {
        assert_eq!(JamoKind::of('가'), JamoKind::NotJamo);
        assert_eq!(JamoKind::of('a'), JamoKind::NotJamo);
        assert_eq!(JamoKind::of('1'), JamoKind::NotJamo);
        assert_eq!(JamoKind::of(' '), JamoKind::NotJamo);
        // 채움 문자
        assert_eq!(JamoKind::of('\u{3164}'), JamoKind::NotJamo);
        assert_eq!(JamoKind::of('\u{115F}'), JamoKind::NotJamo);
        assert_eq!(JamoKind::of('\u{1160}'), JamoKind::NotJamo);
        assert!(!JamoKind::of('가').is_jamo());
    }

    #[test]
    fn test_from_char_consonant() {
        assert_eq!(
            Jamo::from_char('ㄱ'),
            Some(Jamo::Consonant {
                cho_index: Some(0),
                jong_index: Some(1)
            })
        );
        // 조합형 초성도 같은 자모
        assert_eq!(Jamo::from_char('\u{1100}'), Jamo::from_char('ㄱ'));
        // 조합형 종성 ᆨ도 같은 자모
        assert_eq!(Jamo::from_char('\u{11A8}'), Jamo::from_char('ㄱ'));
        // 받침 불가 쌍자음
        assert_eq!(
            Jamo::from_char('ㄸ'),
            Some(Jamo::Consonant {
                cho_index: Some(4),
                jong_index: None
            })
        );
        // 초성 불가 복합 종성
        assert_eq!(
            Jamo::from_char('ㄳ'),
            Some(Jamo::Consonant {
                cho_index: None,
                jong_index: Some(3)
            })
        );
    }

    #[test]
    fn test_from_char_vowel() {
        assert_eq!(Jamo::from_char('ㅏ'), Some(Jamo::Vowel { jung_index: 0 }));
        assert_eq!(Jamo::from_char('ㅘ'), Some(Jamo::Vowel { jung_index: 9 }));
        assert_eq!(Jamo::from_char('\u{1175}'), Some(Jamo::Vowel { jung_index: 20 }));
    }

    #[test]
    fn test_from_char_folded_compound_final() {
        // NFKC가 ㅀ, ㅄ을 옛한글 초성으로 바꾼 형태도 겹받침으로 읽는다
        let compound = |jong| {
            Some(Jamo::Consonant {
                cho_index: None,
                jong_index: Some(jong),
            })
        };
        assert_eq!(Jamo::from_char('\u{111A}'), compound(15));
        assert_eq!(Jamo::from_char('\u{1121}'), compound(18));
        assert_eq!(Jamo::from_char('\u{115C}'), compound(6));
        assert_eq!(Jamo::from_char('\u{1121}'), Jamo::from_char('ㅄ'));
    }

    #[test]
    fn test_from_char_unmapped() {
        assert_eq!(Jamo::from_char('가'), None);
        assert_eq!(Jamo::from_char('a'), None);
        assert_eq!(Jamo::from_char('\u{1113}'), None); // 옛한글
    }

    #[test]
    fn test_choseong_index() {
        let consonant = Jamo::from_choseong(9); // ㅅ
        assert_eq!(consonant.choseong_index(), Some(9));

        let vowel = Jamo::Vowel { jung_index: 0 };
        assert_eq!(vowel.choseong_index(), None);
    }
}
