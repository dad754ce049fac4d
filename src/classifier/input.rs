//! 입력 정리
//!
//! 어떤 형태의 입력이든 판정 전에 하나의 텍스트로 바꾼다.
//! 입력 없음은 빈 문자열, 잘못된 UTF-8/UTF-16은 U+FFFD로 대체한다.

use std::borrow::Cow;

/// 판정기에 들어오는 원본 입력
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Utf16(&'a [u16]),
    Absent,
}

impl<'a> RawInput<'a> {
    /// 정규 텍스트로 변환 (실패하지 않음)
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            RawInput::Text(text) => Cow::Borrowed(text),
            RawInput::Bytes(bytes) => String::from_utf8_lossy(bytes),
            RawInput::Utf16(units) => Cow::Owned(
                char::decode_utf16(units.iter().copied())
                    .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect(),
            ),
            RawInput::Absent => Cow::Borrowed(""),
        }
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(text: &'a str) -> Self {
        RawInput::Text(text)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(text: &'a String) -> Self {
        RawInput::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(RawInput::Absent, RawInput::Text)
    }
}

impl<'a> From<&'a [u8]> for RawInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RawInput::Bytes(bytes)
    }
}

impl<'a> From<&'a [u16]> for RawInput<'a> {
    fn from(units: &'a [u16]) -> Self {
        RawInput::Utf16(units)
    }
}
