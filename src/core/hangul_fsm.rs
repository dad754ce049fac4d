//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 낱자모 열을 완성형 음절로 다시 조합합니다. 조합할 수 없는 자모는
//! 호환용 자모 문자로 그대로 출력합니다.

use crate::core::jamo::Jamo;
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jongseong_to_jamo_char, jungseong_to_jamo_char, split_jongseong,
};

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성 (한 글자 조합 중)
    ChoseongJungseong,
    /// 초성+중성+종성 (한 글자 조합 중)
    ChoseongJungseongJongseong,
}

/// 한글 조합 FSM
pub struct HangulFsm {
    state: State,
    /// 현재 초성 인덱스
    choseong: u32,
    /// 현재 중성 인덱스
    jungseong: u32,
    /// 현재 종성 인덱스 (0 = 없음)
    jongseong: u32,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 출력 버퍼 크기를 지정하여 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            jungseong: 0,
            jongseong: 0,
            output: String::with_capacity(capacity),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => self.feed_consonant(cho_index, jong_index),
            Jamo::Vowel { jung_index } => self.feed_vowel(jung_index),
        }
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, cho_index: Option<u32>, jong_index: Option<u32>) {
        match self.state {
            State::Empty | State::Choseong => {
                // 기존 초성은 단독 자모로 출력
                self.flush_current();
                self.start_syllable(cho_index, jong_index);
            }
            State::ChoseongJungseong => {
                if let Some(jong) = jong_index {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                } else {
                    // 받침 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.flush_current();
                    self.start_syllable(cho_index, jong_index);
                }
            }
            State::ChoseongJungseongJongseong => {
                let combined = jong_index.and_then(|jong| combine_jongseong(self.jongseong, jong));
                if let Some(combined) = combined {
                    self.jongseong = combined;
                } else {
                    self.flush_current();
                    self.start_syllable(cho_index, jong_index);
                }
            }
        }
    }

    /// 새 글자를 초성으로 시작. 초성이 될 수 없는 복합 종성은 그대로 출력
    fn start_syllable(&mut self, cho_index: Option<u32>, jong_index: Option<u32>) {
        match cho_index {
            Some(cho) => {
                self.choseong = cho;
                self.state = State::Choseong;
            }
            None => {
                if let Some(c) = jong_index.and_then(jongseong_to_jamo_char) {
                    self.output.push(c);
                }
            }
        }
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, jung_index: u32) {
        match self.state {
            State::Empty => {
                // 모음만 단독 출력
                self.push_vowel(jung_index);
            }
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
            State::ChoseongJungseong => {
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                } else {
                    self.flush_current();
                    self.push_vowel(jung_index);
                }
            }
            State::ChoseongJungseongJongseong => {
                // 종성을 다음 초성으로 분리
                // 복합 종성이면 마지막 자음만, 단일 종성이면 전체를 넘긴다
                let split = split_jongseong(self.jongseong).or_else(|| {
                    jongseong_to_choseong(self.jongseong).map(|next_cho| (0, next_cho))
                });
                match split {
                    Some((remaining_jong, next_cho)) => {
                        self.jongseong = remaining_jong;
                        self.flush_current();
                        self.choseong = next_cho;
                        self.jungseong = jung_index;
                        self.state = State::ChoseongJungseong;
                    }
                    None => {
                        // 변환 불가 (이론상 발생하지 않음)
                        self.flush_current();
                        self.push_vowel(jung_index);
                    }
                }
            }
        }
    }

    fn push_vowel(&mut self, jung_index: u32) {
        if let Some(c) = jungseong_to_jamo_char(jung_index) {
            self.output.push(c);
        }
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self) {
        let pending = match self.state {
            State::Empty => None,
            State::Choseong => choseong_to_jamo_char(self.choseong),
            State::ChoseongJungseong => compose_syllable(self.choseong, self.jungseong, 0),
            State::ChoseongJungseongJongseong => {
                compose_syllable(self.choseong, self.jungseong, self.jongseong)
            }
        };
        if let Some(c) = pending {
            self.output.push(c);
        }
        self.reset_state();
    }

    /// 상태 초기화
    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.choseong = 0;
        self.jungseong = 0;
        self.jongseong = 0;
    }

    /// 자모가 아닌 문자 처리 (영문, 숫자, 옛한글 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}
