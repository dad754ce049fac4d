//! 욕설 판정기
//!
//! 다음 순서로 검사하며 처음 걸리는 조건이 결과를 결정한다:
//! 1. 입력 전체가 낱자모 → strict
//! 2. 연속 낱자모 포함 → strict
//! 3. 정규화 텍스트에 강한 욕설 → strict
//! 4. 정규화 텍스트에 약한 모욕 → soft
//! 5. 초성에 강한 욕설 약어 → strict
//! 6. 초성에 약한 모욕 약어 → soft
//! 7. 그 외 → none

use lazy_static::lazy_static;

use crate::config::{GuardConfig, LexiconConfig};
use crate::detection::{has_bare_jamo_run_cleaned, is_bare_jamo_cleaned, DEFAULT_MIN_JAMO_RUN};
use crate::error::GuardError;
use crate::lexicon::{choseong_projection, Lexicon};
use crate::normalize::{clean, normalize};

use super::input::RawInput;
use super::result::{Analysis, Classification, BARE_JAMO_ONLY, EMBEDDED_JAMO_RUN};

lazy_static! {
    /// 기본 패턴으로 컴파일한 사전 (프로세스 전체에서 공유, 읽기 전용)
    static ref DEFAULT_LEXICON: Lexicon = Lexicon::from_config(&LexiconConfig::default())
        .expect("built-in lexicon patterns must compile");
}

/// 한국어 욕설 판정기
///
/// 생성 후에는 변경되지 않으므로 여러 스레드에서 잠금 없이 공유할 수 있다.
#[derive(Debug, Clone)]
pub struct ProfanityGuard {
    lexicon: Lexicon,
    min_jamo_run: usize,
}

impl Default for ProfanityGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityGuard {
    /// 기본 사전과 기본 연속 낱자모 길이로 생성
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON.clone(),
            min_jamo_run: DEFAULT_MIN_JAMO_RUN,
        }
    }

    /// 설정으로 생성 (패턴이 잘못되면 에러)
    pub fn with_config(config: &GuardConfig) -> Result<Self, GuardError> {
        Ok(Self {
            lexicon: Lexicon::from_config(&config.lexicon)?,
            min_jamo_run: config.min_jamo_run,
        })
    }

    /// 미리 만든 사전으로 생성
    pub fn with_lexicon(lexicon: Lexicon, min_jamo_run: usize) -> Self {
        Self {
            lexicon,
            min_jamo_run,
        }
    }

    /// 연속 낱자모 최소 길이
    pub fn min_jamo_run(&self) -> usize {
        self.min_jamo_run
    }

    /// 입력을 판정한다. 어떤 입력이든 결과를 반환한다.
    ///
    /// # Examples
    /// ```
    /// use hangul_guard::{Level, ProfanityGuard};
    ///
    /// let guard = ProfanityGuard::new();
    /// assert_eq!(guard.classify("ㅅㅂ").level, Level::Strict);
    /// assert_eq!(guard.classify("시....발!!!").level, Level::Strict);
    /// assert_eq!(guard.classify("꺼져").level, Level::Soft);
    /// assert_eq!(guard.classify("오늘 산책 다녀왔어요").level, Level::None);
    /// assert_eq!(guard.classify(None::<&str>).level, Level::None);
    /// ```
    pub fn classify<'a>(&self, input: impl Into<RawInput<'a>>) -> Classification {
        let text = input.into().into_text();
        self.classify_text(&text)
    }

    fn classify_text(&self, text: &str) -> Classification {
        let cleaned = clean(text);

        // 1단계: 입력 전체가 낱자모
        if is_bare_jamo_cleaned(&cleaned) {
            log::debug!("낱자모만 입력됨: {:?}", text);
            return Classification::strict(BARE_JAMO_ONLY);
        }

        // 2단계: 문장 안 연속 낱자모
        if has_bare_jamo_run_cleaned(&cleaned, self.min_jamo_run) {
            log::debug!("연속 낱자모 포함 (최소 {}): {:?}", self.min_jamo_run, text);
            return Classification::strict(EMBEDDED_JAMO_RUN);
        }

        // 3~6단계: 사전 매칭
        let normalized = normalize(text);
        let choseong = choseong_projection(&normalized);
        log::trace!("정규화 {:?}, 초성 {:?}", normalized.as_str(), choseong);

        match self.lexicon.find(&normalized, &choseong) {
            Some(hit) => {
                log::debug!(
                    "금칙어 매칭: {:?} {:?} 패턴 '{}'",
                    hit.severity,
                    hit.target,
                    hit.pattern
                );
                hit.into()
            }
            None => Classification::none(),
        }
    }

    /// 모든 단계를 끝까지 계산한 진단 결과
    ///
    /// `classification`은 [`classify`](Self::classify)와 같은 결과다.
    pub fn analyze<'a>(&self, input: impl Into<RawInput<'a>>) -> Analysis {
        let text = input.into().into_text();
        let cleaned = clean(&text);
        let normalized = normalize(&text);
        let choseong = choseong_projection(&normalized);

        Analysis {
            bare_jamo_only: is_bare_jamo_cleaned(&cleaned),
            embedded_jamo_run: has_bare_jamo_run_cleaned(&cleaned, self.min_jamo_run),
            lexicon_hit: self.lexicon.find(&normalized, &choseong),
            classification: self.classify_text(&text),
            original: text.into_owned(),
            cleaned,
            normalized,
            choseong,
        }
    }
}

lazy_static! {
    static ref DEFAULT_GUARD: ProfanityGuard = ProfanityGuard::new();
}

/// 기본 판정기로 입력을 판정
///
/// # Examples
/// ```
/// use hangul_guard::{check_profanity, Level};
///
/// assert_eq!(check_profanity("안녕 ㄴㄹ 하세요").level, Level::Strict);
/// assert!(check_profanity("").evidence.is_empty());
/// ```
pub fn check_profanity<'a>(input: impl Into<RawInput<'a>>) -> Classification {
    DEFAULT_GUARD.classify(input)
}
