//! 금칙어 사전 및 매칭
//!
//! 네 개의 패턴 집합을 고정된 순서로 검사합니다.
//! 1. 강한 욕설 (정규화 텍스트)
//! 2. 약한 모욕 (정규화 텍스트)
//! 3. 강한 욕설 초성 약어 (초성 추출 결과)
//! 4. 약한 모욕 초성 약어 (초성 추출 결과)

mod choseong;
pub mod patterns;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use serde::Serialize;

use crate::config::LexiconConfig;
use crate::error::GuardError;

pub use choseong::choseong_projection;

/// 금칙어 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Soft,
    Strict,
}

/// 패턴을 적용한 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTarget {
    /// 정규화된 텍스트
    Literal,
    /// 초성 추출 결과
    Choseong,
}

/// 사전 매칭 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconHit {
    pub severity: Severity,
    pub target: MatchTarget,
    /// 매칭된 패턴 원문
    pub pattern: String,
}

/// 컴파일된 패턴 집합
#[derive(Debug, Clone)]
struct PatternSet {
    /// 빠른 일괄 검사용
    set: RegexSet,
    /// 어떤 패턴이 매칭됐는지 찾기 위한 개별 정규식
    regexes: Vec<Regex>,
}

impl PatternSet {
    fn compile(sources: &[String]) -> Result<Self, GuardError> {
        let mut regexes = Vec::with_capacity(sources.len());
        for source in sources {
            if source.is_empty() {
                return Err(GuardError::InvalidPattern {
                    pattern: source.clone(),
                    reason: "빈 패턴".into(),
                });
            }
            let regex = RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .map_err(|e| invalid_pattern(source, e))?;
            regexes.push(regex);
        }
        let set = RegexSetBuilder::new(sources)
            .case_insensitive(true)
            .build()
            .map_err(|e| invalid_pattern(&sources.join("|"), e))?;
        Ok(Self { set, regexes })
    }

    /// 처음으로 매칭되는 패턴 원문
    fn first_match(&self, text: &str) -> Option<&str> {
        if text.is_empty() || !self.set.is_match(text) {
            return None;
        }
        self.regexes
            .iter()
            .find(|re| re.is_match(text))
            .map(|re| re.as_str())
    }

    fn len(&self) -> usize {
        self.regexes.len()
    }
}

fn invalid_pattern(source: &str, e: regex::Error) -> GuardError {
    GuardError::InvalidPattern {
        pattern: source.to_string(),
        reason: e.to_string(),
    }
}

/// 금칙어 사전 (생성 후 변경 불가)
#[derive(Debug, Clone)]
pub struct Lexicon {
    strict: PatternSet,
    soft: PatternSet,
    strict_choseong: PatternSet,
    soft_choseong: PatternSet,
}

impl Lexicon {
    /// 설정에서 사전 생성
    pub fn from_config(config: &LexiconConfig) -> Result<Self, GuardError> {
        let lexicon = Self {
            strict: PatternSet::compile(&config.strict)?,
            soft: PatternSet::compile(&config.soft)?,
            strict_choseong: PatternSet::compile(&config.strict_choseong)?,
            soft_choseong: PatternSet::compile(&config.soft_choseong)?,
        };
        log::debug!(
            "금칙어 사전 생성: strict={} soft={} strict_choseong={} soft_choseong={}",
            lexicon.strict.len(),
            lexicon.soft.len(),
            lexicon.strict_choseong.len(),
            lexicon.soft_choseong.len()
        );
        Ok(lexicon)
    }

    /// 정규화 텍스트와 초성 추출 결과를 순서대로 검사하여 첫 매칭 반환
    pub fn find(&self, normalized: &str, choseong: &str) -> Option<LexiconHit> {
        let stages = [
            (&self.strict, Severity::Strict, MatchTarget::Literal, normalized),
            (&self.soft, Severity::Soft, MatchTarget::Literal, normalized),
            (&self.strict_choseong, Severity::Strict, MatchTarget::Choseong, choseong),
            (&self.soft_choseong, Severity::Soft, MatchTarget::Choseong, choseong),
        ];

        stages.into_iter().find_map(|(set, severity, target, text)| {
            set.first_match(text).map(|pattern| LexiconHit {
                severity,
                target,
                pattern: pattern.to_string(),
            })
        })
    }
}
