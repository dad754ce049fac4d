//! hangul-guard - 한국어 욕설/우회 입력 필터 CLI
//!
//! 인자로 받은 텍스트, 또는 인자가 없으면 표준 입력의 각 줄을 판정하여
//! 한 줄에 하나씩 JSON으로 출력한다.

use hangul_guard::config::load_config;
use hangul_guard::{Classification, ProfanityGuard, RawInput};
use serde::Serialize;
use std::io::{self, BufRead, BufWriter, Write};

/// 판정 결과 출력 형식
#[derive(Serialize)]
struct Verdict<'a> {
    text: &'a str,
    #[serde(flatten)]
    classification: Classification,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut analyze = false;
    let mut texts = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--analyze" => analyze = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => texts.push(arg),
        }
    }

    // 설정 로드
    let config = load_config();
    let guard = match ProfanityGuard::with_config(&config) {
        Ok(guard) => guard,
        Err(e) => {
            log::error!("설정의 금칙어 패턴이 잘못되었습니다, 기본 사전 사용: {}", e);
            ProfanityGuard::new()
        }
    };

    if let Err(e) = run(&guard, &texts, analyze) {
        // 파이프가 먼저 닫힌 경우는 정상 종료
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("hangul-guard: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(guard: &ProfanityGuard, texts: &[String], analyze: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !texts.is_empty() {
        for text in texts {
            write_line(&mut out, guard, RawInput::from(text), analyze)?;
        }
    } else {
        let stdin = io::stdin();
        for line in stdin.lock().split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            write_line(&mut out, guard, RawInput::Bytes(&line), analyze)?;
        }
    }

    out.flush()
}

fn write_line<W: Write>(
    out: &mut W,
    guard: &ProfanityGuard,
    input: RawInput<'_>,
    analyze: bool,
) -> io::Result<()> {
    let json = if analyze {
        serde_json::to_string(&guard.analyze(input))
    } else {
        let text = input.into_text();
        serde_json::to_string(&Verdict {
            text: &text,
            classification: guard.classify(&*text),
        })
    }
    .map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

fn print_usage() {
    println!("사용법: hangul-guard [--analyze] [TEXT...]");
    println!();
    println!("  TEXT가 없으면 표준 입력을 한 줄씩 판정합니다.");
    println!("  --analyze   단계별 진단 결과 출력");
    println!();
    println!("설정 파일: ${} 또는 ~/.config/hangul-guard/config.json", hangul_guard::config::CONFIG_ENV);
}
