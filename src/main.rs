//! pinyin-ko - 병음 → 한글 발음 표기 변환 CLI

use pinyin_ko::config::{config_path, load_config, save_config, AppConfig};
use pinyin_ko::{annotate_tones, PinyinDictionary, Transliterator};
use std::env;
use std::io::{self, BufRead, Write};
use std::process;

/// 출력 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// 자유 텍스트 변환 (기본)
    FreeText,
    /// 공백으로 구분된 음절 배열 변환
    Syllables,
    /// 성조 표시
    Tones,
}

struct CliArgs {
    dict_path: Option<String>,
    mode: Mode,
    init_config: bool,
    inputs: Vec<String>,
}

fn parse_args() -> CliArgs {
    let mut parsed = CliArgs {
        dict_path: None,
        mode: Mode::FreeText,
        init_config: false,
        inputs: Vec::new(),
    };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--dict" => match args.next() {
                Some(p) => parsed.dict_path = Some(p),
                None => {
                    eprintln!("--dict 뒤에 사전 파일 경로가 필요합니다");
                    process::exit(2);
                }
            },
            "--syllables" => parsed.mode = Mode::Syllables,
            "--tones" => parsed.mode = Mode::Tones,
            "--init-config" => parsed.init_config = true,
            "--help" | "-h" => print_help(),
            _ => parsed.inputs.push(a),
        }
    }
    parsed
}

fn print_help() -> ! {
    println!("사용법: pinyin-ko [--dict <path>] [--syllables | --tones] [TEXT...]");
    println!("        pinyin-ko --init-config");
    println!();
    println!("TEXT가 없으면 표준 입력을 한 줄씩 변환합니다.");
    println!("  --dict <path>   외부 사전(JSON) 사용");
    println!("  --syllables     공백으로 구분된 음절 배열로 처리");
    println!("  --tones         변환 대신 성조 표시 (mǎ -> ma 3성)");
    println!("  --init-config   기본 설정 파일 생성 ({})", config_path().display());
    process::exit(0);
}

fn render(engine: &Transliterator<'_>, mode: Mode, text: &str) -> String {
    match mode {
        Mode::FreeText => engine.free_text_to_korean(text),
        Mode::Syllables => {
            let syllables: Vec<&str> = text.split_whitespace().collect();
            engine.syllables_to_korean(&syllables)
        }
        Mode::Tones => annotate_tones(text)
            .iter()
            .map(|info| format!("{} {}", info.base, info.tone.label()))
            .collect::<Vec<_>>()
            .join(" / "),
    }
}

fn run_stdin(engine: &Transliterator<'_>, mode: Mode) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", render(engine, mode, &line))?;
    }
    out.flush()
}

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG로 변경 가능)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();

    if args.init_config {
        match save_config(&AppConfig::default()) {
            Ok(()) => println!("설정 파일 생성: {}", config_path().display()),
            Err(e) => {
                log::error!("{}", e);
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let config = load_config();

    // 사전 로드: 명령행 > 설정 파일 > 내장 사전
    let loaded;
    let dict = match args.dict_path.or(config.dictionary_path) {
        Some(path) => match PinyinDictionary::load(&path) {
            Ok(d) => {
                loaded = d;
                &loaded
            }
            Err(e) => {
                log::error!("사전 로드 실패 ({}): {}", path, e);
                eprintln!("사전 로드 실패 ({}): {}", path, e);
                process::exit(1);
            }
        },
        None => PinyinDictionary::bundled(),
    };

    let engine = Transliterator::new(dict).with_max_syllable_len(config.max_syllable_len);

    if !args.inputs.is_empty() {
        println!("{}", render(&engine, args.mode, &args.inputs.join(" ")));
        return;
    }

    if let Err(e) = run_stdin(&engine, args.mode) {
        log::error!("입출력 오류: {}", e);
        process::exit(1);
    }
}
