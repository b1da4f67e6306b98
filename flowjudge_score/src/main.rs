// Flowjudge CLI entry point.
//
// Scores a freestyle verse transcript against a theme and prints the four
// component scores, the total, and the verdict. The transcript comes from
// the first positional argument, or from stdin when none is given.
//
// Usage:
//   flowjudge [TEXT] [OPTIONS]
//     --theme <THEME>         maguro, tai, iwashi or same (default: maguro)
//     --config <PATH>         JSON config overriding weights and constants
//     --json                  Print results as JSON
//     --vowels <READING>      Print the vowel skeleton of a reading and exit
//     --compare <A> <B>       Compare the vowel skeletons of two readings
//     --batch <PATH>          Score a JSON array of transcripts in parallel
//     --log-level <FILTER>    tracing filter, e.g. debug (default: warn)
//
// Batch files hold either plain strings (scored against --theme) or
// `{ "text": ..., "theme": ... }` objects. Logs go to stderr so JSON output
// on stdout stays machine-readable.

use std::io::Read;
use std::path::{Path, PathBuf};

use flowjudge_lang::default_themes;
use flowjudge_score::{Judge, JudgeConfig, ThemeKey, TotalScore, compare_readings, extract_vowels};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

enum Mode {
    Score(Option<String>),
    Vowels(String),
    Compare(String, String),
    Batch(PathBuf),
}

struct Options {
    mode: Mode,
    theme: ThemeKey,
    config: Option<PathBuf>,
    json: bool,
    log_level: String,
}

/// One entry of a batch file.
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchEntry {
    Plain(String),
    Themed { text: String, theme: ThemeKey },
}

fn main() {
    let opts = parse_args();
    init_logging(&opts.log_level);

    match &opts.mode {
        Mode::Vowels(reading) => {
            println!("{}", extract_vowels(reading));
            return;
        }
        Mode::Compare(a, b) => {
            let cmp = compare_readings(a, b);
            if opts.json {
                print_json(&cmp);
            } else {
                println!("{a}: {}", cmp.left);
                println!("{b}: {}", cmp.right);
                println!("distance {}, similarity {}%", cmp.distance, cmp.similarity);
            }
            return;
        }
        Mode::Score(_) | Mode::Batch(_) => {}
    }

    let config = match &opts.config {
        Some(path) => JudgeConfig::load(path).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => JudgeConfig::default(),
    };
    let judge = Judge::new(config, default_themes());

    match opts.mode {
        Mode::Score(text) => {
            let text = text.unwrap_or_else(read_stdin);
            let total = judge.score(&text, opts.theme);
            if opts.json {
                print_json(&total);
            } else {
                print_total(&total, opts.theme);
            }
        }
        Mode::Batch(path) => {
            let entries = load_batch(&path, opts.theme).unwrap_or_else(|e| {
                eprintln!("Failed to load batch {}: {e}", path.display());
                std::process::exit(1);
            });
            info!(count = entries.len(), "scoring batch");
            let totals = judge.score_batch(&entries);
            if opts.json {
                print_json(&totals);
            } else {
                for (total, (_, theme)) in totals.iter().zip(&entries) {
                    print_total(total, *theme);
                    println!();
                }
            }
        }
        Mode::Vowels(_) | Mode::Compare(..) => {}
    }
}

/// Parse command-line arguments. Plain `std::env::args()` matching.
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        mode: Mode::Score(None),
        theme: ThemeKey::Maguro,
        config: None,
        json: false,
        log_level: "warn".to_string(),
    };
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--theme" => {
                i += 1;
                opts.theme = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--theme requires one of: maguro, tai, iwashi, same");
                    std::process::exit(1);
                });
            }
            "--config" => {
                i += 1;
                opts.config = Some(PathBuf::from(required(&args, i, "--config")));
            }
            "--json" => opts.json = true,
            "--vowels" => {
                i += 1;
                opts.mode = Mode::Vowels(required(&args, i, "--vowels"));
            }
            "--compare" => {
                let a = required(&args, i + 1, "--compare");
                let b = required(&args, i + 2, "--compare");
                opts.mode = Mode::Compare(a, b);
                i += 2;
            }
            "--batch" => {
                i += 1;
                opts.mode = Mode::Batch(PathBuf::from(required(&args, i, "--batch")));
            }
            "--log-level" => {
                i += 1;
                opts.log_level = required(&args, i, "--log-level");
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
            text => opts.mode = Mode::Score(Some(text.to_string())),
        }
        i += 1;
    }

    opts
}

fn required(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{flag} requires a value");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("Usage: flowjudge [TEXT] [OPTIONS]");
    println!();
    println!("Scores TEXT (or stdin) as a freestyle verse on the given theme.");
    println!();
    println!("Options:");
    println!("  --theme <THEME>         maguro, tai, iwashi or same (default: maguro)");
    println!("  --config <PATH>         JSON config overriding weights and constants");
    println!("  --json                  Print results as JSON");
    println!("  --vowels <READING>      Print the vowel skeleton of a reading");
    println!("  --compare <A> <B>       Compare the vowel skeletons of two readings");
    println!("  --batch <PATH>          Score a JSON array of transcripts");
    println!("  --log-level <FILTER>    Log filter (default: warn)");
    println!("  --help, -h              Show this help");
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn read_stdin() -> String {
    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("Failed to read stdin: {e}");
        std::process::exit(1);
    }
    text
}

fn load_batch(path: &Path, default_theme: ThemeKey) -> Result<Vec<(String, ThemeKey)>, String> {
    let data = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let entries: Vec<BatchEntry> = serde_json::from_str(&data).map_err(|e| e.to_string())?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            BatchEntry::Plain(text) => (text, default_theme),
            BatchEntry::Themed { text, theme } => (text, theme),
        })
        .collect())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_total(total: &TotalScore, theme: ThemeKey) {
    println!("=== {} ({}) ===", theme.label(), theme.id());
    for (name, result) in [
        ("keyword", &total.keyword),
        ("rhyme", &total.rhyme),
        ("rhythm", &total.rhythm),
        ("meaning", &total.meaning),
    ] {
        println!("  {name:<8} {:>3}  {}", result.score, result.detail);
    }
    println!("  total    {:>3}", total.total_score);
    println!("{}", total.final_message);
}
