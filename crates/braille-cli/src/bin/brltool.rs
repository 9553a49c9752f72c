use std::collections::BTreeMap;
use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use braille_core::convert::transliterate;
use braille_core::script::Script;

use braille_cli::commands::{convert_ops, image_ops, table_ops};
use braille_cli::ocr::TesseractCli;
use braille_cli::trace_init;

#[derive(Parser)]
#[command(name = "brltool", about = "Braille transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to Braille cells
    Convert {
        /// Text to convert
        text: String,
        /// Source language (english or hindi; defaults to english)
        #[arg(short, long)]
        language: Option<String>,
        /// Custom mapping table TOML for the selected language
        #[arg(long)]
        table: Option<String>,
        /// Print one line per scan unit instead of the joined cells
        #[arg(long)]
        explain: bool,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// OCR an image, then convert the recognized text
    Image {
        /// Image file
        file: String,
        /// Source language (defaults to english)
        #[arg(short, long, default_value = "english")]
        language: String,
        /// tesseract binary to invoke
        #[arg(long, default_value = "tesseract")]
        tesseract: String,
        /// OCR engine mode passed to tesseract
        #[arg(long, default_value = "3")]
        oem: u8,
        /// Page segmentation mode passed to tesseract
        #[arg(long, default_value = "6")]
        psm: u8,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Run conversion accuracy tests from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Only run cases with this tag
        #[arg(long)]
        tag: Option<String>,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Custom mapping table TOML, applied to --language before the run
        #[arg(long, requires = "language")]
        table: Option<String>,
        /// Language a custom table applies to
        #[arg(long)]
        language: Option<String>,
        /// Show passing cases too
        #[arg(short, long)]
        verbose: bool,
        /// Output JSON report
        #[arg(long)]
        json: bool,
    },
    /// Export default table mappings as TOML
    TableExport {
        /// Source language (english or hindi)
        #[arg(short, long, default_value = "english")]
        language: String,
    },
    /// Validate a custom table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
        /// Source language the table is for
        #[arg(short, long, default_value = "english")]
        language: String,
    },
}

// --- Accuracy types ---

#[derive(Debug, Deserialize)]
struct AccuracyCorpus {
    cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
struct AccuracyCase {
    text: String,
    #[serde(deserialize_with = "script_from_str")]
    language: Script,
    expected: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    skip: bool,
    #[serde(default)]
    note: Option<String>,
}

/// Corpus language names go through the strict `FromStr` parse, so they are
/// case-insensitive like every other language tag the tool accepts.
fn script_from_str<'de, D>(deserializer: D) -> Result<Script, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    tag.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Serialize)]
struct AccuracyResult {
    text: String,
    language: Script,
    expected: String,
    actual: String,
    status: AccuracyStatus,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
struct AccuracySummary {
    total: usize,
    pass: usize,
    fail: usize,
    skip: usize,
    pass_rate: String,
}

#[derive(Debug, Serialize)]
struct AccuracyReport {
    results: Vec<AccuracyResult>,
    summary: AccuracySummary,
}

fn parse_script(s: &str) -> Script {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    })
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            language,
            table,
            explain,
            json,
        } => {
            convert_ops::convert_cmd(&text, language.as_deref(), table.as_deref(), explain, json);
        }

        Command::Image {
            file,
            language,
            tesseract,
            oem,
            psm,
            json,
        } => {
            let script = Script::from_tag(Some(&language));
            let recognizer = TesseractCli {
                binary: tesseract.into(),
                oem,
                psm,
            };
            image_ops::image_cmd(&recognizer, &file, script, json);
        }

        Command::Accuracy {
            corpus_file,
            tag,
            category,
            table,
            language,
            verbose,
            json,
        } => {
            // clap rejects --table without --language
            if let (Some(file), Some(lang)) = (&table, &language) {
                convert_ops::load_custom_table(parse_script(lang), file);
            }

            let corpus_content = fs::read_to_string(&corpus_file).unwrap_or_else(|e| {
                eprintln!("Failed to read corpus file {}: {}", corpus_file, e);
                process::exit(1);
            });
            let corpus: AccuracyCorpus = toml::from_str(&corpus_content).unwrap_or_else(|e| {
                eprintln!("Failed to parse corpus TOML: {}", e);
                process::exit(1);
            });

            // Filter cases
            let cases: Vec<&AccuracyCase> = corpus
                .cases
                .iter()
                .filter(|c| {
                    if let Some(ref t) = tag {
                        if !c.tags.contains(t) {
                            return false;
                        }
                    }
                    if let Some(ref cat) = category {
                        if c.category != *cat {
                            return false;
                        }
                    }
                    true
                })
                .collect();

            if cases.is_empty() {
                eprintln!("No cases match the given filters");
                process::exit(1);
            }

            // Run each case
            let mut results: Vec<AccuracyResult> = Vec::new();
            for case in &cases {
                if case.skip {
                    results.push(AccuracyResult {
                        text: case.text.clone(),
                        language: case.language,
                        expected: case.expected.clone(),
                        actual: String::new(),
                        status: AccuracyStatus::Skip,
                        category: case.category.clone(),
                        note: case.note.clone(),
                    });
                    continue;
                }

                let actual = transliterate(&case.text, case.language);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };

                results.push(AccuracyResult {
                    text: case.text.clone(),
                    language: case.language,
                    expected: case.expected.clone(),
                    actual,
                    status,
                    category: case.category.clone(),
                    note: case.note.clone(),
                });
            }

            // Compute summary
            let total = results.len();
            let pass = results
                .iter()
                .filter(|r| matches!(r.status, AccuracyStatus::Pass))
                .count();
            let fail = results
                .iter()
                .filter(|r| matches!(r.status, AccuracyStatus::Fail))
                .count();
            let skip = results
                .iter()
                .filter(|r| matches!(r.status, AccuracyStatus::Skip))
                .count();
            let tested = total - skip;
            let rate = if tested > 0 {
                pass as f64 / tested as f64 * 100.0
            } else {
                0.0
            };
            let summary = AccuracySummary {
                total,
                pass,
                fail,
                skip,
                pass_rate: format!("{:.1}%", rate),
            };

            if json {
                let report = AccuracyReport { results, summary };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                // Group by category
                let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
                for r in &results {
                    grouped.entry(&r.category).or_default().push(r);
                }

                for (cat, group) in &grouped {
                    println!("\n=== {} ({} cases) ===", cat, group.len());
                    for r in group {
                        match r.status {
                            AccuracyStatus::Pass => {
                                if verbose {
                                    println!("  \u{2713} {} \u{2192} {}", r.text, r.actual);
                                }
                            }
                            AccuracyStatus::Fail => {
                                println!(
                                    "  \u{2717} {} \u{2192} {} (got: {})",
                                    r.text, r.expected, r.actual
                                );
                            }
                            AccuracyStatus::Skip => {
                                let reason = r.note.as_deref().unwrap_or("known failure");
                                println!("  - {} [skip: {}]", r.text, reason);
                            }
                        }
                    }
                }

                println!();
                println!("=== Summary ===");
                println!("  Total:     {}", summary.total);
                println!("  Pass:      {:>3}", summary.pass);
                println!("  Fail:      {:>3}", summary.fail);
                println!("  Skip:      {:>3}", summary.skip);
                println!(
                    "  Pass rate: {} ({}/{})",
                    summary.pass_rate, summary.pass, tested
                );
            }

            if fail > 0 {
                process::exit(1);
            }
        }

        Command::TableExport { language } => {
            table_ops::table_export(parse_script(&language));
        }

        Command::TableValidate { file, language } => {
            table_ops::table_validate(&file, parse_script(&language));
        }
    }
}
