use std::fs;
use std::process;

use serde::Serialize;

use braille_core::convert::{scan, ScanUnit, UnitOrigin};
use braille_core::ingest::ConversionRequest;
use braille_core::script::Script;
use braille_core::table::BrailleTable;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Serialize)]
struct ConvertOutput<'a> {
    text: &'a str,
    language: Script,
    braille: String,
}

/// Install a custom mapping table for `script` from a TOML file.
pub fn load_custom_table(script: Script, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(BrailleTable::init_custom(script, content), "Error: {}");
}

pub fn convert_cmd(
    text: &str,
    language: Option<&str>,
    table: Option<&str>,
    explain: bool,
    json: bool,
) {
    let request = die!(ConversionRequest::new(text, language), "Error: {}");
    if let Some(file) = table {
        load_custom_table(request.script(), file);
    }

    if explain {
        let units = scan(request.text(), request.script());
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&units).expect("JSON serialization failed")
            );
        } else {
            print_units(&units);
        }
        return;
    }

    let braille = request.convert();
    if json {
        let out = ConvertOutput {
            text: request.text(),
            language: request.script(),
            braille,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("JSON serialization failed")
        );
    } else {
        println!("{braille}");
    }
}

fn print_units(units: &[ScanUnit]) {
    for u in units {
        let origin = match u.origin {
            UnitOrigin::Mapped => "mapped",
            UnitOrigin::Placeholder => "placeholder",
            UnitOrigin::Verbatim => "verbatim",
        };
        println!("  {:?} \u{2192} {}  [{}]", u.source, u.braille, origin);
    }
}
