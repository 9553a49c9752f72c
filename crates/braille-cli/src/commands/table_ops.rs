use std::fs;
use std::process;

use braille_core::script::Script;
use braille_core::table::{default_toml, parse_table_toml};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn table_export(script: Script) {
    print!("{}", default_toml(script));
}

pub fn table_validate(file: &str, script: Script) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_table_toml(&content, script), "Error: {}");
    println!("OK: {} mappings", map.len());
}
