use std::path::Path;
use std::process;

use serde::Serialize;

use braille_core::convert::transliterate;
use braille_core::script::Script;

use crate::ocr::TextRecognizer;

#[derive(Debug, Serialize)]
pub struct ImageConversion {
    pub extracted_text: String,
    pub language: Script,
    pub braille: String,
}

/// Run OCR then conversion. `None` when the recognizer found no text.
pub fn recognize_and_convert(
    recognizer: &dyn TextRecognizer,
    image: &Path,
    script: Script,
) -> Option<ImageConversion> {
    let extracted = recognizer.extract_text(image, script);
    if extracted.is_empty() {
        return None;
    }
    let braille = transliterate(&extracted, script);
    Some(ImageConversion {
        extracted_text: extracted,
        language: script,
        braille,
    })
}

pub fn image_cmd(recognizer: &dyn TextRecognizer, image: &str, script: Script, json: bool) {
    let path = Path::new(image);
    if !path.is_file() {
        eprintln!("Error reading {image}: no such file");
        process::exit(1);
    }
    match recognize_and_convert(recognizer, path, script) {
        Some(result) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("JSON serialization failed")
                );
            } else {
                println!("{}", result.braille);
            }
        }
        None => {
            eprintln!("No text found in image");
            process::exit(1);
        }
    }
}
