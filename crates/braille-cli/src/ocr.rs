//! Text extraction from images via the tesseract binary.
//!
//! The recognizer is an external collaborator with one hard rule: errors
//! never cross its boundary. Every failure mode (binary missing, non-zero
//! exit, undecodable output) is logged and becomes the empty string, which
//! callers already treat as "no text found".

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use braille_core::script::Script;

/// tesseract language pack tag for a script.
fn lang_tag(script: Script) -> &'static str {
    match script {
        Script::English => "eng",
        Script::Hindi => "hin",
    }
}

/// Anything that can pull text out of an image.
pub trait TextRecognizer: Send + Sync {
    /// Extract text from the image at `path`. May return an empty string;
    /// never fails outward.
    fn extract_text(&self, path: &Path, script: Script) -> String;
}

/// Recognizer backed by the `tesseract` command-line binary.
pub struct TesseractCli {
    /// Binary to invoke; a bare name resolves through PATH.
    pub binary: PathBuf,
    /// OCR engine mode (`--oem`).
    pub oem: u8,
    /// Page segmentation mode (`--psm`); 6 assumes a uniform block of text.
    pub psm: u8,
}

impl Default for TesseractCli {
    fn default() -> Self {
        TesseractCli {
            binary: PathBuf::from("tesseract"),
            oem: 3,
            psm: 6,
        }
    }
}

impl TesseractCli {
    /// Extract text from in-memory image bytes.
    ///
    /// The bytes go through a named temp file that is removed on every
    /// exit path when the handle drops.
    pub fn extract_text_from_bytes(&self, bytes: &[u8], script: Script) -> String {
        let mut file = match tempfile::NamedTempFile::new() {
            Ok(f) => f,
            Err(e) => {
                warn!(error = %e, "could not create temp file for image bytes");
                return String::new();
            }
        };
        if let Err(e) = file.write_all(bytes) {
            warn!(error = %e, "could not write image bytes to temp file");
            return String::new();
        }
        self.extract_text(file.path(), script)
    }
}

impl TextRecognizer for TesseractCli {
    fn extract_text(&self, path: &Path, script: Script) -> String {
        let output = Command::new(&self.binary)
            .arg(path)
            .arg("stdout")
            .args(["-l", lang_tag(script)])
            .args(["--oem", &self.oem.to_string()])
            .args(["--psm", &self.psm.to_string()])
            .output();

        let output = match output {
            Ok(o) => o,
            Err(e) => {
                warn!(binary = %self.binary.display(), error = %e, "failed to run tesseract");
                return String::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, stderr = %stderr.trim(), "tesseract failed");
            return String::new();
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let text = text.trim();
        debug!(chars = text.chars().count(), "tesseract finished");
        text.to_string()
    }
}
