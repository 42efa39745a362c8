//! Best-effort text/binary classification of a file's leading bytes.

use crate::options::BinaryDetection;

/// Number of leading bytes sampled per file.
pub const SAMPLE_SIZE: usize = 4096;

/// Share of non-text bytes above which a sample counts as binary.
pub const NON_TEXT_THRESHOLD: f64 = 0.2;

/// Classifies `sample` with the zero-byte and non-text-ratio heuristic.
///
/// Tab, newline, carriage return, printable ASCII and every byte at or above
/// 128 count as text; the high bytes are not checked for valid encoding. An
/// empty sample is text.
pub fn looks_binary(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return false;
    }
    if sample.contains(&0) {
        return true;
    }
    let non_text = sample.iter().filter(|&&b| !is_text_byte(b)).count();
    non_text as f64 / sample.len() as f64 > NON_TEXT_THRESHOLD
}

fn is_text_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | 32..=126 | 128..=255)
}

pub(crate) fn is_binary(sample: &[u8], method: BinaryDetection) -> bool {
    match method {
        BinaryDetection::Heuristic => looks_binary(sample),
        BinaryDetection::Accurate => content_inspector::inspect(sample).is_binary(),
        BinaryDetection::None => false,
    }
}
