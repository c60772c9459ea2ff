use unicode_normalization::UnicodeNormalization;
use vzor_core::Preprocessor;

/// Characters left behind by a broken windows-1250 → UTF-8 conversion of the
/// template and dictionary files, with the letters they stand for
pub const ENCODING_REPAIRS: [(char, char); 5] = [
    ('ą', 'š'),
    ('ľ', 'ž'),
    ('»', 'ť'),
    ('®', 'Ž'),
    ('©', 'Š'),
];

pub fn repair_encoding(text: &str) -> String {
    text.chars()
        .map(|c| {
            ENCODING_REPAIRS
                .iter()
                .find(|(broken, _)| *broken == c)
                .map_or(c, |&(_, fixed)| fixed)
        })
        .collect()
}

/// NFC followed by the encoding repair
pub struct CzechPreprocessor;

impl Preprocessor for CzechPreprocessor {
    fn process(&self, line: &str) -> String {
        let composed: String = line.trim_end_matches(['\n', '\r']).nfc().collect();
        repair_encoding(&composed)
    }
}
