use crate::error::ParseError;

/// Input decoded to text plus one error per malformed byte.
#[derive(Debug, Clone, Default)]
pub struct Decoded {
    pub text: String,
    pub errors: Vec<ParseError>,
}

/// Decodes `input` as UTF-8, substituting U+FFFD for every malformed byte.
///
/// Decoding never fails: a best-effort string is always produced so the
/// parser can still build a tree.
pub fn decode(input: &[u8]) -> Decoded {
    let mut text = String::with_capacity(input.len());
    let mut errors = vec![];
    let mut offset = 0usize;

    for chunk in input.utf8_chunks() {
        text.push_str(chunk.valid());
        offset += chunk.valid().len();
        for _ in chunk.invalid() {
            errors.push(ParseError::InvalidEncoding { offset });
            text.push(char::REPLACEMENT_CHARACTER);
            offset += 1;
        }
    }

    if !errors.is_empty() {
        log::debug!("{} malformed byte(s) replaced during decoding", errors.len());
    }

    Decoded { text, errors }
}
