use crate::types::Error;

/// code points of bytes 0x80..=0x9F in WinAnsiEncoding, `None` where the slot is unassigned
const HIGH_CONTROL_RANGE: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

/// maps one character to its WinAnsiEncoding byte
pub fn encode_char(ch: char) -> Option<u8> {
    match ch as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(ch as u32 as u8),
        0x80..=0x9F => None,
        _ => HIGH_CONTROL_RANGE
            .iter()
            .position(|slot| *slot == Some(ch))
            .map(|index| 0x80 + index as u8),
    }
}

/// encodes `text` for a standard Type1 font declared with `/WinAnsiEncoding`
pub fn encode(text: &str) -> Result<Vec<u8>, Error> {
    text.chars()
        .map(|ch| encode_char(ch).ok_or(Error::UnsupportedCharacter(ch)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_maps_to_single_bytes() {
        assert_eq!(encode("José").unwrap(), vec![0x4A, 0x6F, 0x73, 0xE9]);
        assert_eq!(encode("ß ÿ").unwrap(), vec![0xDF, 0x20, 0xFF]);
    }

    #[test]
    fn typographic_marks_use_the_0x80_block() {
        assert_eq!(encode("€").unwrap(), vec![0x80]);
        assert_eq!(encode("“—”").unwrap(), vec![0x93, 0x97, 0x94]);
        assert_eq!(encode("Ÿ").unwrap(), vec![0x9F]);
    }

    #[test]
    fn unmappable_characters_are_rejected() {
        assert!(matches!(encode("日本"), Err(Error::UnsupportedCharacter('日'))));
        // C1 control characters share code points with the remapped block
        assert!(matches!(encode("\u{0081}"), Err(Error::UnsupportedCharacter('\u{0081}'))));
    }
}
