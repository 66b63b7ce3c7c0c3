/// Inclusive range of Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub low: u32,
    pub high: u32,
}

impl CodePointRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn contains(self, code_point: u32) -> bool {
        code_point >= self.low && code_point <= self.high
    }
}

/// CJK ideograph blocks followed by ASCII digits and letters.
pub const MEANINGFUL_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x4E00, 0x62FF),
    CodePointRange::new(0x6300, 0x77FF),
    CodePointRange::new(0x7800, 0x8CFF),
    CodePointRange::new(0x8D00, 0x9FCC),
    CodePointRange::new(0x3400, 0x4DB5),
    CodePointRange::new(0x20000, 0x215FF),
    CodePointRange::new(0x21600, 0x230FF),
    CodePointRange::new(0x23100, 0x245FF),
    CodePointRange::new(0x24600, 0x260FF),
    CodePointRange::new(0x26100, 0x275FF),
    CodePointRange::new(0x27600, 0x290FF),
    CodePointRange::new(0x29100, 0x2A6DF),
    CodePointRange::new(0x2A700, 0x2B734),
    CodePointRange::new(0x2B740, 0x2B81D),
    CodePointRange::new(0x2B820, 0x2CEAF),
    CodePointRange::new(0x2CEB0, 0x2EBEF),
    CodePointRange::new(0x2F800, 0x2FA1F),
    CodePointRange::new('0' as u32, '9' as u32),
    CodePointRange::new('a' as u32, 'z' as u32),
    CodePointRange::new('A' as u32, 'Z' as u32),
];

pub fn is_meaningful(character: char) -> bool {
    if character == ' ' {
        return true;
    }

    let code_point = u32::from(character);
    MEANINGFUL_RANGES
        .iter()
        .any(|range| range.contains(code_point))
}

#[cfg(test)]
mod tests {
    use super::{MEANINGFUL_RANGES, is_meaningful};

    fn char_at(code_point: u32) -> Option<char> {
        char::from_u32(code_point)
    }

    #[test]
    fn range_bounds_are_inclusive() {
        for range in MEANINGFUL_RANGES {
            let low = char_at(range.low).expect("range low should be a scalar value");
            let high = char_at(range.high).expect("range high should be a scalar value");
            assert!(is_meaningful(low), "low bound {:#X} rejected", range.low);
            assert!(is_meaningful(high), "high bound {:#X} rejected", range.high);
        }
    }

    #[test]
    fn code_points_just_outside_ranges_are_rejected() {
        for code_point in [
            0x33FF, 0x4DB6, 0x4DFF, 0x9FCD, 0x9FFF, 0x1FFFF, 0x2A6E0, 0x2A6FF, 0x2B735, 0x2B73F,
            0x2B81E, 0x2B81F, 0x2EBF0, 0x2F7FF, 0x2FA20,
        ] {
            let character = char_at(code_point).expect("test code point should be valid");
            assert!(!is_meaningful(character), "{code_point:#X} accepted");
        }
        for character in ['/', ':', '@', '[', '`', '{'] {
            assert!(!is_meaningful(character), "{character:?} accepted");
        }
    }

    #[test]
    fn code_points_at_adjacent_block_joins_are_accepted() {
        for code_point in [
            0x62FF, 0x6300, 0x77FF, 0x7800, 0x8CFF, 0x8D00, 0x215FF, 0x21600, 0x230FF, 0x23100,
            0x2CEAF, 0x2CEB0,
        ] {
            let character = char_at(code_point).expect("test code point should be valid");
            assert!(is_meaningful(character), "{code_point:#X} rejected");
        }
    }

    #[test]
    fn ascii_alphanumerics_and_space_are_meaningful() {
        for character in ['0', '9', 'a', 'z', 'A', 'Z', ' '] {
            assert!(is_meaningful(character), "{character:?} rejected");
        }
        for character in ['/', ':', '@', '[', '`', '{', '\t', '\n', '\u{3000}'] {
            assert!(!is_meaningful(character), "{character:?} accepted");
        }
    }

    #[test]
    fn cjk_punctuation_and_fullwidth_forms_are_noise() {
        for character in ['，', '。', '？', '！', '「', 'Ａ', '１'] {
            assert!(!is_meaningful(character), "{character:?} accepted");
        }
        for character in ['我', '你', '好', '𠀀', '𪘀'] {
            assert!(is_meaningful(character), "{character:?} rejected");
        }
    }
}
