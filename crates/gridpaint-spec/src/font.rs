//! 5x7 bitmap font for uppercase messages.
//!
//! Only `A`-`Z` have glyphs. Unsupported characters are dropped from a word
//! before its glyphs are concatenated; they do not leave a blank column.

use crate::bitmap::Bitmap;
use crate::error::MessageError;
use crate::grid::{COLS, ROWS};

/// Width of a single glyph in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Default number of blank columns between words.
pub const DEFAULT_WORD_SPACING: usize = 1;

/// Characters that have a glyph.
pub const SUPPORTED_CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One glyph: seven rows, each a 5-bit pattern with the leftmost column in
/// bit 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([u8; ROWS]);

impl Glyph {
    /// Returns whether the pixel at `(row, col)` is lit.
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        col < GLYPH_WIDTH
            && self
                .0
                .get(row)
                .is_some_and(|&bits| bits & (1u8 << (GLYPH_WIDTH - 1 - col)) != 0)
    }

    /// Renders the glyph as a 7x5 bitmap.
    pub fn to_bitmap(&self) -> Bitmap {
        let mut bitmap = Bitmap::blank(GLYPH_WIDTH);
        for row in 0..ROWS {
            for col in 0..GLYPH_WIDTH {
                bitmap.set(row, col, self.pixel(row, col));
            }
        }
        bitmap
    }
}

/// Looks up the glyph for `c`.
pub fn glyph(c: char) -> Option<Glyph> {
    if c.is_ascii_uppercase() {
        Some(FONT_5X7[(c as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Renders a word by concatenating glyphs with no gap.
///
/// Characters without a glyph are skipped, so the width is five times the
/// number of supported characters.
pub fn render_word(word: &str) -> Bitmap {
    let glyphs: Vec<Bitmap> = word.chars().filter_map(glyph).map(|g| g.to_bitmap()).collect();
    Bitmap::join(&glyphs, 0)
}

/// Renders a whitespace-separated message.
///
/// Words are joined with `word_spacing` blank columns. Words that render
/// empty are left out entirely. A message with nothing renderable yields an
/// empty bitmap.
pub fn render_message(message: &str, word_spacing: usize) -> Bitmap {
    Bitmap::join(&render_words(message), word_spacing)
}

fn render_words(message: &str) -> Vec<Bitmap> {
    message
        .split_whitespace()
        .map(render_word)
        .filter(|b| !b.is_empty())
        .collect()
}

/// Width of `words` joined with `word_spacing`, or `None` on overflow.
fn joined_width(words: &[Bitmap], word_spacing: usize) -> Option<usize> {
    let letters = words.iter().try_fold(0usize, |acc, w| acc.checked_add(w.width()))?;
    let gaps = word_spacing.checked_mul(words.len().saturating_sub(1))?;
    letters.checked_add(gaps)
}

/// Renders a message and checks that it fits the timeline.
///
/// The width is checked before any columns are laid out, so huge spacings
/// are rejected without allocating.
///
/// # Errors
/// - [`MessageError::Unsupported`] when no character has a glyph.
/// - [`MessageError::TooWide`] when the bitmap would exceed 52 columns.
pub fn message_bitmap(message: &str, word_spacing: usize) -> Result<Bitmap, MessageError> {
    let words = render_words(message);
    if words.is_empty() {
        return Err(MessageError::Unsupported);
    }
    let width = joined_width(&words, word_spacing).unwrap_or(usize::MAX);
    if width > COLS {
        return Err(MessageError::TooWide { width, max: COLS });
    }
    let bitmap = Bitmap::join(&words, word_spacing);
    check_fits(&bitmap)?;
    Ok(bitmap)
}

/// Checks that a bitmap is non-empty and at most 52 columns wide.
pub fn check_fits(bitmap: &Bitmap) -> Result<(), MessageError> {
    if bitmap.is_empty() {
        return Err(MessageError::Unsupported);
    }
    if bitmap.width() > COLS {
        return Err(MessageError::TooWide {
            width: bitmap.width(),
            max: COLS,
        });
    }
    Ok(())
}

#[rustfmt::skip]
const FONT_5X7: [Glyph; 26] = [
    // A
    Glyph([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    // B
    Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    // C
    Glyph([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    // D
    Glyph([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
    // E
    Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    // F
    Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    // G
    Glyph([0b01110, 0b10001, 0b10000, 0b10011, 0b10001, 0b10001, 0b01110]),
    // H
    Glyph([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    // I
    Glyph([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    // J
    Glyph([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    // K
    Glyph([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    // L
    Glyph([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    // M
    Glyph([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    // N
    Glyph([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    // O
    Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    // P
    Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    // Q
    Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    // R
    Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    // S
    Glyph([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    // T
    Glyph([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    // U
    Glyph([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    // V
    Glyph([0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100]),
    // W
    Glyph([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
    // X
    Glyph([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    // Y
    Glyph([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    // Z
    Glyph([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_character_has_a_glyph() {
        for c in SUPPORTED_CHARACTERS.chars() {
            assert!(glyph(c).is_some(), "missing glyph for {}", c);
        }
        assert!(glyph('a').is_none());
        assert!(glyph('1').is_none());
        assert!(glyph(' ').is_none());
    }

    #[test]
    fn test_glyph_pixels() {
        let t = glyph('T').unwrap();
        assert!((0..GLYPH_WIDTH).all(|c| t.pixel(0, c)));
        assert!(t.pixel(6, 2));
        assert!(!t.pixel(6, 0));
        assert!(!t.pixel(0, 5));
    }

    #[test]
    fn test_glyph_bitmap_matches_pattern() {
        let bitmap = glyph('L').unwrap().to_bitmap();
        assert_eq!(bitmap.width(), GLYPH_WIDTH);
        assert_eq!(
            bitmap.to_text(),
            "#....\n#....\n#....\n#....\n#....\n#....\n#####"
        );
    }

    #[test]
    fn test_render_word_drops_unsupported() {
        assert_eq!(render_word("HI").width(), 10);
        assert_eq!(render_word("H1i-I"), render_word("HI"));
        assert!(render_word("123").is_empty());
    }

    #[test]
    fn test_render_message_hello_world() {
        let bitmap = render_message("HELLO WORLD", DEFAULT_WORD_SPACING);
        assert_eq!(bitmap.width(), 5 * 10 + 1);
        assert!(message_bitmap("HELLO WORLD", DEFAULT_WORD_SPACING).is_ok());
        // The gap column is blank.
        assert!((0..ROWS).all(|r| !bitmap.get(r, 25)));
    }

    #[test]
    fn test_render_message_word_spacing() {
        let bitmap = render_message("AB C", 3);
        assert_eq!(bitmap.width(), 10 + 3 + 5);
    }

    #[test]
    fn test_render_message_collapses_whitespace() {
        assert_eq!(
            render_message("  A \t  B  ", 1),
            render_message("A B", 1)
        );
    }

    #[test]
    fn test_render_message_skips_empty_words() {
        // "123" renders empty and must not add a second gap.
        assert_eq!(render_message("A 123 B", 1).width(), 11);
    }

    #[test]
    fn test_empty_and_unsupported_messages() {
        assert!(render_message("", 1).is_empty());
        assert!(render_message("hello world", 1).is_empty());
        assert!(render_message("2024", 1).is_empty());
        assert_eq!(message_bitmap("", 1), Err(MessageError::Unsupported));
        assert_eq!(message_bitmap("lower 42", 1), Err(MessageError::Unsupported));
    }

    #[test]
    fn test_too_wide_is_distinct_from_unsupported() {
        // Eleven letters is 55 columns.
        let err = message_bitmap("ABCDEFGHIJK", 1).unwrap_err();
        assert_eq!(err, MessageError::TooWide { width: 55, max: 52 });

        // Ten letters plus two gaps of two columns is 54 columns.
        let err = message_bitmap("ABCD EFG HIJ", 2).unwrap_err();
        assert_eq!(err, MessageError::TooWide { width: 54, max: 52 });
    }

    #[test]
    fn test_exactly_52_columns_fits() {
        // 10 letters (50) + 1 gap of 2 columns = 52.
        let bitmap = message_bitmap("ABCDE FGHIJ", 2).unwrap();
        assert_eq!(bitmap.width(), COLS);
    }

    #[test]
    fn test_huge_word_spacing_is_too_wide() {
        assert_eq!(
            message_bitmap("A B", usize::MAX),
            Err(MessageError::TooWide {
                width: usize::MAX,
                max: 52
            })
        );
        assert_eq!(
            message_bitmap("A B", 1_000_000_000),
            Err(MessageError::TooWide {
                width: 1_000_000_010,
                max: 52
            })
        );
        // A single word never uses the spacing.
        assert_eq!(message_bitmap("AB", usize::MAX).unwrap().width(), 10);
    }
}
