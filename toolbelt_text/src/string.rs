//! Building and formatting strings.

use std::fmt;

/// Converts the given value to its textual representation.
///
/// Numbers use their default decimal formatting and booleans become `"true"`
/// or `"false"`.
pub fn convert(value: impl fmt::Display) -> String {
    value.to_string()
}

/// Joins the given strings in order without any separator.
pub fn concatenate<I>(strings: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    strings.into_iter().fold(String::new(), |mut joined, string| {
        joined.push_str(string.as_ref());
        joined
    })
}

/// Returns a new string with `front` placed before `text`.
pub fn concatenate_front(text: &str, front: &str) -> String {
    concatenate([front, text])
}

/// Returns a new string with `back` placed after `text`.
pub fn concatenate_back(text: &str, back: &str) -> String {
    concatenate([text, back])
}

/// Returns a string consisting of `unit` repeated `n` times.
pub fn generate_repeat(unit: &str, n: usize) -> String {
    unit.repeat(n)
}

/// Returns a string consisting of `character` repeated `n` times.
pub fn generate_repeat_char(character: char, n: usize) -> String {
    std::iter::repeat_n(character, n).collect()
}

/// Pads the given text with spaces on both sides so that it is `width`
/// characters long. When the padding cannot be split evenly, the extra space
/// goes at the end.
///
/// Text that is already at least `width` characters long is returned
/// unchanged.
pub fn centre(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_owned();
    }

    let padding = width - length;
    let side = generate_repeat_char(' ', padding / 2);

    let mut centred = concatenate([side.as_str(), text, side.as_str()]);
    if padding % 2 == 1 {
        centred.push(' ');
    }
    centred
}

/// Centres the given text in place (see [`centre`]) and returns the number of
/// lines it occupies.
///
/// Text longer than `width` is not wrapped, so this is currently always one.
pub fn centre_in_place(text: &mut String, width: usize) -> usize {
    *text = centre(text, width);
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converting_booleans_gives_words() {
        assert_eq!(convert(true), "true");
        assert_eq!(convert(false), "false");
    }

    #[test]
    fn converting_numbers_gives_decimal_text() {
        assert_eq!(convert(42), "42");
        assert_eq!(convert(-7_i64), "-7");
        assert_eq!(convert(1.0_f32), "1");
        assert_eq!(convert(0.25_f64), "0.25");
    }

    #[test]
    fn concatenating_front_and_back_works() {
        assert_eq!(concatenate_front("World", "Hello "), "Hello World");
        assert_eq!(concatenate_back("Hello", " World"), "Hello World");
    }

    #[test]
    fn concatenating_sequence_preserves_order() {
        let parts = vec![
            "Repeating function ".to_string(),
            convert(12),
            " times".to_string(),
        ];
        assert_eq!(concatenate(&parts), "Repeating function 12 times");
        assert_eq!(concatenate(Vec::<String>::new()), "");
    }

    #[test]
    fn generating_repeats_works() {
        assert_eq!(generate_repeat("ab", 3), "ababab");
        assert_eq!(generate_repeat_char('-', 4), "----");
        assert_eq!(generate_repeat("ab", 0), "");
        assert_eq!(generate_repeat_char('x', 0), "");
    }

    #[test]
    fn centring_with_even_padding_works() {
        assert_eq!(centre("ab", 6), "  ab  ");
    }

    #[test]
    fn centring_with_odd_padding_puts_extra_space_at_end() {
        assert_eq!(centre("ab", 7), "  ab   ");
        assert_eq!(centre("", 1), " ");
    }

    #[test]
    fn centring_text_that_fills_width_leaves_it_unchanged() {
        assert_eq!(centre("Hello", 5), "Hello");
        assert_eq!(centre("Hello World", 4), "Hello World");
    }

    #[test]
    fn centring_counts_characters_rather_than_bytes() {
        let centred = centre("æøå", 7);
        assert_eq!(centred, "  æøå  ");
        assert_eq!(centred.chars().count(), 7);
    }

    #[test]
    fn centring_in_place_gives_one_line() {
        let mut text = "Hello World".to_string();
        assert_eq!(centre_in_place(&mut text, 80), 1);
        assert_eq!(text.len(), 80);
        assert_eq!(text.trim(), "Hello World");
    }

    proptest! {
        #[test]
        fn centred_text_has_expected_length_and_padding(text in "[a-zA-Z0-9 ]{0,40}", width in 0_usize..60) {
            let centred = centre(&text, width);
            prop_assert_eq!(centred.chars().count(), text.chars().count().max(width));

            let start = centred.find(text.as_str());
            prop_assert!(start.is_some());

            if text.len() < width {
                let leading = (width - text.len()) / 2;
                let trailing = centred.len() - leading - text.len();
                prop_assert_eq!(&centred[leading..leading + text.len()], text.as_str());
                prop_assert!(trailing - leading <= 1);
            }
        }
    }
}
