//! Printing of decorated messages with different priorities.

use crate::string::{centre, concatenate, generate_repeat_char};
use std::io::{self, Write};

/// Width in characters of every line printed for a message that fits inside
/// its frame.
pub const MESSAGE_WIDTH: usize = 80;

const PRIMARY_TEXT_WIDTH: usize = MESSAGE_WIDTH - 4;
const SECONDARY_TEXT_WIDTH: usize = MESSAGE_WIDTH;
const TERTIARY_TEXT_WIDTH: usize = MESSAGE_WIDTH - 6;

/// The priority of a message, which decides how heavily it is decorated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// The lowercase name of the tier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    /// Returns the tier with the given lowercase name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.name() == name)
    }

    /// Prints the given message to the output with the decoration of this
    /// tier.
    pub fn print<W: Write + ?Sized>(self, output: &mut W, message: &str) -> io::Result<()> {
        match self {
            Self::Primary => primary(output, message),
            Self::Secondary => secondary(output, message),
            Self::Tertiary => tertiary(output, message),
        }
    }
}

/// Prints the given message inside a box drawn with `+` and `|`.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn primary<W: Write + ?Sized>(output: &mut W, message: &str) -> io::Result<()> {
    let bar = generate_repeat_char('+', MESSAGE_WIDTH - 2);
    let blank = generate_repeat_char(' ', MESSAGE_WIDTH - 2);
    let text = centre(message, PRIMARY_TEXT_WIDTH);

    writeln!(output, "/{bar}\\")?;
    writeln!(output, "|{blank}|")?;
    writeln!(output, "{}", concatenate(["| ", text.as_str(), " |"]))?;
    writeln!(output, "|{blank}|")?;
    writeln!(output, "\\{bar}/")
}

/// Prints the given message between two dashed lines.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn secondary<W: Write + ?Sized>(output: &mut W, message: &str) -> io::Result<()> {
    let bar = generate_repeat_char('-', MESSAGE_WIDTH);

    writeln!(output, "{bar}")?;
    writeln!(output, "{}", centre(message, SECONDARY_TEXT_WIDTH))?;
    writeln!(output, "{bar}")
}

/// Prints the given message on a single line between arrows.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn tertiary<W: Write + ?Sized>(output: &mut W, message: &str) -> io::Result<()> {
    let text = centre(message, TERTIARY_TEXT_WIDTH);
    writeln!(output, "{}", concatenate(["-> ", text.as_str(), " <-"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(tier: Tier, message: &str) -> String {
        let mut output = Vec::new();
        tier.print(&mut output, message).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn primary_message_is_framed() {
        let text = printed(Tier::Primary, "Primary");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("/{}\\", "+".repeat(78)));
        assert_eq!(lines[1], format!("|{}|", " ".repeat(78)));
        assert_eq!(lines[2], format!("| {} |", centre("Primary", 76)));
        assert_eq!(lines[3], lines[1]);
        assert_eq!(lines[4], format!("\\{}/", "+".repeat(78)));
    }

    #[test]
    fn secondary_message_is_between_dashed_lines() {
        let text = printed(Tier::Secondary, "Secondary");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(80));
        assert_eq!(lines[1].trim(), "Secondary");
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn tertiary_message_is_between_arrows() {
        let text = printed(Tier::Tertiary, "Tertiary");

        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("-> "));
        assert!(text.ends_with(" <-\n"));
        assert_eq!(text.trim_start_matches("-> ").trim_end_matches(" <-\n").trim(), "Tertiary");
    }

    #[test]
    fn every_message_line_is_full_width() {
        for tier in Tier::ALL {
            for message in ["", "a", "Testing Function Utilities", "odd"] {
                for line in printed(tier, message).lines() {
                    assert_eq!(line.chars().count(), MESSAGE_WIDTH, "{tier:?}: {line:?}");
                }
            }
        }
    }

    #[test]
    fn overlong_message_is_printed_whole() {
        let message = "x".repeat(100);
        let text = printed(Tier::Tertiary, &message);
        assert_eq!(text, format!("-> {message} <-\n"));
    }

    #[test]
    fn looking_up_tier_by_name_works() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_name(tier.name()), Some(tier));
        }
        assert_eq!(Tier::from_name("quaternary"), None);
    }
}
