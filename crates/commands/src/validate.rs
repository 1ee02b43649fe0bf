//! Input checks shared by the parameter structs and the config loader.
//!
//! Every value ends up space-joined into a line that a remote shell splits
//! again, so a value must survive as exactly one word.

use crate::error::{CommandError, Result};

/// Check that `value` is non-empty and contains no whitespace or control characters.
pub fn shell_word(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CommandError::invalid(name, "must not be empty"));
    }
    if let Some(c) = value.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(CommandError::invalid(
            name,
            format!("must be a single shell word, found {:?}", c),
        ));
    }
    Ok(())
}

/// Convert a signed count into the unsigned form the builders take.
pub fn count(name: &str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| CommandError::invalid(name, format!("must be non-negative, got {}", value)))
}

/// Parse a count from text, reporting negatives as `InvalidArgument`.
///
/// Suitable as a clap `value_parser`.
pub fn parse_count(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| CommandError::invalid("count", format!("not an integer: {:?}", raw)))?;
    count("count", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_word_accepts_paths_and_addresses() {
        assert!(shell_word("committee", ".committee.json").is_ok());
        assert!(shell_word("idp", "127.0.0.1:9000").is_ok());
        assert!(shell_word("origin", "/home/ubuntu/repo/target/release/").is_ok());
    }

    #[test]
    fn test_shell_word_rejects_empty() {
        let err = shell_word("keypair", "").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("keypair"));
    }

    #[test]
    fn test_shell_word_rejects_whitespace() {
        assert!(shell_word("committee", "my committee.json").is_err());
        assert!(shell_word("committee", "a\tb").is_err());
        assert!(shell_word("committee", "a\nb").is_err());
    }

    #[test]
    fn test_count() {
        assert_eq!(count("rate", 0).unwrap(), 0);
        assert_eq!(count("rate", 50_000).unwrap(), 50_000);
        assert!(count("rate", -1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("100").unwrap(), 100);
        assert_eq!(parse_count(" 7 ").unwrap(), 7);
        assert!(parse_count("-5").unwrap_err().is_invalid_argument());
        assert!(parse_count("ten").unwrap_err().is_invalid_argument());
        assert!(parse_count("").is_err());
    }
}
