//! Minimal TOML parser for display configuration
//!
//! Handles only the subset `display.toml` uses, without allocating:
//! - `[section]` headers
//! - `key = value` pairs (string, integer, boolean)
//! - Comments (`# ...`), including after a value
//!
//! Only the `[display]` section is interpreted; other sections are skipped
//! so the same file can carry board notes for other tools.

use super::types::DisplayConfig;
use crate::segment::TubeVariant;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed section header or key/value line
    InvalidSection,
    /// Value has the wrong type or cannot be parsed
    InvalidValue,
    /// Key not recognized in `[display]`
    UnknownKey,
    /// Value parsed but failed range validation
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Other,
}

/// Parse `display.toml` contents
///
/// Keys missing from the file keep their [`DisplayConfig::default`] value.
pub fn parse_display_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or(ParseError::InvalidSection)?
                .trim();
            if name.is_empty() {
                return Err(ParseError::InvalidSection);
            }
            section = if name == "display" {
                Section::Display
            } else {
                Section::Other
            };
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidSection)?;
        let key = key.trim();
        let value = value.trim();

        if section != Section::Display {
            continue;
        }

        match key {
            "tube" => {
                let name = parse_string(value)?;
                config.tube = TubeVariant::from_name(name).ok_or(ParseError::InvalidValue)?;
            }
            "mux_interval_ms" => {
                config.mux_interval_ms = parse_u32(value)?;
            }
            "blank_active_low" => {
                config.blank_active_low = parse_bool(value)?;
            }
            _ => return Err(ParseError::UnknownKey),
        }
    }

    config.validate().map_err(|_| ParseError::OutOfRange)?;
    Ok(config)
}

/// Drop a trailing `#` comment that is not inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

fn parse_u32(value: &str) -> Result<u32, ParseError> {
    // TOML allows `_` between digits
    if value.is_empty() || value.starts_with('_') || value.ends_with('_') {
        return Err(ParseError::InvalidValue);
    }

    let mut n: u32 = 0;
    for c in value.chars().filter(|&c| c != '_') {
        let d = c.to_digit(10).ok_or(ParseError::InvalidValue)?;
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(d))
            .ok_or(ParseError::InvalidValue)?;
    }
    Ok(n)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Board: IV-3A clock, three gates
[display]
tube = "iv22b"          # alternate wiring
mux_interval_ms = 4
blank_active_low = false

[board]
name = "bench # 2"
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_display_config(SAMPLE).unwrap();
        assert_eq!(config.tube, TubeVariant::Iv22b);
        assert_eq!(config.mux_interval_ms, 4);
        assert!(!config.blank_active_low);
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_display_config("").unwrap(), DisplayConfig::default());
        assert_eq!(
            parse_display_config("[display]\n").unwrap(),
            DisplayConfig::default()
        );
    }

    #[test]
    fn test_root_keys_ignored() {
        let config =
            parse_display_config("version = 1\n[display]\nmux_interval_ms = 1_0\n").unwrap();
        assert_eq!(config.mux_interval_ms, 10);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_display_config("[display]\nbrightness = 3\n"),
            Err(ParseError::UnknownKey)
        );
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            parse_display_config("[display]\ntube = \"in14\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_display_config("[display]\ntube = iv3a\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_display_config("[display]\nmux_interval_ms = -5\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_display_config("[display]\nblank_active_low = yes\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_display_config("[display]\nmux_interval_ms = 0\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_display_config("[display]\nmux_interval_ms = 250\n"),
            Err(ParseError::OutOfRange)
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_display_config("[display\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_display_config("[]\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_display_config("[display]\ntube\n"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("a = 1 # c"), "a = 1 ");
        assert_eq!(strip_comment("a = \"x#y\""), "a = \"x#y\"");
        assert_eq!(strip_comment("# all"), "");
    }
}
