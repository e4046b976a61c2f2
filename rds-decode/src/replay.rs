//! Reads RDS-Spy-style plain-text logs into [`Blocks`] for offline replay.
//!
//! Each non-blank, non-comment line holds one group: four whitespace
//! separated tokens, one per block, in A/B/C/D order. A token is a
//! four-hex-digit block value optionally followed directly by one decimal
//! digit (0-3) giving that block's [`Bler`] class; a bare value is taken as
//! error-free. Lines starting with `#` or `;` are treated as comments.

use crate::result::{Error, Result};
use log::trace;
use rds_model::{Bler, Block, Blocks};
use std::io::{BufRead, BufReader, Read};

fn parse_token(line: usize, token: &str) -> Result<Block> {
    let (hex, bler_digit) = if token.len() > 4 {
        token.split_at(4)
    } else {
        (token, "")
    };

    let value = u16::from_str_radix(hex, 16).map_err(|_| Error::MalformedLine {
        line,
        reason: format!("invalid block value {:?}", token),
    })?;

    let errors = if bler_digit.is_empty() {
        Bler::None
    } else {
        let code: u8 = bler_digit.parse().map_err(|_| Error::MalformedLine {
            line,
            reason: format!("invalid BLER digit in {:?}", token),
        })?;
        Bler::from_code(code)
    };

    Ok(Block::new(value, errors))
}

/// Parses a full RDS-Spy-style log into its constituent groups.
pub fn read_rds_spy_log<R: Read>(reader: R) -> Result<Vec<Blocks>> {
    let mut groups = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(Error::MalformedLine {
                line: line_no,
                reason: format!("expected 4 blocks, found {}", tokens.len()),
            });
        }

        groups.push(Blocks::new(
            parse_token(line_no, tokens[0])?,
            parse_token(line_no, tokens[1])?,
            parse_token(line_no, tokens[2])?,
            parse_token(line_no, tokens[3])?,
        ));
    }
    trace!("parsed {} groups", groups.len());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_bler_annotated_tokens() {
        let log = "1234 0401 0000 4B44\n12342 04013 00000 4B440\n";
        let groups = read_rds_spy_log(log.as_bytes()).unwrap();
        assert_eq!(groups.len(), 2);

        let first = &groups[0];
        assert_eq!(first.a.value, 0x1234);
        assert_eq!(first.a.errors, Bler::None);

        let second = &groups[1];
        assert_eq!(second.a.errors, Bler::ThreeToFive);
        assert_eq!(second.b.errors, Bler::SixOrMore);
        assert_eq!(second.d.value, 0x4B44);
        assert_eq!(second.d.errors, Bler::None);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let log = "# header comment\n\n; another comment\n1234 0401 0000 4B44\n";
        let groups = read_rds_spy_log(log.as_bytes()).unwrap();
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn rejects_a_line_with_the_wrong_token_count() {
        let log = "1234 0401 0000\n";
        let err = read_rds_spy_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn rejects_an_invalid_hex_value() {
        let log = "ZZZZ 0401 0000 4B44\n";
        let err = read_rds_spy_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn empty_input_yields_an_empty_list() {
        let groups = read_rds_spy_log(&b""[..]).unwrap();
        assert!(groups.is_empty());
    }
}
