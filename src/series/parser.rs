use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::{ParseError, Series};

/// Comment marker for measurement files
const COMMENT_PREFIX: char = '#';

/// Parse raw measurement text into a [`Series`].
///
/// Each non-blank, non-comment line contributes one pair if its first two
/// whitespace-separated tokens start with a finite number. Only the leading
/// numeric part of a token is read, so `10.0,` gives `10.0` and `12abc` gives
/// `12`. NaN, infinities and literals that overflow `f64` are rejected.
/// Trailing tokens are ignored. Lines that do not qualify are skipped
/// silently; only a completely unusable input is an error.
pub fn parse(raw_text: &str) -> Result<Series, ParseError> {
    let mut columns = Columns::default();
    for line in raw_text.lines() {
        columns.push_line(line);
    }
    columns.finish()
}

/// Parse measurement text from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Series, ParseError> {
    let mut columns = Columns::default();
    for line in reader.lines() {
        columns.push_line(&line?);
    }
    columns.finish()
}

/// Parse a measurement file from disk
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Series, ParseError> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

enum LineOutcome {
    Pair(f64, f64),
    /// Blank or comment line
    Ignored,
    /// Data-looking line without two numeric leading tokens
    Rejected,
}

fn parse_line(line: &str) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return LineOutcome::Ignored;
    }

    let mut tokens = trimmed.split_whitespace();
    let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
        return LineOutcome::Rejected;
    };

    match (parse_number(first), parse_number(second)) {
        (Some(a), Some(b)) => LineOutcome::Pair(a, b),
        _ => LineOutcome::Rejected,
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token[..numeric_prefix_len(token)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Length of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix.
/// Zero when the token does not start with a number.
fn numeric_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    // An exponent marker without digits is not part of the number.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[derive(Default)]
struct Columns {
    x: Vec<f64>,
    y: Vec<f64>,
    skipped: usize,
}

impl Columns {
    fn push_line(&mut self, line: &str) {
        match parse_line(line) {
            LineOutcome::Pair(a, b) => {
                self.x.push(a);
                self.y.push(b);
            }
            LineOutcome::Ignored => {}
            LineOutcome::Rejected => self.skipped += 1,
        }
    }

    fn finish(self) -> Result<Series, ParseError> {
        if self.skipped > 0 {
            debug!("Skipped {} non-numeric lines", self.skipped);
        }

        // Columns are filled in lockstep, so only emptiness can fail here.
        Series::from_columns(self.x, self.y).map_err(|_| ParseError::NoValidRows)
    }
}
