/// Measurement sequence parsing and boundary validation
///
/// The input format is deliberately plain: decimal circumference values
/// separated by whitespace and/or commas, with `#` line comments.
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, multispace1},
    combinator::{opt, value},
    multi::{many1, separated_list0},
    number::complete::double,
    sequence::{delimited, preceded},
    IResult,
};
use thiserror::Error;

/// Errors raised at the input boundary. The geometry pipeline never fails
/// on measurement data; everything invalid is rejected here.
#[derive(Debug, Error, PartialEq)]
pub enum SequenceError {
    #[error("measurement sequence is empty")]
    Empty,
    #[error("magnitude at position {index} is not a positive number: {value}")]
    NonPositive { index: usize, value: f64 },
    #[error("failed to parse measurements: {0}")]
    Parse(String),
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), preceded(char('#'), take_while(|c| c != '\n')))(input)
}

/// Anything that may appear between two values: whitespace, commas, comments.
fn separator(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many1(alt((value((), multispace1), value((), char(',')), comment))),
    )(input)
}

fn measurements(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        opt(separator),
        separated_list0(separator, double),
        opt(separator),
    )(input)
}

/// Parse a measurements document into raw magnitudes.
///
/// The whole input must be consumed; a token that is not a number, comma,
/// comment, or whitespace is a parse error. An input with no values at all
/// is rejected as [`SequenceError::Empty`].
pub fn parse_measurements(input: &str) -> Result<Vec<f64>, SequenceError> {
    let (rest, values) =
        measurements(input).map_err(|e| SequenceError::Parse(e.to_string()))?;

    if !rest.is_empty() {
        let preview: String = rest.chars().take(24).collect();
        return Err(SequenceError::Parse(format!(
            "unexpected input starting at {:?}",
            preview
        )));
    }
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    Ok(values)
}

/// Reject magnitudes that would produce undefined geometry. Zero, negative,
/// and non-finite values all fail; positions are reported 1-based.
pub fn validate(magnitudes: &[f64]) -> Result<(), SequenceError> {
    for (i, &value) in magnitudes.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(SequenceError::NonPositive {
                index: i + 1,
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_separated() {
        let values = parse_measurements("31.4  37.7\n44.0").unwrap();
        assert_eq!(values, vec![31.4, 37.7, 44.0]);
    }

    #[test]
    fn test_parse_commas_and_comments() {
        let input = "# neck\n31.4, 37.7,\n# belly\n44.0\n";
        let values = parse_measurements(input).unwrap();
        assert_eq!(values, vec![31.4, 37.7, 44.0]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_measurements(""), Err(SequenceError::Empty));
        assert_eq!(
            parse_measurements("# only a comment\n"),
            Err(SequenceError::Empty)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_measurements("31.4 bogus 44.0"),
            Err(SequenceError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_accepts_positive_values() {
        assert!(validate(&[0.1, 31.4, 1e6]).is_ok());
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        assert_eq!(
            validate(&[31.4, 0.0]),
            Err(SequenceError::NonPositive {
                index: 2,
                value: 0.0
            })
        );
        assert!(matches!(
            validate(&[-1.0]),
            Err(SequenceError::NonPositive { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(validate(&[f64::NAN]).is_err());
        assert!(validate(&[f64::INFINITY]).is_err());
    }
}
