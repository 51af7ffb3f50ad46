use crate::error::RecordError;

use super::model::DIMS;

/// Whether a raw line carries no record: blank, or a `#` comment.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse `name,c1,...,c25` into the sample name and its coordinates.
///
/// Whitespace around every field is ignored. Coordinates accept the usual
/// decimal and exponent notation; `inf` and `nan` parse here and are left to
/// [`super::validate::first_non_finite`].
pub fn parse_record(line: &str) -> Result<(String, Vec<f64>), RecordError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != DIMS + 1 {
        return Err(RecordError::FieldCount {
            found: fields.len(),
            expected: DIMS + 1,
        });
    }

    let name = fields[0];
    let vector = fields[1..]
        .iter()
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<f64>().map_err(|error| RecordError::InvalidNumber {
                name: name.to_string(),
                field: i + 1,
                text: tok.to_string(),
                error,
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok((name.to_string(), vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line_with(name: &str, coords: &[&str]) -> String {
        std::iter::once(name)
            .chain(coords.iter().copied())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn zeros(n: usize) -> Vec<&'static str> {
        vec!["0"; n]
    }

    #[test]
    fn parses_a_well_formed_line() {
        let mut coords = zeros(DIMS);
        coords[0] = "0.123";
        coords[24] = "-1.5e-2";
        let (name, vector) = parse_record(&line_with("Sample_1", &coords)).unwrap();

        assert_eq!(name, "Sample_1");
        assert_eq!(vector.len(), DIMS);
        assert_eq!(vector[0], 0.123);
        assert_eq!(vector[24], -0.015);
        assert!(vector[1..24].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let coords = vec![" 1.0 "; DIMS];
        let (name, vector) = parse_record(&line_with("  Padded : x ", &coords)).unwrap();
        assert_eq!(name, "Padded : x");
        assert!(vector.iter().all(|&v| v == 1.0));
    }

    #[rstest]
    #[case(DIMS - 1)]
    #[case(DIMS + 1)]
    #[case(0)]
    fn rejects_wrong_field_count(#[case] coords: usize) {
        let err = parse_record(&line_with("S", &zeros(coords))).unwrap_err();
        assert_eq!(
            err,
            RecordError::FieldCount {
                found: coords + 1,
                expected: DIMS + 1
            }
        );
    }

    #[rstest]
    #[case("NaNtext")]
    #[case("")]
    #[case("1,5")]
    #[case("0x10")]
    fn rejects_non_numeric_coordinate(#[case] bad: &str) {
        let mut coords = zeros(DIMS);
        coords[3] = bad;
        let line = line_with("Sample", &coords);

        match parse_record(&line) {
            // "1,5" splits into an extra field
            Err(RecordError::FieldCount { .. }) => assert_eq!(bad, "1,5"),
            Err(RecordError::InvalidNumber { name, field, .. }) => {
                assert_eq!(name, "Sample");
                assert_eq!(field, 4);
            }
            Ok(_) => panic!("accepted {bad:?}"),
        }
    }

    #[test]
    fn non_finite_literals_parse_syntactically() {
        let mut coords = zeros(DIMS);
        coords[0] = "inf";
        coords[1] = "NaN";
        let (_, vector) = parse_record(&line_with("S", &coords)).unwrap();
        assert!(vector[0].is_infinite());
        assert!(vector[1].is_nan());
    }

    #[rstest]
    #[case("", true)]
    #[case("   \t", true)]
    #[case("# header", true)]
    #[case("   # indented comment", true)]
    #[case("A,1", false)]
    #[case("A#1,2", false)]
    fn skips_blank_and_comment_lines(#[case] line: &str, #[case] skip: bool) {
        assert_eq!(is_skippable(line), skip);
    }
}
