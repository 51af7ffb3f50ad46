/// Render `name,v1,...,vN` with six decimals per coordinate.
pub fn format_g25(name: &str, vector: &[f64]) -> String {
    std::iter::once(name.to_string())
        .chain(vector.iter().map(|v| format!("{v:.6}")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DIMS;
    use crate::data::record::parse_record;

    #[test]
    fn six_fixed_decimals() {
        let mut v = vec![0.0; DIMS];
        v[0] = 0.1234564;
        v[1] = -0.02;
        v[2] = 1e-9;
        v[3] = 12.5;
        let line = format_g25("Avg", &v);
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), DIMS + 1);
        assert_eq!(fields[0], "Avg");
        assert_eq!(fields[1], "0.123456");
        assert_eq!(fields[2], "-0.020000");
        assert_eq!(fields[3], "0.000000");
        assert_eq!(fields[4], "12.500000");
        assert_eq!(fields[25], "0.000000");
    }

    #[test]
    fn every_coordinate_follows_a_single_comma() {
        let line = format_g25("N", &[1.0, -2.5, 0.0000004]);
        assert_eq!(line, "N,1.000000,-2.500000,0.000000");
        assert_eq!(format_g25("Empty", &[]), "Empty");
    }

    #[test]
    fn output_parses_back_within_rounding() {
        let v: Vec<f64> = (0..DIMS).map(|i| (i as f64 - 12.0) * 0.0123456789).collect();
        let (name, parsed) = parse_record(&format_g25("Mix:avg", &v)).unwrap();

        assert_eq!(name, "Mix:avg");
        for (a, b) in v.iter().zip(&parsed) {
            assert!((a - b).abs() <= 5e-7, "{a} vs {b}");
        }
    }
}
