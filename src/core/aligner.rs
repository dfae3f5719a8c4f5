use crate::domain::FeatureVector;

/// Lay `features` out in the model's column order.
///
/// Missing columns become `0.0`; features the model does not know are dropped.
/// The result always has `expected.len()` entries.
pub fn align(features: &FeatureVector, expected: &[String]) -> Vec<f64> {
    expected.iter().map(|name| features.get(name)).collect()
}

/// Encoded features the model has no column for.
pub fn unexpected_features<'a>(features: &'a FeatureVector, expected: &[String]) -> Vec<&'a str> {
    features
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !expected.iter().any(|e| e == name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_align_fills_missing_with_zero() {
        let mut fv = FeatureVector::new();
        fv.set("BMI", 28.5);
        fv.set("Smoking_No", 1.0);

        let row = align(&fv, &names(&["BMI", "Smoking_Yes", "Smoking_No"]));
        assert_eq!(row, vec![28.5, 0.0, 1.0]);
    }

    #[test]
    fn test_align_drops_unknown_features() {
        let mut fv = FeatureVector::new();
        fv.set("BMI", 22.0);
        fv.set("Race_Martian", 1.0);

        let expected = names(&["BMI"]);
        assert_eq!(align(&fv, &expected), vec![22.0]);
        assert_eq!(unexpected_features(&fv, &expected), vec!["Race_Martian"]);
    }

    #[test]
    fn test_align_length_always_matches_order() {
        let fv = FeatureVector::new();
        assert!(align(&fv, &[]).is_empty());

        let expected = names(&["a", "b", "c", "d"]);
        let row = align(&fv, &expected);
        assert_eq!(row.len(), expected.len());
        assert!(row.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_align_matches_get_for_every_position() {
        let mut fv = FeatureVector::new();
        fv.set("x", 3.0);
        fv.set("z", -1.5);
        let expected = names(&["z", "y", "x", "x"]);

        let row = align(&fv, &expected);
        for (i, name) in expected.iter().enumerate() {
            assert_eq!(row[i], fv.get(name));
        }
    }
}
