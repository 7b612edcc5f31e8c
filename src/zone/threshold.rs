use crate::{Error, Result};

/// Two cut points splitting `values` into three bands: the ascending-sorted
/// values at `n / 3` and `2 * n / 3`.
///
/// Floor division makes the bands uneven when `n` isn't a multiple of 3, and
/// repeated values may put more points in one band than in the others. Both
/// are accepted approximations of tertiles.
pub fn thresholds(values: &[f64]) -> Result<[f64; 2]> {
    if values.is_empty() {
        return Err(Error::InsufficientData(
            "Can't calculate thresholds of an empty sequence".into(),
        ));
    }
    if values.iter().any(|it| it.is_nan()) {
        return Err(Error::Computation(
            "Can't calculate thresholds of a sequence containing NaN".into(),
        ));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    Ok([sorted[n / 3], sorted[2 * n / 3]])
}

/// Replaces every missing value with the mean of the present ones.
pub fn impute_mean(values: &[Option<f64>]) -> Result<Vec<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.len() == values.len() {
        return Ok(present);
    }
    if present.is_empty() {
        return Err(Error::InsufficientData(format!(
            "All {} values are missing, nothing to impute from",
            values.len()
        )));
    }
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    Ok(values.iter().map(|it| it.unwrap_or(mean)).collect())
}

#[cfg(test)]
mod test {
    use crate::{Error, Result};

    #[test]
    fn thresholds_at_floor_positions() -> Result<()> {
        assert_eq!([3.0, 5.0], super::thresholds(&[5.0, 1.0, 3.0])?);
        assert_eq!([3.0, 5.0], super::thresholds(&[6.0, 5.0, 4.0, 3.0, 2.0, 1.0])?);
        // n = 5: positions 1 and 3
        assert_eq!([20.0, 40.0], super::thresholds(&[50.0, 40.0, 30.0, 20.0, 10.0])?);
        Ok(())
    }

    #[test]
    fn thresholds_of_single_value() -> Result<()> {
        assert_eq!([7.0, 7.0], super::thresholds(&[7.0])?);
        Ok(())
    }

    #[test]
    fn thresholds_with_ties() -> Result<()> {
        assert_eq!([2.0, 2.0], super::thresholds(&[2.0, 2.0, 2.0, 2.0, 9.0])?);
        Ok(())
    }

    #[test]
    fn thresholds_are_ordered() -> Result<()> {
        let sequences: [&[f64]; 4] = [
            &[3.5, -1.0, 0.0, 12.0],
            &[1.0, 1.0],
            &[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0, -1.0],
            &[4.2, 4.1],
        ];
        for values in sequences {
            let mut sorted = values.to_vec();
            sorted.sort_by(f64::total_cmp);
            let n = sorted.len();
            let [low, high] = super::thresholds(values)?;
            assert_eq!(sorted[n / 3], low);
            assert_eq!(sorted[2 * n / 3], high);
            assert!(low <= high);
        }
        Ok(())
    }

    #[test]
    fn thresholds_of_empty_sequence() {
        assert!(matches!(
            super::thresholds(&[]),
            Err(Error::InsufficientData(_))
        ));
    }

    #[test]
    fn thresholds_reject_nan() {
        assert!(matches!(
            super::thresholds(&[1.0, f64::NAN]),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn impute_missing_with_mean() -> Result<()> {
        let values = [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
        assert_eq!(vec![1.0, 2.0, 3.0, 4.0, 5.0], super::impute_mean(&values)?);
        Ok(())
    }

    #[test]
    fn impute_nothing_missing() -> Result<()> {
        assert_eq!(vec![2.0, 1.0], super::impute_mean(&[Some(2.0), Some(1.0)])?);
        assert!(super::impute_mean(&[])?.is_empty());
        Ok(())
    }

    #[test]
    fn impute_all_missing() {
        assert!(matches!(
            super::impute_mean(&[None, None]),
            Err(Error::InsufficientData(_))
        ));
    }
}
