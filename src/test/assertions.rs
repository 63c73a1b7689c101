/// Asserts that two floating-point values are approximately equal.
///
/// Without a tolerance, the values must agree to within a few ULPs relative to
/// their magnitude: `assert_eq!` for floats. With `tolerance = x`, the absolute
/// difference must be at most `x`.
///
/// # Examples
/// ```
/// # use linear_lens::assert_close;
/// assert_close!(0.1 + 0.2, 0.3);
/// assert_close!(2.4999, 2.5, tolerance = 1e-3);
/// assert_close!(1.0, 1.0, "custom message for {}", "failures");
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr, tolerance = $tol:expr $(, $msg:literal $(, $args:expr)*)?) => {
        #[allow(clippy::float_cmp)]
        {
            #[allow(unused_mut, unused_assignments)]
            let mut msg = "Values not close".to_string();
            $( msg = format!($msg $(, $args)*); )?

            let (a, b, tolerance): (f64, f64, f64) = ($a, $b, $tol);
            assert!(
                a == b || (a - b).abs() <= tolerance,
                "{msg}: {a} != {b} (tolerance {tolerance})"
            );
        }
    };

    ($a:expr, $b:expr $(, $msg:literal $(, $args:expr)*)?) => {
        #[allow(clippy::float_cmp)]
        {
            #[allow(unused_mut, unused_assignments)]
            let mut msg = "Values not close".to_string();
            $( msg = format!($msg $(, $args)*); )?

            let (a, b): (f64, f64) = ($a, $b);
            let scale = a.abs().max(b.abs()).max(1.0);
            assert!(
                a == b || (a - b).abs() <= 4.0 * f64::EPSILON * scale,
                "{msg}: {a} != {b}"
            );
        }
    };
}

/// Asserts that two slices of floating-point values are approximately equal element-wise.
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements fails [`crate::assert_close`].
///
/// # Examples
/// ```
/// # use linear_lens::assert_all_close;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![1.0 + 1e-16, 2.0, 3.0];
/// assert_all_close!(a, b);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr $(, $msg:literal $(, $args:expr)*)?) => {
        #[allow(unused_assignments, unused_mut)]
        let mut msg = format!("{} elements", $src.len());
        $(
            msg = format!($msg $(, $args)*);
        )?

        assert_eq!($src.len(), $dst.len(), "{msg} - length mismatch");

        for (i, (s, d)) in $src.iter().zip($dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d, "{} - src[{}]", msg, i);
        }
    };
}

/// Asserts that a [`crate::LinearFit`] has an in-sample R² above a threshold.
///
/// The threshold defaults to 0.9. On failure the fitted equation and the
/// number of observations are included in the panic message.
///
/// R² is undefined when every sales value is the same; that also fails the assertion.
///
/// # Example
/// ```
/// # use linear_lens::{assert_r_squared, LinearFit, Observation};
/// let data = vec![
///     Observation::new(1, 1000.0, 3000.0),
///     Observation::new(2, 2000.0, 5100.0),
///     Observation::new(3, 3000.0, 6900.0),
/// ];
/// let fit = LinearFit::new(data).unwrap();
/// assert_r_squared!(fit);
/// assert_r_squared!(fit, 0.99, msg = "three points should be almost collinear");
/// ```
#[macro_export]
macro_rules! assert_r_squared {
    ($fit:expr $(, msg = $msg:literal $(, $args:expr)*)?) => {
        $crate::assert_r_squared!($fit, 0.9 $(, msg = $msg $(, $args)*)?)
    };

    ($fit:expr, $r2:expr $(, msg = $msg:literal $(, $args:expr)*)?) => {
        #[allow(clippy::toplevel_ref_arg)]
        {
            let ref fit = $fit;
            let threshold: f64 = $r2;
            let r2 = fit.r_squared();

            if !r2.is_some_and(|r2| r2 > threshold) {
                #[allow(unused_mut)]
                let mut msg = match r2 {
                    Some(r2) => format!("R² = {r2} is below {threshold}"),
                    None => "R² is undefined for constant sales".to_string(),
                };
                msg = format!("{msg} [{}; n = {}]", fit.model(), fit.data().len());
                $( msg = format!("{msg}: {}", format!($msg $(, $args)*)); )?

                panic!("{msg}");
            }
        }
    };
}

/// Asserts that `train` and `test` together form a partition of `source`.
///
/// Observations are matched by id, so every id in `source` must appear exactly
/// once across both halves and no other ids may appear.
///
/// # Example
/// ```
/// # use linear_lens::{assert_partition, Observation};
/// let source = vec![Observation::new(1, 1.0, 1.0), Observation::new(2, 2.0, 2.0)];
/// let train = vec![source[1]];
/// let test = vec![source[0]];
/// assert_partition!(source, train, test);
/// ```
#[macro_export]
macro_rules! assert_partition {
    ($source:expr, $train:expr, $test:expr) => {{
        let (source, train, test) = (&$source, &$train, &$test);
        assert_eq!(
            train.len() + test.len(),
            source.len(),
            "split lost or duplicated observations"
        );

        let mut remaining: std::collections::HashMap<usize, $crate::Observation> =
            source.iter().map(|o| (o.id, *o)).collect();
        for o in train.iter().chain(test.iter()) {
            match remaining.remove(&o.id) {
                Some(original) => assert_eq!(original, *o, "observation #{} was altered", o.id),
                None => panic!("observation #{} appears twice or is not in the source", o.id),
            }
        }
        assert!(remaining.is_empty(), "observations missing from the split: {remaining:?}");
    }};
}

#[cfg(test)]
mod tests {
    use crate::{LinearFit, Observation};

    #[test]
    fn close_values() {
        assert_close!(1.0, 1.0 + f64::EPSILON);
        assert_close!(1e9, 1e9 + 1e-7);
        assert_close!(10.0, 10.4, tolerance = 0.5);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn distant_values() {
        assert_close!(1.0, 1.001);
    }

    #[test]
    fn all_close() {
        let a = [0.1 + 0.2, 1.0];
        let b = [0.3, 1.0];
        assert_all_close!(a, b);
    }

    #[test]
    #[should_panic(expected = "is below")]
    fn r_squared_below_threshold() {
        let data = vec![
            Observation::new(1, 1.0, 10.0),
            Observation::new(2, 2.0, 0.0),
            Observation::new(3, 3.0, 10.0),
            Observation::new(4, 4.0, 0.0),
        ];
        let fit = LinearFit::new(data).unwrap();
        assert_r_squared!(fit);
    }

    #[test]
    #[should_panic(expected = "appears twice")]
    fn partition_with_duplicate() {
        let source = vec![Observation::new(1, 1.0, 1.0), Observation::new(2, 2.0, 2.0)];
        let train = vec![source[0]];
        let test = vec![source[0]];
        assert_partition!(source, train, test);
    }
}
