use newton_fe::interpolation::config::NewtonCfg;
use newton_fe::interpolation::errors::InterpolationError;
use newton_fe::interpolation::newton::Newton;
use newton_fe::interpolation::samples::Sample;
use newton_fe::interpolation::Interpolator;

type FitResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;
const RTOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn quadratic_coefficients() -> FitResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];

    let newton = Newton::from_xy(&x, &y, NewtonCfg::new())?;
    assert_vec_close(newton.coefficients()?, &[0.0, 0.0, 1.0]);
    assert!(approx_eq(newton.eval(0.5)?, 0.25));
    assert!(approx_eq(newton.eval(1.5)?, 2.25));
    Ok(())
}

#[test]
fn exact_hits_at_nodes() -> FitResult {
    let x = [0.0, 0.15, 0.3, 0.5, 0.55, 0.7, 0.85, 0.9, 1.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| (3.0 * v).sin() + v * v).collect();

    let newton = Newton::from_xy(&x, &y, NewtonCfg::new())?;
    let got = newton.eval_many(&x)?;
    for (i, (g, e)) in got.iter().zip(y.iter()).enumerate() {
        assert!((g - e).abs() <= 1e-6, "node {}: got {}, expected {}", i, g, e);
    }
    Ok(())
}

#[test]
fn unsorted_nodes_still_interpolate() -> FitResult {
    let x = [2.0, -1.0, 0.5, 3.0];
    let y = [1.0, 4.0, -2.0, 0.0];

    let newton = Newton::from_xy(&x, &y, NewtonCfg::new())?;
    assert_vec_close(&newton.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn degree_matches_sample_count() -> FitResult {
    let mut newton = Newton::default();
    for n in 1..=8 {
        let x: Vec<f64> = (0..n).map(|i| i as f64 / 8.0).collect();
        let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
        newton.load_xy(&x, &y)?;
        assert_eq!(newton.coefficients()?.len(), n);
        assert_eq!(newton.polynomial()?.degree(), n - 1);
    }
    Ok(())
}

#[test]
fn single_point_is_constant() -> FitResult {
    let newton = Newton::from_samples(&[Sample::new(0.4, -3.5)], NewtonCfg::new())?;
    assert_eq!(newton.coefficients()?, &[-3.5]);
    assert_eq!(newton.eval(123.0)?, -3.5);
    assert_eq!(newton.integral()?, 0.0);
    Ok(())
}

#[test]
fn pair_and_parallel_loads_agree() -> FitResult {
    let pairs = [Sample::new(0.0, 1.0), Sample::new(0.5, 2.0), Sample::new(1.0, 0.5)];
    let a = Newton::from_samples(&pairs, NewtonCfg::new())?;
    let b = Newton::from_xy(&[0.0, 0.5, 1.0], &[1.0, 2.0, 0.5], NewtonCfg::new())?;
    assert_eq!(a.coefficients()?, b.coefficients()?);
    Ok(())
}

#[test]
fn reload_replaces_previous_fit() -> FitResult {
    let mut newton = Newton::default();
    newton.load_xy(&[0.0, 1.0, 2.0, 3.0], &[1.0, 8.0, 27.0, 64.0])?;
    assert_eq!(newton.coefficients()?.len(), 4);

    newton.load_xy(&[0.0, 1.0], &[2.0, 4.0])?;
    assert_vec_close(newton.coefficients()?, &[2.0, 2.0]);
    assert_eq!(newton.samples()?.len(), 2);
    Ok(())
}

#[test]
fn unequal_length_error() {
    let mut newton = Newton::default();
    let err = newton.load_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
    assert!(!newton.is_ready());
}

#[test]
fn empty_input_error() {
    let err = Newton::from_samples(&[], NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn duplicate_x_rejected() {
    let err = Newton::from_xy(&[0.0, 0.5, 0.5], &[1.0, 2.0, 3.0], NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { x1, x2 }
        if x1 == 0.5 && x2 == 0.5));
}

#[test]
fn near_duplicate_respects_x_tol() -> FitResult {
    let x = [0.0, 1e-6, 1.0];
    let y = [0.0, 0.0, 1.0];

    let err = Newton::from_xy(&x, &y, NewtonCfg::new().set_x_tol(1e-3)?).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { .. }));

    assert!(Newton::from_xy(&x, &y, NewtonCfg::new()).is_ok());
    Ok(())
}

#[test]
fn failed_load_leaves_empty() -> FitResult {
    let mut newton = Newton::default();
    newton.load_xy(&[0.0, 1.0], &[0.0, 1.0])?;
    assert!(newton.is_ready());

    assert!(newton.load_xy(&[0.0, 0.0], &[0.0, 1.0]).is_err());
    assert!(!newton.is_ready());
    assert!(matches!(newton.coefficients(), Err(InterpolationError::NotLoaded)));
    Ok(())
}

#[test]
fn clear_returns_to_empty() -> FitResult {
    let mut newton = Newton::from_xy(&[0.0, 1.0], &[0.0, 1.0], NewtonCfg::new())?;
    newton.clear();
    assert!(matches!(newton.integral(), Err(InterpolationError::NotLoaded)));
    assert!(matches!(newton.quadrature(), Err(InterpolationError::NotLoaded)));
    assert!(matches!(newton.eval(0.5), Err(InterpolationError::NotLoaded)));
    assert!(matches!(newton.report(), Err(InterpolationError::NotLoaded)));
    Ok(())
}

#[test]
fn sample_ceiling() -> FitResult {
    let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let cfg = NewtonCfg::new().set_max_samples(5)?;
    let err = Newton::from_xy(&x, &x, cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::TooManySamples { got: 6, max: 5 }));
    Ok(())
}
