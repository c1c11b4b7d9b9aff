use approx::assert_abs_diff_eq;
use lagrange_math::prelude::*;
use lagrange_math::interpolation::basis;
use lagrange_math::{poly::multiply, MathError};
use proptest::collection::vec;
use proptest::prelude::*;
use test_strategy::proptest;

fn parse_all(args: &[&str]) -> lagrange_math::Result<Vec<Point>> {
    args.iter()
        .map(|arg| arg.parse::<Point>().map_err(MathError::from))
        .collect()
}

fn pipeline(args: &[&str]) -> lagrange_math::Result<String> {
    let points = parse_all(args)?;
    Ok(interpolate(&points)?.to_string())
}

#[test]
fn parabola_from_text_points() -> lagrange_math::Result<()> {
    assert_eq!("-7.0 + 12.0x - 3.0x^2", pipeline(&["1,2", "2,5", "3,2"])?);
    Ok(())
}

#[test]
fn line_from_text_points_with_whitespace() -> lagrange_math::Result<()> {
    assert_eq!("1.0 + 1.0x", pipeline(&[" 1 , 2 ", "2,\t3"])?);
    Ok(())
}

#[test]
fn point_on_x_axis_prints_zero() -> lagrange_math::Result<()> {
    assert_eq!("0.0", pipeline(&["4,0"])?);
    Ok(())
}

#[test]
fn parse_errors_surface_as_math_errors() {
    let err = pipeline(&["1,2", "oops"]).unwrap_err();
    assert!(matches!(
        err,
        MathError::ParsePoint(ParsePointError::InvalidCoordinate { .. })
    ));
}

#[test]
fn interpolation_errors_surface_as_math_errors() {
    assert_eq!(
        MathError::Interpolation(InterpolationError::NonDistinctX(1.0)),
        pipeline(&["1,2", "1,3"]).unwrap_err()
    );
    assert_eq!(
        MathError::Interpolation(InterpolationError::ZeroPoints),
        pipeline(&[]).unwrap_err()
    );
}

#[test]
fn interpolant_of_product_samples_matches_product() {
    // (x - 1)(x + 2) = x^2 + x - 2
    let product = multiply(&poly![-1, 1], &poly![2, 1]);
    assert_eq!(poly![-2, 1, 1], product);

    let pts: Vec<Point> = [-3.0, 0.0, 2.0]
        .into_iter()
        .map(|x| Point::new(x, product.evaluate(x)))
        .collect();
    let p = interpolate(&pts).unwrap();

    assert_eq!(3, p.len());
    for (got, want) in p.coefficients().iter().zip(product.coefficients()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn sum_of_scaled_basis_terms_is_the_interpolant() {
    let pts = points![(-2, 3), (0, -1), (1, 4), (5, 2)];
    let by_hand: Polynomial = pts
        .iter()
        .enumerate()
        .filter_map(|(i, pt)| basis(&pts, i).map(|l| l.scale(pt.y)))
        .sum();
    assert_eq!(by_hand, interpolate(&pts).unwrap());
}

fn small_coefficients() -> impl Strategy<Value = Vec<f64>> {
    vec((-9_i32..9).prop_map(f64::from), 1..5)
}

#[proptest(cases = 64)]
fn interpolant_reproduces_sampled_polynomial(
    #[strategy(small_coefficients())] coefficients: Vec<f64>,
) {
    let source = Polynomial::new(coefficients);
    let pts: Vec<Point> = (0..=source.len())
        .map(|k| {
            let x = k as f64 - 2.0;
            Point::new(x, source.evaluate(x))
        })
        .collect();

    let p = interpolate(&pts).unwrap();

    for x in [-3.5, -1.0, 0.25, 2.0, 4.0] {
        let tolerance = 1e-6 * (1.0 + source.evaluate(x).abs());
        prop_assert!((p.evaluate(x) - source.evaluate(x)).abs() <= tolerance);
    }
}
