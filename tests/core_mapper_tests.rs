use approx::assert_relative_eq;
use nyx_chart::core::{Candle, CoordinateMapper, DerivedBounds, ViewTransform, Viewport};
use proptest::prelude::*;

const PADDING: f64 = 40.0;

fn sample_bounds() -> DerivedBounds {
    let candles = [
        Candle::new(0.0, 100.0, 110.0, 95.0, 105.0).expect("test candle should validate"),
        Candle::new(600.0, 105.0, 120.0, 100.0, 115.0).expect("test candle should validate"),
    ];
    DerivedBounds::from_candles(&candles).expect("dataset is non-empty")
}

fn default_mapper() -> CoordinateMapper {
    CoordinateMapper::new(
        sample_bounds(),
        ViewTransform::default(),
        Viewport::new(800, 600),
        PADDING,
    )
    .expect("mapper construction should succeed")
}

#[test]
fn mapper_rejects_zero_viewport() {
    let result = CoordinateMapper::new(
        sample_bounds(),
        ViewTransform::default(),
        Viewport::new(0, 600),
        PADDING,
    );
    assert!(result.is_err());
}

#[test]
fn mapper_rejects_padding_consuming_the_plot() {
    let result = CoordinateMapper::new(
        sample_bounds(),
        ViewTransform::default(),
        Viewport::new(80, 600),
        PADDING,
    );
    assert!(result.is_err());
}

#[test]
fn min_time_maps_to_left_padding_at_default_view() {
    let mapper = default_mapper();
    let bounds = mapper.bounds();

    assert_relative_eq!(mapper.time_to_x(bounds.min_time), PADDING, epsilon = 1e-9);
    assert_relative_eq!(
        mapper.time_to_x(bounds.max_time),
        800.0 - PADDING,
        epsilon = 1e-9
    );
}

#[test]
fn price_axis_is_inverted() {
    let mapper = default_mapper();
    let bounds = mapper.bounds();

    assert_relative_eq!(
        mapper.price_to_y(bounds.min_price),
        600.0 - PADDING,
        epsilon = 1e-9
    );
    assert_relative_eq!(mapper.price_to_y(bounds.max_price), PADDING, epsilon = 1e-9);
    assert!(mapper.price_to_y(110.0) < mapper.price_to_y(100.0));
}

#[test]
fn zoomed_view_scales_time_coordinates() {
    let mut transform = ViewTransform::default();
    transform
        .zoom_around_pixel(0.0, 1.1)
        .expect("zoom should apply");
    let mapper = CoordinateMapper::new(sample_bounds(), transform, Viewport::new(800, 600), PADDING)
        .expect("mapper construction should succeed");
    let bounds = mapper.bounds();

    // Zoom anchored at x = 0 multiplies every x coordinate by the factor.
    assert_relative_eq!(
        mapper.time_to_x(bounds.min_time),
        PADDING * 1.1,
        epsilon = 1e-9
    );
}

#[test]
fn panned_view_shifts_time_coordinates() {
    let mut transform = ViewTransform::default();
    transform
        .pan_by_pixels(25.0)
        .expect("pan should apply");
    let mapper = CoordinateMapper::new(sample_bounds(), transform, Viewport::new(800, 600), PADDING)
        .expect("mapper construction should succeed");
    let bounds = mapper.bounds();

    assert_relative_eq!(
        mapper.time_to_x(bounds.min_time),
        PADDING + 25.0,
        epsilon = 1e-9
    );
}

#[test]
fn price_mapping_ignores_the_view_transform() {
    let mut transform = ViewTransform::default();
    transform
        .zoom_around_pixel(300.0, 1.1)
        .expect("zoom should apply");
    transform.pan_by_pixels(50.0).expect("pan should apply");

    let moved = CoordinateMapper::new(sample_bounds(), transform, Viewport::new(800, 600), PADDING)
        .expect("mapper construction should succeed");
    let still = default_mapper();

    assert_relative_eq!(moved.price_to_y(107.5), still.price_to_y(107.5), epsilon = 1e-9);
}

#[test]
fn flat_dataset_produces_finite_coordinates() {
    let candles = [Candle::new(100.0, 50.0, 50.0, 50.0, 50.0).expect("doji should validate")];
    let bounds = DerivedBounds::from_candles(&candles).expect("dataset is non-empty");
    let mapper = CoordinateMapper::new(
        bounds,
        ViewTransform::default(),
        Viewport::new(800, 600),
        PADDING,
    )
    .expect("mapper construction should succeed");

    assert!(mapper.time_to_x(100.0).is_finite());
    assert!(mapper.price_to_y(50.0).is_finite());
}

proptest! {
    #[test]
    fn time_round_trip_is_stable(
        time in -1e5_f64..1e5,
        pan in -500.0_f64..500.0,
        zoom_steps in 0_u32..8,
    ) {
        let mut transform = ViewTransform::default();
        transform.pan_by_pixels(pan).expect("pan should apply");
        for _ in 0..zoom_steps {
            transform.zoom_around_pixel(400.0, 1.1).expect("zoom should apply");
        }

        let mapper = CoordinateMapper::new(
            sample_bounds(),
            transform,
            Viewport::new(800, 600),
            PADDING,
        )
        .expect("mapper construction should succeed");

        let round_trip = mapper.x_to_time(mapper.time_to_x(time));
        prop_assert!((round_trip - time).abs() <= 1e-6);
    }

    #[test]
    fn price_round_trip_is_stable(price in 0.0_f64..1e4) {
        let mapper = default_mapper();
        let round_trip = mapper.y_to_price(mapper.price_to_y(price));
        prop_assert!((round_trip - price).abs() <= 1e-6);
    }
}
