//! End-to-end scenarios for the crop search: feature extraction through
//! candidate scoring and coordinate rescaling.
use cropro::{BoostRegion, CropParams, Error, PixelBuffer, analyze_crops, select_crop};

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build an RGB buffer from a per-pixel closure over (x, y).
fn build_image(
    width: usize,
    height: usize,
    pixel: impl Fn(usize, usize) -> [u8; 3],
) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&pixel(x, y));
        }
    }
    PixelBuffer::from_raw(width, height, 3, data).unwrap()
}

fn solid_gray(width: usize, height: usize) -> PixelBuffer {
    build_image(width, height, |_, _| [128, 128, 128])
}

#[test]
fn featureless_image_yields_the_first_candidate_with_zero_score() {
    init_logs();
    let image = solid_gray(100, 100);
    let mut params = CropParams::default();
    params.step = 50;

    let result = analyze_crops(&image, 50, 50, &params).unwrap();

    // scale tiers 1.0 and 0.9, each with x, y in {0, 50}
    assert_eq!(result.crops.len(), 8);
    let top = result.top_crop;
    assert_eq!((top.x, top.y, top.width, top.height), (0, 0, 50, 50));
    assert_eq!(top.score.total, 0.0);

    // a solid mid-gray frame carries no edge, saturation, skin, or boost mass
    assert!(result.feature_map.detail.iter().all(|&v| v == 0));
    assert!(result.feature_map.saturation.iter().all(|&v| v == 0));
    assert!(result.feature_map.skin.iter().all(|&v| v == 0));
    assert!(result.feature_map.boost.iter().all(|&v| v == 0));

    // the reported top is the maximum over the candidate list
    let max_total = result
        .crops
        .iter()
        .map(|c| c.score.total)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(top.score.total, max_total);
}

#[test]
fn boost_region_outweighs_distant_saturation() {
    init_logs();
    // featureless gray except a fully saturated red column at x = 80
    let image = build_image(100, 100, |x, _| {
        if x == 80 { [255, 0, 0] } else { [128, 128, 128] }
    });
    let mut params = CropParams::default();
    params.step = 10;
    params
        .boosts
        .push(BoostRegion::new(10.0, 10.0, 10.0, 10.0, 1.0));

    let result = analyze_crops(&image, 40, 40, &params).unwrap();

    // the boosted rectangle must end up inside the winning crop, beating
    // same-scale crops over the saturated column
    let top = result.top_crop;
    assert!(top.x <= 10, "top {top:?}");
    assert!(top.y <= 10, "top {top:?}");
    assert!(top.x + top.width >= 20, "top {top:?}");
    assert!(top.y + top.height >= 20, "top {top:?}");
    assert!(top.score.boost > 0.0);
}

#[test]
fn prescale_round_trip_agrees_within_grid_rounding() {
    init_logs();
    // saturated block centered at (114, 114) on a 220x220 gray frame
    let image = build_image(220, 220, |x, y| {
        if (94..134).contains(&x) && (94..134).contains(&y) {
            [255, 0, 0]
        } else {
            [128, 128, 128]
        }
    });

    let mut with_prescale = CropParams::default();
    with_prescale.prescale = true;
    let mut without_prescale = CropParams::default();
    without_prescale.prescale = false;

    let scaled = select_crop(&image, 180, 180, &with_prescale).unwrap();
    let exact = select_crop(&image, 180, 180, &without_prescale).unwrap();

    let (a, b) = (scaled.top_crop, exact.top_crop);
    let delta = |p: u32, q: u32| (p as i64 - q as i64).abs();
    assert!(delta(a.x, b.x) <= 8, "{a:?} vs {b:?}");
    assert!(delta(a.y, b.y) <= 8, "{a:?} vs {b:?}");
    assert!(delta(a.width, b.width) <= 8, "{a:?} vs {b:?}");
    assert!(delta(a.height, b.height) <= 8, "{a:?} vs {b:?}");
}

#[test]
fn every_returned_crop_stays_inside_the_source() {
    init_logs();
    // deterministic texture so the scan has non-trivial features
    let image = build_image(137, 91, |x, y| {
        [
            ((x * 31 + y * 17) % 256) as u8,
            ((x * 13 + y * 7) % 256) as u8,
            ((x * 5 + y * 29) % 256) as u8,
        ]
    });

    for (tw, th) in [(40, 30), (30, 40), (91, 91), (137, 91)] {
        let result = select_crop(&image, tw, th, &CropParams::default()).unwrap();
        for crop in &result.crops {
            assert!(crop.width > 0 && crop.height > 0, "{crop:?}");
            assert!(crop.x + crop.width <= 137, "target {tw}x{th}: {crop:?}");
            assert!(crop.y + crop.height <= 91, "target {tw}x{th}: {crop:?}");
        }
        assert_eq!(
            result.top_crop.score.total,
            result
                .crops
                .iter()
                .map(|c| c.score.total)
                .fold(f64::NEG_INFINITY, f64::max)
        );
    }
}

#[test]
fn oversized_crop_is_rejected_as_invalid_geometry() {
    init_logs();
    let image = solid_gray(100, 100);
    let mut params = CropParams::default();
    params.max_scale = 1.0;
    params.min_scale = 1.0;

    let err = analyze_crops(&image, 150, 150, &params).unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }));
}

#[test]
fn degenerate_inputs_are_rejected_before_analysis() {
    init_logs();
    assert!(matches!(
        PixelBuffer::from_raw(0, 100, 3, vec![]),
        Err(Error::DegenerateInput { .. })
    ));
    assert!(matches!(
        PixelBuffer::from_raw(100, 0, 3, vec![]),
        Err(Error::DegenerateInput { .. })
    ));

    let image = solid_gray(10, 10);
    assert!(matches!(
        select_crop(&image, 0, 10, &CropParams::default()),
        Err(Error::DegenerateInput { .. })
    ));
    assert!(matches!(
        analyze_crops(&image, 10, 0, &CropParams::default()),
        Err(Error::DegenerateInput { .. })
    ));
}

#[test]
fn boosts_are_rescaled_alongside_the_prescaled_image() {
    init_logs();
    // bright saturated distractor in the top-left, boost in the bottom-right:
    // with a correctly scaled boost the bottom-right crop must win
    let image = build_image(400, 400, |x, y| {
        if x < 40 && y < 40 {
            [255, 255, 0]
        } else {
            [128, 128, 128]
        }
    });
    let mut params = CropParams::default();
    params
        .boosts
        .push(BoostRegion::new(300.0, 300.0, 60.0, 60.0, 1.0));

    let result = select_crop(&image, 100, 100, &params).unwrap();
    let top = result.top_crop;
    assert!(
        top.x + top.width >= 300 && top.y + top.height >= 300,
        "boosted corner not covered: {top:?}"
    );
    assert!(top.score.boost > 0.0);
}
