use rand::{SeedableRng, rngs::StdRng};

use super::*;

fn red() -> ColorSpec {
    ColorSpec::Resolved(Rgba8::rgb(255, 0, 0))
}

fn blue() -> ColorSpec {
    ColorSpec::Resolved(Rgba8::rgb(0, 0, 255))
}

#[test]
fn multi_color_modes_reject_fewer_than_two_colors() {
    for err in [
        BackgroundSpec::tiled(vec![red()], 8).unwrap_err(),
        BackgroundSpec::noise(vec![], 8).unwrap_err(),
        BackgroundSpec::gradient(vec![blue()], 0.0).unwrap_err(),
    ] {
        assert!(matches!(err, ImagenError::InsufficientColors { .. }), "{err}");
    }
    let err = BackgroundSpec::gradient(vec![blue()], 0.0).unwrap_err();
    assert!(matches!(
        err,
        ImagenError::InsufficientColors {
            mode: "gradient",
            got: 1
        }
    ));
}

#[test]
fn zero_tile_size_falls_back() {
    let bg = BackgroundSpec::tiled(vec![red(), blue()], 0).unwrap();
    assert_eq!(
        bg,
        BackgroundSpec::Tiled {
            colors: vec![red(), blue()],
            tile_size: FALLBACK_TILE_SIZE
        }
    );
}

#[test]
fn defaults_describe_gray_placeholder() {
    let cfg = ImageConfig::default();
    assert_eq!((cfg.width, cfg.height), (256, 192));
    assert_eq!(cfg.background, BackgroundSpec::solid(Rgba8::GRAY));
    assert_eq!(cfg.border.width, 0);
    assert_eq!(cfg.border.color, ColorSpec::Resolved(Rgba8::BLACK));
    assert_eq!(cfg.text.text, "{w}x{h}");
    assert_eq!(cfg.text.size_pt, 20.0);
    assert_eq!(cfg.text.color, None);
    assert_eq!(cfg.format, "png");
}

#[test]
fn resolve_keeps_fixed_colors_and_redraws_random() {
    let cfg = ImageConfig {
        background: BackgroundSpec::gradient(vec![red(), ColorSpec::Random], 45.0).unwrap(),
        border: BorderSpec {
            width: 3,
            color: blue(),
        },
        ..ImageConfig::default()
    };
    assert!(cfg.background.has_random());

    let mut rng = StdRng::seed_from_u64(1);
    let a = cfg.resolve(&mut rng).unwrap();
    let b = cfg.resolve(&mut rng).unwrap();

    let (ResolvedBackground::Gradient { colors: ca, .. }, ResolvedBackground::Gradient { colors: cb, .. }) =
        (&a.background, &b.background)
    else {
        panic!("expected gradients");
    };
    assert_eq!(ca[0], Rgba8::rgb(255, 0, 0));
    assert_eq!(cb[0], Rgba8::rgb(255, 0, 0));
    assert_ne!(ca[1], cb[1]);
    assert_eq!(a.border_color, Rgba8::rgb(0, 0, 255));
    assert_eq!(a.border_width, 3);
}

#[test]
fn resolve_is_reproducible_for_a_seed() {
    let cfg = ImageConfig {
        background: BackgroundSpec::noise(vec![ColorSpec::Random, red()], 4).unwrap(),
        ..ImageConfig::default()
    };
    let a = cfg.resolve(&mut StdRng::seed_from_u64(99)).unwrap();
    let b = cfg.resolve(&mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn resolve_rejects_empty_canvas() {
    let cfg = ImageConfig {
        width: 0,
        ..ImageConfig::default()
    };
    let err = cfg.resolve(&mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidSize { .. }));
}

#[test]
fn config_serializes_with_mode_tag() {
    let cfg = ImageConfig {
        background: BackgroundSpec::tiled(vec![red(), ColorSpec::Random], 10).unwrap(),
        ..ImageConfig::default()
    };
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["background"]["mode"], "tiled");
    assert_eq!(v["background"]["colors"], serde_json::json!(["#ff0000", "random"]));
    assert_eq!(v["background"]["tile_size"], 10);
    assert_eq!(v["format"], "png");
}
