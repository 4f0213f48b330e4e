use crate::{config::model::FALLBACK_TILE_SIZE, foundation::core::Rgba8};

use super::*;

fn fixed(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec::Resolved(Rgba8::rgb(r, g, b))
}

#[test]
fn size_accepts_w_x_h() {
    assert_eq!(parse_size("400x300").unwrap(), (400, 300));
    assert_eq!(parse_size("1x1").unwrap(), (1, 1));
}

#[test]
fn size_rejects_malformed_and_non_positive() {
    for input in ["400", "400x", "x300", "400x300x2", "axb", "0x10", "10x-1", "", "4.5x3"] {
        let err = parse_size(input).unwrap_err();
        assert!(
            matches!(err, ImagenError::InvalidSize { .. }),
            "{input}: {err}"
        );
    }
}

#[test]
fn solid_definition_with_text_override() {
    let def = parse_definition("blue:t:white", DefinitionMode::Solid).unwrap();
    assert_eq!(def.background, BackgroundSpec::solid(Rgba8::rgb(0, 0, 255)));
    assert_eq!(def.text_color, Some(fixed(255, 255, 255)));

    let def = parse_definition("random", DefinitionMode::Solid).unwrap();
    assert_eq!(
        def.background,
        BackgroundSpec::Solid {
            color: ColorSpec::Random
        }
    );
    assert_eq!(def.text_color, None);
}

#[test]
fn gradient_definition_with_angle_and_text_color() {
    let def = parse_definition("red,blue,00ff00:45.5:t:black", DefinitionMode::Gradient).unwrap();
    assert_eq!(
        def.background,
        BackgroundSpec::Gradient {
            colors: vec![fixed(255, 0, 0), fixed(0, 0, 255), fixed(0, 255, 0)],
            angle_deg: 45.5,
        }
    );
    assert_eq!(def.text_color, Some(fixed(0, 0, 0)));

    let def = parse_definition("red, blue", DefinitionMode::Gradient).unwrap();
    assert!(matches!(
        def.background,
        BackgroundSpec::Gradient { angle_deg, .. } if angle_deg == 0.0
    ));
}

#[test]
fn tiled_and_noise_definitions_take_tile_size() {
    let def = parse_definition("red,blue:10", DefinitionMode::Tiled).unwrap();
    assert_eq!(
        def.background,
        BackgroundSpec::Tiled {
            colors: vec![fixed(255, 0, 0), fixed(0, 0, 255)],
            tile_size: 10,
        }
    );

    let def = parse_definition("red,random", DefinitionMode::Noise).unwrap();
    assert_eq!(
        def.background,
        BackgroundSpec::Noise {
            colors: vec![fixed(255, 0, 0), ColorSpec::Random],
            tile_size: DEFAULT_TILE_SIZE,
        }
    );

    let def = parse_definition("red,blue:-3", DefinitionMode::Tiled).unwrap();
    assert!(matches!(
        def.background,
        BackgroundSpec::Tiled { tile_size, .. } if tile_size == FALLBACK_TILE_SIZE
    ));
}

#[test]
fn definitions_reject_bad_input() {
    let err = parse_definition("red", DefinitionMode::Gradient).unwrap_err();
    assert!(matches!(
        err,
        ImagenError::InsufficientColors {
            mode: "gradient",
            got: 1
        }
    ));
    let err = parse_definition("red:12", DefinitionMode::Tiled).unwrap_err();
    assert!(matches!(err, ImagenError::InsufficientColors { mode: "tiled", .. }));

    let err = parse_definition("red,blue:abc", DefinitionMode::Gradient).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidSegment { .. }), "{err}");
    let err = parse_definition("red,blue:1.5", DefinitionMode::Noise).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidSegment { .. }), "{err}");
    let err = parse_definition("red,blue:10:20", DefinitionMode::Tiled).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidSegment { .. }), "{err}");
    let err = parse_definition("red,blue:inf", DefinitionMode::Gradient).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidSegment { .. }), "{err}");

    let err = parse_definition("red,bleu", DefinitionMode::Gradient).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidColor { ref token } if token == "bleu"));
    let err = parse_definition("red:t:nope", DefinitionMode::Solid).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidColor { .. }));
    let err = parse_definition("red:t:blue:t:white", DefinitionMode::Solid).unwrap_err();
    assert!(matches!(err, ImagenError::InvalidSegment { .. }));
}

#[test]
fn border_forms() {
    let b = parse_border("5,ffffff", true).unwrap();
    assert_eq!(b.width, 5);
    assert_eq!(b.color, fixed(255, 255, 255));

    let b = parse_border(" 2 , red ", true).unwrap();
    assert_eq!((b.width, b.color), (2, fixed(255, 0, 0)));

    let b = parse_border("3", false).unwrap();
    assert_eq!((b.width, b.color), (3, fixed(0, 0, 0)));

    assert!(parse_border("3", true).is_err());
    assert!(parse_border("x,red", false).is_err());
    assert!(parse_border("-1,red", false).is_err());
    assert!(parse_border("1,red,blue", false).is_err());
    assert!(matches!(
        parse_border("1,nope", false).unwrap_err(),
        ImagenError::InvalidColor { .. }
    ));
}

#[test]
fn split_quoted_keeps_commas_inside_quotes() {
    assert_eq!(
        split_quoted(r#""hello, world",s:26,c:yellow"#),
        vec![r#""hello, world""#, "s:26", "c:yellow"]
    );
    assert_eq!(split_quoted(r#""a",,b,"#), vec![r#""a""#, "b"]);
    assert_eq!(split_quoted(""), Vec::<String>::new());
    assert_eq!(split_quoted(r#""open, quote"#), vec![r#""open, quote"#]);
    assert_eq!(split_quoted("plain"), vec!["plain"]);
}
