use crate::foundation::core::Rgba8;

use super::*;

fn request() -> BatchRequest {
    BatchRequest::default()
}

#[test]
fn defaults_plan_one_gray_image() {
    let items = request().plan().unwrap();
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!((item.width, item.height), (256, 192));
    assert_eq!(item.filename, "image.png");
    assert_eq!(item.mode, "solid");
    assert_eq!(item.config.background, BackgroundSpec::solid(Rgba8::GRAY));
}

#[test]
fn enumeration_is_rounds_then_sizes_then_definitions() {
    let req = BatchRequest {
        sizes: vec!["10x10".into(), "20x5".into()],
        definitions: vec![
            (DefinitionMode::Solid, "red".into()),
            (DefinitionMode::Gradient, "red,blue:90".into()),
        ],
        filename: "out/{w}x{h}.png".into(),
        rounds: 2,
        ..request()
    };
    let items = req.plan().unwrap();
    let order: Vec<(u32, u32, &str)> = items.iter().map(|i| (i.round, i.width, i.mode)).collect();
    assert_eq!(
        order,
        vec![
            (1, 10, "solid"),
            (1, 10, "gradient"),
            (1, 20, "solid"),
            (1, 20, "gradient"),
            (2, 10, "solid"),
            (2, 10, "gradient"),
            (2, 20, "solid"),
            (2, 20, "gradient"),
        ]
    );
    assert_eq!(items[0].filename, "out/10x10-0001.png");
    assert_eq!(items[7].filename, "out/20x5-0008.png");
    assert!(items.iter().enumerate().all(|(i, item)| item.number == i + 1));
}

#[test]
fn text_color_priority() {
    let req = BatchRequest {
        definitions: vec![
            (DefinitionMode::Solid, "navy:t:yellow".into()),
            (DefinitionMode::Solid, "navy".into()),
        ],
        text_color: Some("red".into()),
        ..request()
    };
    let items = req.plan().unwrap();
    assert_eq!(
        items[0].config.text.color,
        Some(ColorSpec::Resolved(Rgba8::rgb(255, 255, 0)))
    );
    assert_eq!(
        items[1].config.text.color,
        Some(ColorSpec::Resolved(Rgba8::rgb(255, 0, 0)))
    );

    let items = BatchRequest {
        definitions: vec![(DefinitionMode::Solid, "navy".into())],
        ..request()
    }
    .plan()
    .unwrap();
    assert_eq!(items[0].config.text.color, None);
}

#[test]
fn border_and_text_settings_reach_every_item() {
    let req = BatchRequest {
        sizes: vec!["4x4".into(), "8x8".into()],
        border: Some("3,white".into()),
        text: "hi {w}".into(),
        text_size: 12.0,
        text_angle: 30.0,
        format: "JPG".into(),
        ..request()
    };
    for item in req.plan().unwrap() {
        assert_eq!(item.config.border.width, 3);
        assert_eq!(item.config.border.color, ColorSpec::Resolved(Rgba8::WHITE));
        assert_eq!(item.config.text.text, "hi {w}");
        assert_eq!(item.config.text.size_pt, 12.0);
        assert_eq!(item.config.text.angle_deg, 30.0);
        assert_eq!(item.config.format, "JPG");
    }
}

#[test]
fn invalid_inputs_fail_before_planning() {
    let bad_size = BatchRequest {
        sizes: vec!["10x10".into(), "400".into()],
        ..request()
    };
    assert!(matches!(bad_size.plan().unwrap_err(), ImagenError::InvalidSize { .. }));

    let bad_format = BatchRequest {
        format: "gif".into(),
        ..request()
    };
    assert!(matches!(
        bad_format.plan().unwrap_err(),
        ImagenError::UnsupportedFormat { .. }
    ));

    let bad_border = BatchRequest {
        border: Some("5".into()),
        ..request()
    };
    assert!(matches!(bad_border.plan().unwrap_err(), ImagenError::InvalidSegment { .. }));

    let bad_definition = BatchRequest {
        definitions: vec![(DefinitionMode::Noise, "red".into())],
        ..request()
    };
    assert!(matches!(
        bad_definition.plan().unwrap_err(),
        ImagenError::InsufficientColors { .. }
    ));

    let no_rounds = BatchRequest {
        rounds: 0,
        ..request()
    };
    assert!(no_rounds.plan().is_err());

    let bad_text_color = BatchRequest {
        text_color: Some("nope".into()),
        ..request()
    };
    assert!(matches!(
        bad_text_color.plan().unwrap_err(),
        ImagenError::InvalidColor { .. }
    ));
}

#[test]
fn filename_numbering() {
    assert_eq!(number_filename("image.png", 1, 1, 10, 20), "image.png");
    assert_eq!(number_filename("image.png", 3, 12, 10, 20), "image-0003.png");
    assert_eq!(number_filename("a.b.jpg", 12, 20, 1, 1), "a.b-0012.jpg");
    assert_eq!(number_filename("noext", 2, 2, 1, 1), "noext-0002");
    assert_eq!(
        number_filename("img_{w}x{h}_{nr}.png", 7, 9, 640, 480),
        "img_640x480_7-0007.png"
    );
    assert_eq!(number_filename("{nr}.png", 1, 1, 1, 1), "1.png");
}
