use super::*;

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);
const GREEN: Rgba8 = Rgba8::rgb(0, 255, 0);

fn px(img: &RgbaImage, x: u32, y: u32) -> Rgba8 {
    Rgba8::from(*img.get_pixel(x, y))
}

#[test]
fn solid_fills_every_pixel() {
    let mut img = RgbaImage::new(7, 3);
    fill_background(&mut img, &ResolvedBackground::Solid(GREEN));
    assert!(img.pixels().all(|p| Rgba8::from(*p) == GREEN));
}

#[test]
fn tiled_round_robin_in_row_major_order() {
    let mut img = RgbaImage::new(6, 4);
    fill_background(
        &mut img,
        &ResolvedBackground::Tiled {
            colors: vec![RED, BLUE],
            tile_size: 2,
        },
    );
    // Three tiles per row, so the second row starts on BLUE.
    assert_eq!(px(&img, 0, 0), RED);
    assert_eq!(px(&img, 1, 1), RED);
    assert_eq!(px(&img, 2, 0), BLUE);
    assert_eq!(px(&img, 4, 1), RED);
    assert_eq!(px(&img, 0, 2), BLUE);
    assert_eq!(px(&img, 2, 3), RED);
    assert_eq!(px(&img, 5, 3), BLUE);

    let mut again = RgbaImage::new(6, 4);
    fill_background(
        &mut again,
        &ResolvedBackground::Tiled {
            colors: vec![RED, BLUE],
            tile_size: 2,
        },
    );
    assert_eq!(img, again);
}

#[test]
fn tiles_are_clipped_at_the_edges() {
    let mut img = RgbaImage::new(5, 5);
    fill_background(
        &mut img,
        &ResolvedBackground::Tiled {
            colors: vec![RED, BLUE, GREEN],
            tile_size: 2,
        },
    );
    // Tile 8 is the clipped bottom-right cell.
    assert_eq!(px(&img, 4, 4), GREEN);
    assert_eq!(px(&img, 4, 0), GREEN);
}

#[test]
fn single_color_noise_is_uniform() {
    let mut img = RgbaImage::new(20, 20);
    fill_background(
        &mut img,
        &ResolvedBackground::Noise {
            colors: vec![BLUE],
            tile_size: 3,
            seed: 99,
        },
    );
    assert!(img.pixels().all(|p| Rgba8::from(*p) == BLUE));
}

#[test]
fn noise_is_deterministic_per_seed_and_uses_palette() {
    let bg = |seed| ResolvedBackground::Noise {
        colors: vec![RED, BLUE],
        tile_size: 1,
        seed,
    };
    let mut a = RgbaImage::new(16, 16);
    let mut b = RgbaImage::new(16, 16);
    let mut c = RgbaImage::new(16, 16);
    fill_background(&mut a, &bg(1));
    fill_background(&mut b, &bg(1));
    fill_background(&mut c, &bg(2));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.pixels().all(|p| {
        let p = Rgba8::from(*p);
        p == RED || p == BLUE
    }));
}

#[test]
fn gradient_starts_on_first_stop() {
    let mut img = RgbaImage::new(10, 4);
    fill_background(
        &mut img,
        &ResolvedBackground::Gradient {
            colors: vec![RED, BLUE],
            angle_deg: 90.0,
        },
    );
    assert_eq!(px(&img, 0, 0), RED);
    assert_eq!(px(&img, 0, 3), RED);
    let last = px(&img, 9, 0);
    assert!(last.b > 200 && last.r < 50, "{last:?}");

    let mut img = RgbaImage::new(4, 10);
    fill_background(
        &mut img,
        &ResolvedBackground::Gradient {
            colors: vec![RED, BLUE],
            angle_deg: 0.0,
        },
    );
    assert_eq!(px(&img, 3, 0), RED);
    assert_eq!(px(&img, 0, 9), px(&img, 3, 9));
}

#[test]
fn gradient_on_single_pixel_canvas() {
    let mut img = RgbaImage::new(1, 1);
    fill_background(
        &mut img,
        &ResolvedBackground::Gradient {
            colors: vec![RED, BLUE],
            angle_deg: 45.0,
        },
    );
    assert_eq!(px(&img, 0, 0), RED);
}

#[test]
fn gradient_color_hits_stops_exactly() {
    assert_eq!(gradient_color(&[RED, BLUE], 0.0), RED);
    assert_eq!(gradient_color(&[RED, BLUE], 1.0), BLUE);

    let stops = [RED, GREEN, BLUE];
    assert_eq!(gradient_color(&stops, 0.0), RED);
    assert_eq!(gradient_color(&stops, 0.5), GREEN);
    assert_eq!(gradient_color(&stops, 1.0), BLUE);

    let stops = [RED, GREEN, BLUE, Rgba8::WHITE];
    assert_eq!(gradient_color(&stops, 1.0 / 3.0), GREEN);
    assert_eq!(gradient_color(&stops, 2.0 / 3.0), BLUE);
    assert_eq!(gradient_color(&stops, 1.0), Rgba8::WHITE);
}

#[test]
fn gradient_color_interpolates_within_segment() {
    let mid = gradient_color(&[Rgba8::BLACK, Rgba8::WHITE], 0.5);
    assert_eq!(mid, Rgba8::rgb(128, 128, 128));
}
