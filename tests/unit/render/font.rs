use super::*;

#[test]
fn missing_paths_fall_back_to_bitmap() {
    let fonts = FontProvider::with_paths(["/nonexistent/imagen/font.ttf"]);
    assert!(matches!(fonts.face(), FontFace::Bitmap));
    assert!(matches!(FontProvider::default().face(), FontFace::Bitmap));
}

#[test]
fn unparseable_file_is_skipped() {
    let path = std::env::temp_dir().join(format!("imagen-not-a-font-{}.ttf", std::process::id()));
    std::fs::write(&path, b"definitely not a font").unwrap();
    let fonts = FontProvider::with_paths([&path]);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(fonts.face(), FontFace::Bitmap));
}

#[test]
fn describe_names_the_face() {
    assert_eq!(FontFace::Bitmap.describe(), "built-in bitmap");
    let face = FontFace::TrueType {
        path: PathBuf::from("/fonts/x.ttf"),
        bytes: Arc::new(Vec::new()),
    };
    assert_eq!(face.describe(), "/fonts/x.ttf");
}
