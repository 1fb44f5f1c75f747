use super::*;

use crate::foundation::core::Rgba8;

fn style() -> StyleConfig {
    StyleConfig {
        placeholder_size: 8,
        ..StyleConfig::default()
    }
}

fn temp_covers_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "coverwall_covers_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn placeholder_provider_uses_blank_fill_and_size() {
    let style = style();
    let provider = PlaceholderCovers::new(&style);
    let img = provider.resolve(&LabelPair::new("a", "b"));
    assert_eq!(img.width, 8);
    assert_eq!(img.height, 8);
    assert_eq!(&img.rgba8_premul[..4], Rgba8::opaque(20, 20, 20).premultiplied());
}

#[test]
fn directory_miss_substitutes_missing_fill() {
    let dir = temp_covers_dir("miss");
    let provider = DirectoryCovers::new(&dir, &style());
    let img = provider.resolve(&LabelPair::new("Nobody", "Nothing"));
    assert_eq!(img.width, 8);
    assert_eq!(&img.rgba8_premul[..4], Rgba8::opaque(25, 25, 25).premultiplied());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn directory_blank_entry_substitutes_blank_fill() {
    let dir = temp_covers_dir("blank");
    let provider = DirectoryCovers::new(&dir, &style());
    let img = provider.resolve(&LabelPair::default());
    assert_eq!(&img.rgba8_premul[..4], Rgba8::opaque(20, 20, 20).premultiplied());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn directory_hit_decodes_the_cover_file() {
    let dir = temp_covers_dir("hit");
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 200, 30, 255]));
    img.save(dir.join("Radiohead - In Rainbows.png")).unwrap();

    let provider = DirectoryCovers::new(&dir, &style());
    let resolved = provider.resolve(&LabelPair::new("Radiohead", "In Rainbows"));
    assert_eq!(resolved.width, 4);
    assert_eq!(&resolved.rgba8_premul[..4], [10, 200, 30, 255]);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn directory_undecodable_cover_substitutes_missing_fill() {
    let dir = temp_covers_dir("bad");
    std::fs::write(dir.join("X.png"), b"definitely not a png").unwrap();

    let provider = DirectoryCovers::new(&dir, &style());
    let resolved = provider.resolve(&LabelPair::new("", "X"));
    assert_eq!(resolved.width, 8);
    assert_eq!(&resolved.rgba8_premul[..4], Rgba8::opaque(25, 25, 25).premultiplied());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn resolve_covers_preserves_order_and_length() {
    let style = style();
    let provider = PlaceholderCovers::new(&style);
    let pairs = vec![LabelPair::new("a", "b"), LabelPair::new("c", "d")];
    let images = resolve_covers(&provider, &pairs);
    assert_eq!(images.len(), 2);
}
