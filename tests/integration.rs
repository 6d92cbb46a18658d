// SPDX-License-Identifier: MPL-2.0
use iced::Point;
use iced_showcase::config::{self, Config, GeneralConfig};
use iced_showcase::i18n::fluent::I18n;
use iced_showcase::media::{self, Manifest, MediaItem};
use iced_showcase::ui::carousel::{self, AutoPlay};
use iced_showcase::ui::lightbox;
use iced_showcase::ui::masonry;
use iced_showcase::ui::state::Direction;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

const MANIFEST: &str = r#"
title = "Summer"

[[media]]
url = "photos/beach.jpg"
caption = "Beach"
location = "Biarritz"
featured = true

[[media]]
url = "photos/dunes.jpg"
featured = true

[[media]]
url = "https://cdn.example.org/clips/surf.mp4?sig=abc"
type = "video"
caption = "Surf"
featured = true

[[media]]
url = "photos/market.jpg"
"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // The command line wins over the file.
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn test_every_locale_translates_the_page_chrome() {
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in [
            "window-title",
            "featured-title",
            "gallery-title",
            "gallery-empty",
            "share-link-copied",
            "notification-manifest-error",
        ] {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{lang} lacks {key}"
            );
        }
    }
}

#[tokio::test]
async fn test_manifest_load_resolves_relative_paths() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("media.toml");
    std::fs::write(&path, MANIFEST).expect("Failed to write manifest");

    let manifest = media::manifest::load(path).await.expect("manifest loads");

    assert_eq!(manifest.title.as_deref(), Some("Summer"));
    assert_eq!(manifest.counts(), (3, 1));
    assert_eq!(
        std::path::PathBuf::from(&manifest.media[0].url),
        dir.path().join("photos/beach.jpg")
    );
    assert!(manifest.media[2].url.starts_with("https://"));
}

#[test]
fn test_carousel_click_opens_lightbox_on_same_slide() {
    let manifest = Manifest::parse(MANIFEST).expect("manifest parses");
    let featured: Arc<[MediaItem]> = Arc::from(manifest.featured());
    assert_eq!(featured.len(), 3);

    let mut carousel = carousel::State::new(
        Arc::clone(&featured),
        AutoPlay::new(true, Duration::from_secs(5)),
    );
    carousel.handle(carousel::Message::Navigate(Direction::Previous));
    assert_eq!(carousel.index(), 2);

    carousel.handle(carousel::Message::DragMoved(Point::new(300.0, 100.0)));
    carousel.handle(carousel::Message::DragStarted);
    let effect = carousel.handle(carousel::Message::DragEnded);
    assert_eq!(effect, carousel::Effect::Open(2));

    let carousel::Effect::Open(index) = effect else {
        unreachable!()
    };
    let lightbox =
        lightbox::State::new(Arc::clone(carousel.items()), index, false).expect("non-empty");
    assert_eq!(lightbox.current().caption.as_deref(), Some("Surf"));
    assert!(!lightbox.can_zoom());
}

#[test]
fn test_lightbox_session_over_gallery() {
    let manifest = Manifest::parse(MANIFEST).expect("manifest parses");
    let gallery: Arc<[MediaItem]> = Arc::from(manifest.media);
    let mut lightbox = lightbox::State::new(gallery, 0, false).expect("non-empty");

    lightbox.handle(lightbox::Message::ZoomIn);
    lightbox.handle(lightbox::Message::ZoomIn);
    assert!(lightbox.can_pan());

    lightbox.handle(lightbox::Message::Navigate(Direction::Next));
    assert_eq!(lightbox.index(), 1);
    assert!((lightbox.zoom() - 1.0).abs() < f32::EPSILON);

    // Fullscreen only flips once the window reports it.
    let effect = lightbox.handle(lightbox::Message::ToggleFullscreen);
    assert_eq!(effect, lightbox::Effect::RequestFullscreen(true));
    assert!(!lightbox.is_fullscreen());
    lightbox.handle(lightbox::Message::FullscreenChanged(true));
    assert!(lightbox.is_fullscreen());

    lightbox.handle(lightbox::Message::JumpTo(2));
    match lightbox.handle(lightbox::Message::Download) {
        lightbox::Effect::Download { file_name, .. } => assert_eq!(file_name, "surf.mp4"),
        other => panic!("expected a download, got {other:?}"),
    }

    lightbox.handle(lightbox::Message::JumpTo(3));
    lightbox.handle(lightbox::Message::Navigate(Direction::Next));
    assert_eq!(lightbox.index(), 3);
    assert_eq!(
        lightbox.handle(lightbox::Message::Close),
        lightbox::Effect::Close
    );
}

#[test]
fn test_masonry_layout_of_manifest() {
    let manifest = Manifest::parse(MANIFEST).expect("manifest parses");
    let columns = masonry::distribute(&manifest.media, 3);

    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0].len(), 2);
    assert_eq!(columns[0][1].url, "photos/market.jpg");
    assert_eq!(masonry::distribute(&manifest.media, 3), columns);
}
