use valentine_core::config::{DEFAULT_AUDIO_SRC, DEFAULT_COVER_SRC};
use valentine_core::PageConfig;

#[test]
fn defaults_point_at_bundled_assets() {
    let config = PageConfig::default();
    assert_eq!(config.audio_src, DEFAULT_AUDIO_SRC);
    assert_eq!(config.cover_src, DEFAULT_COVER_SRC);
    assert!(!config.debug);
}

#[test]
fn asset_overrides_ignore_blank_values() {
    let config = PageConfig::default().with_assets(Some(" music/song.ogg "), Some("   "), None);
    assert_eq!(config.audio_src, "music/song.ogg");
    assert_eq!(config.cover_src, DEFAULT_COVER_SRC);
}

#[test]
fn debug_flag_from_query() {
    assert!(PageConfig::default().with_query("?debug=1").debug);
    assert!(PageConfig::default().with_query("debug=TRUE&x=2").debug);
    assert!(PageConfig::default().with_query("?debug").debug);
    assert!(!PageConfig::default().with_query("?debug=0").debug);
    assert!(!PageConfig::default().with_query("").debug);
    assert!(!PageConfig::default().with_query("?other=1").debug);
}
