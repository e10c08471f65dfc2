pub const DEFAULT_AUDIO_SRC: &str = "assets/music/valentine.mp3";
pub const DEFAULT_COVER_SRC: &str = "assets/generated/message-cover.dim_1200x800.png";
pub const DEFAULT_SURPRISE_SRC: &str = "assets/generated/shona-surprise.dim_724x962.jpg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub audio_src: String,
    pub cover_src: String,
    pub surprise_src: String,
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            cover_src: DEFAULT_COVER_SRC.to_string(),
            surprise_src: DEFAULT_SURPRISE_SRC.to_string(),
            debug: false,
        }
    }
}

impl PageConfig {
    /// Applies build-time asset overrides; blank values keep the default.
    pub fn with_assets(
        mut self,
        audio_src: Option<&str>,
        cover_src: Option<&str>,
        surprise_src: Option<&str>,
    ) -> Self {
        override_src(&mut self.audio_src, audio_src);
        override_src(&mut self.cover_src, cover_src);
        override_src(&mut self.surprise_src, surprise_src);
        self
    }

    /// Applies runtime flags from a location search string (`?debug=1`).
    pub fn with_query(mut self, search: &str) -> Self {
        let search = search.trim().trim_start_matches('?');
        if search.is_empty() {
            return self;
        }
        for (key, value) in url::form_urlencoded::parse(search.as_bytes()) {
            if key.eq_ignore_ascii_case("debug") {
                self.debug = parse_flag(&value);
            }
        }
        self
    }
}

fn override_src(slot: &mut String, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
        *slot = value.to_string();
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    // A bare `?debug` counts as on.
    value.is_empty()
        || ["1", "true", "yes", "on"]
            .iter()
            .any(|flag| value.eq_ignore_ascii_case(flag))
}
