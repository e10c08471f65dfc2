use valentine_core::attribution::ATTRIBUTION_BASE;
use valentine_core::{attribution_url, PageConfig};

pub(crate) fn load_page_config() -> PageConfig {
    let config = PageConfig::default().with_assets(
        option_env!("VALENTINE_AUDIO_SRC"),
        option_env!("VALENTINE_COVER_SRC"),
        option_env!("VALENTINE_SURPRISE_SRC"),
    );
    let Some(window) = web_sys::window() else {
        return config;
    };
    let search = window.location().search().unwrap_or_default();
    config.with_query(&search)
}

/// `None` only without a window; `file://` pages yield an empty host.
pub(crate) fn current_hostname() -> Option<String> {
    let window = web_sys::window()?;
    Some(window.location().hostname().unwrap_or_default())
}

pub(crate) fn attribution_href() -> String {
    match attribution_url(current_hostname().as_deref()) {
        Ok(url) => url.into(),
        Err(err) => {
            gloo::console::warn!("attribution link fallback", err.to_string());
            ATTRIBUTION_BASE.to_string()
        }
    }
}

pub(crate) fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
