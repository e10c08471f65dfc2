use url::Url;

pub const ATTRIBUTION_BASE: &str = "https://caffeine.ai/";
pub const ATTRIBUTION_FALLBACK_HOST: &str = "valentine-app";

/// Footer link carrying the current host name as `utm_content`. The fallback
/// host applies only when there is no window; an empty host name (`file://`)
/// is sent as is.
pub fn attribution_url(hostname: Option<&str>) -> Result<Url, url::ParseError> {
    let host = hostname.map_or(ATTRIBUTION_FALLBACK_HOST, str::trim);
    let mut url = Url::parse(ATTRIBUTION_BASE)?;
    url.query_pairs_mut()
        .append_pair("utm_source", "Caffeine-footer")
        .append_pair("utm_medium", "referral")
        .append_pair("utm_content", host);
    Ok(url)
}
