//! Shareable links carrying a profile code as `?profile=<code>`.

use url::Url;

use super::code::ProfileCode;

/// Query parameter that carries the code.
pub const PROFILE_QUERY_PARAM: &str = "profile";

/// `base` with `profile=<code>` set, replacing any existing value.
pub fn share_url(base: &Url, code: &ProfileCode) -> Url {
    let mut url = strip_profile_param(base);
    url.query_pairs_mut()
        .append_pair(PROFILE_QUERY_PARAM, code.as_str());
    url
}

/// The raw `profile` parameter value, if any. Not validated or decoded.
pub fn code_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == PROFILE_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// `url` with every `profile` parameter removed and other parameters kept.
pub fn strip_profile_param(url: &Url) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PROFILE_QUERY_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut stripped = url.clone();
    if kept.is_empty() {
        stripped.set_query(None);
    } else {
        stripped.query_pairs_mut().clear().extend_pairs(kept);
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ProfileCode {
        ProfileCode::parse(s).unwrap()
    }

    #[test]
    fn share_url_appends_profile_param() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let url = share_url(&base, &code("wise-oak-bridge"));
        assert_eq!(url.as_str(), "http://localhost:8080/?profile=wise-oak-bridge");
    }

    #[test]
    fn share_url_keeps_other_params_and_replaces_profile() {
        let base = Url::parse("https://learn.example.org/start?lang=en&profile=old-code-here").unwrap();
        let url = share_url(&base, &code("swift-falcon-peak"));
        assert_eq!(
            url.as_str(),
            "https://learn.example.org/start?lang=en&profile=swift-falcon-peak"
        );
    }

    #[test]
    fn code_from_url_reads_param() {
        let url = Url::parse("https://learn.example.org/?profile=bright-eagle-summit").unwrap();
        assert_eq!(code_from_url(&url).as_deref(), Some("bright-eagle-summit"));
    }

    #[test]
    fn code_from_url_missing() {
        let url = Url::parse("https://learn.example.org/?lang=en").unwrap();
        assert_eq!(code_from_url(&url), None);
    }

    #[test]
    fn strip_removes_only_profile() {
        let url = Url::parse("https://learn.example.org/a?profile=x-y-z&lang=en").unwrap();
        assert_eq!(strip_profile_param(&url).as_str(), "https://learn.example.org/a?lang=en");
    }

    #[test]
    fn strip_drops_empty_query() {
        let url = Url::parse("https://learn.example.org/a?profile=x-y-z").unwrap();
        assert_eq!(strip_profile_param(&url).as_str(), "https://learn.example.org/a");
    }

    #[test]
    fn share_then_read_back() {
        let base = Url::parse("http://localhost:8080/learn").unwrap();
        let url = share_url(&base, &code("melodic-pine-flow"));
        assert_eq!(code_from_url(&url).as_deref(), Some("melodic-pine-flow"));
        assert_eq!(strip_profile_param(&url), base);
    }
}
