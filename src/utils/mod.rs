use itertools::Itertools;

/// Builds the list query URL from the three independent filter fields.
/// Plain string concatenation; the name parameter is always present,
/// status and species only when set.
pub fn build_search_url(base_url: &str, name: &str, status: &str, species: &str) -> String {
    let mut out = String::from(base_url.trim_end_matches('/'));
    out.push_str("/character/?name=");
    out.push_str(name);
    if !status.is_empty() {
        out.push_str("&status=");
        out.push_str(status);
    }
    if !species.is_empty() {
        out.push_str("&species=");
        out.push_str(species);
    }
    out
}

/// Extracts the episode identifier from a full episode URL by taking the
/// segment after the last `episode/`. URLs without the marker pass through
/// untouched (the API's JSON is trusted as-is).
pub fn episode_id(url: &str) -> &str {
    match url.rsplit_once("episode/") {
        Some((_, id)) => id,
        None => url,
    }
}

pub fn join_episode_ids(urls: &[String]) -> String {
    urls.iter().map(|url| episode_id(url)).join(", ")
}
