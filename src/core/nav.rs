/// Used when the location path ends in `/`.
pub const INDEX_PAGE: &str = "index.html";

/// Drops any query or fragment.
fn strip_suffix(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or("")
}

/// File name of the page being shown, `index.html` for directory paths.
pub fn page_file_name(path: &str) -> &str {
    match strip_suffix(path).rsplit('/').next().unwrap_or("") {
        "" => INDEX_PAGE,
        name => name,
    }
}

/// File name a nav `href` points at, or `None` when it names no page on this
/// site (fragment or query only, absolute URL, bare directory).
pub fn href_file_name(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.contains("://") || href.starts_with("//") || href.starts_with("mailto:") {
        return None;
    }
    match strip_suffix(href) {
        "" => None,
        "/" | "./" => Some(INDEX_PAGE),
        path => path.rsplit('/').next().filter(|name| !name.is_empty()),
    }
}

/// Whether each nav link points at the current page.
pub fn active_links<S: AsRef<str>>(path: &str, hrefs: &[S]) -> Vec<bool> {
    let current = page_file_name(path);
    hrefs
        .iter()
        .map(|href| href_file_name(href.as_ref()) == Some(current))
        .collect()
}
