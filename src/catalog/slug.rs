/// URL slug for titles and platform names: lowercased, non-word
/// characters stripped, whitespace collapsed to single hyphens.
/// Must stay in sync with the backend's sitemap expectations.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = !out.is_empty();
        } else if c.is_alphanumeric() || c == '_' {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        }
        // Everything else (punctuation, symbols) is dropped.
    }

    out
}
