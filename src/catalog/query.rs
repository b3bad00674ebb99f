/// Normalized free-text search input. `None` means a blank query;
/// blank queries never reach the backend, the caller renders an empty
/// state instead.
pub fn search_query(raw: Option<&str>) -> Option<String> {
    let q = raw.map(str::trim).unwrap_or_default();
    if q.is_empty() {
        None
    } else {
        Some(q.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::search_query;

    #[test]
    fn blank_input_means_no_backend_call() {
        assert_eq!(search_query(None), None);
        assert_eq!(search_query(Some("")), None);
        assert_eq!(search_query(Some("   ")), None);
        assert_eq!(search_query(Some("\t\n")), None);
    }

    #[test]
    fn real_input_is_trimmed() {
        assert_eq!(search_query(Some("doom")), Some("doom".to_string()));
        assert_eq!(search_query(Some("  half life  ")), Some("half life".to_string()));
    }
}
