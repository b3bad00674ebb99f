use crate::models::{ListingItem, Session};

/// Whether the viewer may use the download links for `item`.
///
/// UX only: the backend applies the same rule when serving the actual
/// links, and that check is the one that counts.
pub fn can_download(item: &ListingItem, session: Option<&Session>) -> bool {
    if !item.is_paid {
        return true;
    }
    match session {
        Some(s) => s.is_admin() || s.has_purchased(&item.id),
        None => false,
    }
}
