use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend identifier for a platform/content bucket.
///
/// The key set is fixed by the backend; the `s` prefix marks the
/// software variant of a platform (`spc` = PC softwares).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Pc,
    Spc,
    Mac,
    Smac,
    Android,
    Sandroid,
    Ppsspp,
    Ps2,
    Ps3,
    Ps4,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 10] = [
        CategoryKey::Pc,
        CategoryKey::Spc,
        CategoryKey::Mac,
        CategoryKey::Smac,
        CategoryKey::Android,
        CategoryKey::Sandroid,
        CategoryKey::Ppsspp,
        CategoryKey::Ps2,
        CategoryKey::Ps3,
        CategoryKey::Ps4,
    ];

    /// Wire form used in `/api/apps/category/<key>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Pc => "pc",
            CategoryKey::Spc => "spc",
            CategoryKey::Mac => "mac",
            CategoryKey::Smac => "smac",
            CategoryKey::Android => "android",
            CategoryKey::Sandroid => "sandroid",
            CategoryKey::Ppsspp => "ppsspp",
            CategoryKey::Ps2 => "ps2",
            CategoryKey::Ps3 => "ps3",
            CategoryKey::Ps4 => "ps4",
        }
    }

    /// Human heading used on listing pages.
    pub fn title(&self) -> &'static str {
        match self {
            CategoryKey::Pc => "PC Games",
            CategoryKey::Spc => "PC Softwares",
            CategoryKey::Mac => "Mac Games",
            CategoryKey::Smac => "Mac Softwares",
            CategoryKey::Android => "Android Games",
            CategoryKey::Sandroid => "Android Softwares",
            CategoryKey::Ppsspp => "PPSSPP ISOs",
            CategoryKey::Ps2 => "PS2 ISOs",
            CategoryKey::Ps3 => "PS3 ISOs",
            CategoryKey::Ps4 => "PS4 ISOs",
        }
    }

    /// Site path of the category page, e.g. `/category/pc/games`.
    pub fn page_path(&self) -> &'static str {
        match self {
            CategoryKey::Pc => "/category/pc/games",
            CategoryKey::Spc => "/category/pc/softwares",
            CategoryKey::Mac => "/category/mac/games",
            CategoryKey::Smac => "/category/mac/softwares",
            CategoryKey::Android => "/category/android/games",
            CategoryKey::Sandroid => "/category/android/softwares",
            CategoryKey::Ppsspp => "/category/ppsspp/iso",
            CategoryKey::Ps2 => "/category/ps2/iso",
            CategoryKey::Ps3 => "/category/ps3/iso",
            CategoryKey::Ps4 => "/category/ps4/iso",
        }
    }

    /// Maps a `/category/<platform>/<section>` URL pair to a key.
    pub fn from_path(platform: &str, section: &str) -> Option<CategoryKey> {
        match (platform, section) {
            ("pc", "games") => Some(CategoryKey::Pc),
            ("pc", "softwares") => Some(CategoryKey::Spc),
            ("mac", "games") => Some(CategoryKey::Mac),
            ("mac", "softwares") => Some(CategoryKey::Smac),
            ("android", "games") => Some(CategoryKey::Android),
            ("android", "softwares") => Some(CategoryKey::Sandroid),
            ("ppsspp", "iso") => Some(CategoryKey::Ppsspp),
            ("ps2", "iso") => Some(CategoryKey::Ps2),
            ("ps3", "iso") => Some(CategoryKey::Ps3),
            ("ps4", "iso") => Some(CategoryKey::Ps4),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or(())
    }
}
