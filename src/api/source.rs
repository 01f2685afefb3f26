/// The fixed set of upstream wallpaper sources
///
/// The listing API selects its provider with a `source` query parameter
/// whose value is the display name below. The set is closed; there is no
/// dynamic discovery.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Artand,
    Smartisan,
    Unsplash,
    Minimography,
    Pexels,
    Magdeleine,
    Fancycrave,
    Snapwiresnaps,
    Memento,
    /// 纹理与材质壁纸 (textures and materials)
    Textures,
    /// 壁纸摄影大赛精选 (photo contest picks)
    ContestPicks,
}

impl Source {
    /// All selectable sources, in dropdown order.
    pub const ALL: [Source; 11] = [
        Source::Artand,
        Source::Smartisan,
        Source::Unsplash,
        Source::Minimography,
        Source::Pexels,
        Source::Magdeleine,
        Source::Fancycrave,
        Source::Snapwiresnaps,
        Source::Memento,
        Source::Textures,
        Source::ContestPicks,
    ];

    /// The value the API expects in the `source` query parameter.
    /// This doubles as the display name in the source dropdown.
    pub fn query_name(&self) -> &'static str {
        match self {
            Source::Artand => "Artand",
            Source::Smartisan => "Smartisan",
            Source::Unsplash => "Unsplash",
            Source::Minimography => "Minimography",
            Source::Pexels => "Pexels",
            Source::Magdeleine => "Magdeleine",
            Source::Fancycrave => "Fancycrave",
            Source::Snapwiresnaps => "Snapwiresnaps",
            Source::Memento => "Memento",
            Source::Textures => "纹理与材质壁纸",
            Source::ContestPicks => "壁纸摄影大赛精选",
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Artand
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sources_have_distinct_query_names() {
        let mut names: Vec<&str> = Source::ALL.iter().map(|s| s.query_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Source::ALL.len());
    }

    #[test]
    fn test_default_source_is_first_in_dropdown() {
        assert_eq!(Source::default(), Source::ALL[0]);
    }
}
