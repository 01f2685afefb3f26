/// Wallpaper listing API client
///
/// This module talks to the remote listing endpoint:
/// - The fixed set of selectable upstream sources (source.rs)
/// - HTTP fetch and JSON envelope parsing (listing.rs)

pub mod listing;
pub mod source;

pub use listing::WallpaperRecord;
pub use source::Source;
