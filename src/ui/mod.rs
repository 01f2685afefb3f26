/// View helpers for the main window
///
/// - The thumbnail strip for the current page (gallery.rs)
/// - The metadata and download panel (sidebar.rs)

pub mod gallery;
pub mod sidebar;

use iced::widget::image::Handle;

/// Display state of one thumbnail slot. Each slot moves through these
/// states independently of its neighbors.
#[derive(Debug, Clone)]
pub enum SlotState {
    /// No record behind this slot (tail of the listing, or no data)
    Empty,
    /// Fetch in flight
    Loading,
    /// Decoded and ready to draw
    Loaded(Handle),
    /// Fetch or decode failed; the message is shown in the slot
    Failed(String),
}
