/// Metadata and download panel
///
/// Shows the metadata of the first record in the current window, the
/// download directory row with its folder picker button, and the
/// download trigger.

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};
use std::path::Path;

use crate::api::{Source, WallpaperRecord};
use crate::api::listing::FIELD_PLACEHOLDER;

pub fn view<'a, Message: Clone + 'a>(
    source: Source,
    first: Option<&'a WallpaperRecord>,
    download_dir: &Path,
    on_choose_dir: Message,
    on_download: Message,
) -> Element<'a, Message> {
    let name = first.map(|r| non_empty(&r.id)).unwrap_or_default();
    let author = first.map(|r| non_empty(&r.author)).unwrap_or_default();
    let desc = first.map(|r| non_empty(&r.desc)).unwrap_or_default();

    let location = row![
        text(format!("Download to: {}", download_dir.display())).size(14),
        button("Choose folder").on_press(on_choose_dir),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![
        text(format!("Name: {}", name)),
        text(format!("Author: {}", author)),
        text(format!("Source: {}", source)),
        text(format!("Description: {}", desc)),
        location,
        button("Download this page").on_press(on_download).padding(10),
    ]
    .spacing(12)
    .into()
}

/// Display fallback for fields the API omitted.
fn non_empty(value: &str) -> &str {
    if value.is_empty() {
        FIELD_PLACEHOLDER
    } else {
        value
    }
}
