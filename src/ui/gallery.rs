/// The thumbnail strip: one fixed-size slot per window position

use iced::widget::{container, image as thumbnail, row, text};
use iced::{Alignment, Element, Length};

use super::SlotState;
use crate::fetch::THUMBNAIL_SIZE;

/// Render the slot row for the current page.
pub fn view<Message: 'static>(slots: &[SlotState]) -> Element<'_, Message> {
    let mut strip = row![].spacing(20);

    for slot in slots {
        strip = strip.push(slot_view(slot));
    }

    strip.into()
}

fn slot_view<Message: 'static>(slot: &SlotState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match slot {
        SlotState::Empty => text("no wallpaper").size(14).into(),
        SlotState::Loading => text("loading...").size(14).into(),
        SlotState::Loaded(handle) => thumbnail(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        SlotState::Failed(message) => text(format!("load failed: {}", message)).size(12).into(),
    };

    container(content)
        .width(THUMBNAIL_SIZE as f32)
        .height(THUMBNAIL_SIZE as f32)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
