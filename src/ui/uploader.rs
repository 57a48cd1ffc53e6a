/// Photo upload panel: preview of the current selection, or an invitation
/// to drop/browse. Selection stays enabled during an in-flight edit; picking
/// a new photo supersedes the pending request.

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::SourceImage;
use crate::Message;

pub fn uploader(source: Option<&SourceImage>) -> Element<'_, Message> {
    let preview: Element<'_, Message> = match source {
        Some(selected) => column![
            image(selected.preview.clone())
                .width(Length::Fill)
                .height(Length::Fixed(220.0))
                .content_fit(ContentFit::Contain),
            text(&selected.file_name).size(13),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
        None => column![
            text("Drop a photo here").size(16),
            text("PNG, JPG, or WEBP").size(13),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into(),
    };

    column![
        container(preview)
            .width(Length::Fill)
            .padding(16)
            .style(container::rounded_box)
            .center_x(Length::Fill),
        button(text("Browse for a Photo…").size(14))
            .padding(10)
            .width(Length::Fill)
            .on_press(Message::PickImage),
    ]
    .spacing(10)
    .into()
}
