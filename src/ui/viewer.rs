/// Result area: exactly one of four states renders at a time.
/// Loading takes display priority; error beats result; an idle session
/// shows the placeholder.

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::EditedImage;
use crate::Message;

pub fn viewer<'a>(
    loading: bool,
    error: Option<&'a str>,
    result: Option<&'a EditedImage>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = if loading {
        column![
            text("AI is crafting your masterpiece…").size(18),
            text("This may take a moment. Please wait.").size(13),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
    } else if let Some(message) = error {
        column![
            text("An Error Occurred").size(18).style(text::danger),
            text(message).size(13).style(text::danger),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into()
    } else if let Some(edited) = result {
        column![
            image(edited.preview.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
            button(text("Save Image").size(14))
                .padding(10)
                .on_press(Message::SaveResult),
        ]
        .spacing(12)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .into()
    } else {
        column![
            text("Your generated image will appear here").size(18),
            text("Upload an image and provide a prompt to start.").size(13),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
