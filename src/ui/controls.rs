/// Prompt and parameter form: free-text request, aspect-ratio selector,
/// and the Generate action. Everything locks while an edit is in flight.

use iced::widget::{button, column, row, text, text_editor};
use iced::{Element, Length};

use crate::state::params::AspectRatio;
use crate::Message;

pub fn controls<'a>(
    prompt: &'a text_editor::Content,
    aspect_ratio: AspectRatio,
    image_present: bool,
    can_generate: bool,
    busy: bool,
) -> Element<'a, Message> {
    let mut editor = text_editor(prompt)
        .placeholder(
            "e.g., professional headshot for LinkedIn, cinematic lighting, \
             wearing a dark blue suit, blurred office background…",
        )
        .height(Length::Fixed(130.0));
    if !busy {
        editor = editor.on_action(Message::PromptEdited);
    }

    let ratio_buttons = row(AspectRatio::ALL.into_iter().map(|ratio| {
        let style = if ratio == aspect_ratio {
            button::primary
        } else {
            button::secondary
        };

        button(text(ratio.name()).size(14))
            .style(style)
            .padding(8)
            .width(Length::Fill)
            .on_press_maybe((!busy).then_some(Message::AspectSelected(ratio)))
            .into()
    }))
    .spacing(8);

    let generate_label = if busy {
        "Generating…"
    } else {
        "Generate Image"
    };
    let generate = button(text(generate_label).size(16))
        .padding(12)
        .width(Length::Fill)
        .on_press_maybe(can_generate.then_some(Message::Generate));

    let mut content = column![
        editor,
        text("Aspect Ratio").size(14),
        ratio_buttons,
        generate,
    ]
    .spacing(12);

    if !image_present {
        content = content.push(text("Please upload an image to enable generation.").size(12));
    }

    content.into()
}
