use iced::widget::{column, container, row, text, text_editor};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

// Declare the application modules
mod gemini;
mod media;
mod state;
mod ui;

use gemini::client::{GeminiClient, ImageEditor};
use gemini::EditRequest;
use state::data::{EditedImage, SourceImage};
use state::params::AspectRatio;

/// Main application state
///
/// The result area renders exactly one of four states derived from
/// (loading, error, result); error and result are cleared whenever loading
/// starts, so the three can never be visibly stale together.
struct BrandStudio {
    /// The photo currently selected for editing
    source: Option<SourceImage>,
    /// The user's free-text edit request
    prompt: text_editor::Content,
    /// Selected target aspect ratio
    aspect_ratio: AspectRatio,
    /// True while an edit request is in flight
    loading: bool,
    /// User-visible failure from the last submission, if any
    error: Option<String>,
    /// The last successful edit, if any
    result: Option<EditedImage>,
    /// Status message shown in the footer
    status: String,
    /// Lazily constructed editing service, shared with background tasks
    editor: Option<Arc<dyn ImageEditor>>,
    /// Monotonic stamp for intake and edit tasks. A completion whose stamp
    /// no longer matches was superseded by a newer user action and is
    /// discarded instead of overwriting fresher state.
    request_seq: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the browse button
    PickImage,
    /// User dropped a file onto the window
    FileDropped(PathBuf),
    /// Background photo load finished
    ImageLoaded(u64, Result<SourceImage, String>),
    /// User edited the prompt text
    PromptEdited(text_editor::Action),
    /// User picked an aspect ratio
    AspectSelected(AspectRatio),
    /// User submitted the edit
    Generate,
    /// Background edit finished
    EditComplete(u64, Result<EditedImage, String>),
    /// User asked to save the result
    SaveResult,
    /// Background save finished
    SaveComplete(Result<Option<PathBuf>, String>),
}

impl BrandStudio {
    fn new() -> (Self, Task<Message>) {
        println!("🎨 Brand Studio initialized");

        (
            BrandStudio {
                source: None,
                prompt: text_editor::Content::new(),
                aspect_ratio: AspectRatio::default(),
                loading: false,
                error: None,
                result: None,
                status: "Ready. Pick a photo to begin.".to_string(),
                editor: None,
                request_seq: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                let file = FileDialog::new()
                    .set_title("Select a Photo")
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                    .pick_file();

                match file {
                    Some(path) => self.begin_intake(path),
                    None => Task::none(),
                }
            }
            Message::FileDropped(path) => self.begin_intake(path),
            Message::ImageLoaded(seq, outcome) => {
                if seq != self.request_seq {
                    println!("⏭️  Ignoring superseded photo load");
                    return Task::none();
                }

                match outcome {
                    Ok(image) => {
                        println!("🖼️  Loaded {} ({})", image.file_name, image.mime_type);
                        self.status = format!("Loaded {} ({})", image.file_name, image.mime_type);
                        self.source = Some(image);
                    }
                    Err(message) => {
                        // The selection never became usable; the session
                        // keeps whatever photo was selected before.
                        eprintln!("⚠️  {message}");
                        self.status = message;
                    }
                }

                Task::none()
            }
            Message::PromptEdited(action) => {
                self.prompt.perform(action);
                Task::none()
            }
            Message::AspectSelected(ratio) => {
                if !self.loading {
                    self.aspect_ratio = ratio;
                }
                Task::none()
            }
            Message::Generate => self.begin_edit(),
            Message::EditComplete(seq, outcome) => {
                if seq != self.request_seq {
                    println!("⏭️  Discarding stale edit result");
                    return Task::none();
                }

                self.loading = false;

                match outcome {
                    Ok(image) => {
                        println!("✅ Edit complete: {} bytes", image.bytes.len());
                        self.status = "Edit complete.".to_string();
                        self.result = Some(image);
                    }
                    Err(message) => {
                        eprintln!("❌ {message}");
                        self.status = "Edit failed.".to_string();
                        self.error = Some(message);
                    }
                }

                Task::none()
            }
            Message::SaveResult => match &self.result {
                Some(result) => Task::perform(
                    media::export::save_image(result.bytes.clone()),
                    Message::SaveComplete,
                ),
                None => Task::none(),
            },
            Message::SaveComplete(outcome) => {
                match outcome {
                    Ok(Some(path)) => self.status = format!("Saved to {}", path.display()),
                    Ok(None) => {}
                    Err(message) => {
                        eprintln!("⚠️  {message}");
                        self.status = message;
                    }
                }
                Task::none()
            }
        }
    }

    /// Accept a candidate photo, or silently ignore a non-image
    ///
    /// Accepting starts the session over: any previous result or error is
    /// cleared and an in-flight edit is superseded.
    fn begin_intake(&mut self, path: PathBuf) -> Task<Message> {
        if !media::intake::is_supported(&path) {
            return Task::none();
        }

        self.request_seq += 1;
        self.loading = false;
        self.result = None;
        self.error = None;
        self.status = format!("Loading {}…", path.display());

        let seq = self.request_seq;
        Task::perform(media::intake::load_image(path), move |outcome| {
            Message::ImageLoaded(seq, outcome)
        })
    }

    /// Validate the submit gate and dispatch one edit request
    fn begin_edit(&mut self) -> Task<Message> {
        if self.loading {
            return Task::none();
        }

        let Some(source) = &self.source else {
            self.error = Some("Please upload an image first.".to_string());
            return Task::none();
        };

        let prompt = self.prompt.text();
        if prompt.trim().is_empty() {
            return Task::none();
        }

        let request = EditRequest::from_source(source, prompt, self.aspect_ratio);

        let editor = match self.editor_instance() {
            Ok(editor) => editor,
            Err(error) => {
                self.error = Some(error.user_message());
                return Task::none();
            }
        };

        self.loading = true;
        self.error = None;
        self.result = None;
        self.request_seq += 1;
        self.status = "Editing in progress…".to_string();

        let seq = self.request_seq;
        Task::perform(
            async move {
                editor
                    .edit_image(request)
                    .await
                    .map_err(|error| error.user_message())
            },
            move |outcome| Message::EditComplete(seq, outcome),
        )
    }

    /// The editing service, constructed from the environment on first use
    /// and reused for the process lifetime
    fn editor_instance(&mut self) -> Result<Arc<dyn ImageEditor>, gemini::client::EditError> {
        if let Some(editor) = &self.editor {
            return Ok(editor.clone());
        }

        let editor: Arc<dyn ImageEditor> = Arc::new(GeminiClient::from_env()?);
        self.editor = Some(editor.clone());
        Ok(editor)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let image_present = self.source.is_some();
        let can_generate =
            image_present && !self.loading && !self.prompt.text().trim().is_empty();

        let side = column![
            panel(
                "1. Upload Your Photo",
                ui::uploader::uploader(self.source.as_ref()),
            ),
            panel(
                "2. Describe Your Vision",
                ui::controls::controls(
                    &self.prompt,
                    self.aspect_ratio,
                    image_present,
                    can_generate,
                    self.loading,
                ),
            ),
        ]
        .spacing(16)
        .width(Length::FillPortion(1));

        let result = panel(
            "3. AI-Generated Result",
            ui::viewer::viewer(self.loading, self.error.as_deref(), self.result.as_ref()),
        );

        let header = column![
            text("Brand Studio").size(32),
            text("AI personal-branding photo editor").size(14),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        let content = column![
            header,
            row![
                side,
                container(result).width(Length::FillPortion(2)).height(Length::Fill),
            ]
            .spacing(16)
            .height(Length::Fill),
            text(&self.status).size(13),
        ]
        .spacing(16)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window file drops feed the same intake path as the browse button
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A titled, rounded panel wrapping one section of the layout
fn panel<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(18), body].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn main() -> iced::Result {
    // Pick up GEMINI_API_KEY from a local .env; the key itself is only
    // required once the first edit is submitted.
    let _ = dotenvy::dotenv();

    iced::application("Brand Studio", BrandStudio::update, BrandStudio::view)
        .subscription(BrandStudio::subscription)
        .theme(BrandStudio::theme)
        .window_size(iced::Size::new(1200.0, 780.0))
        .centered()
        .run_with(BrandStudio::new)
}
