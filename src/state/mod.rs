/// State management module
///
/// This module holds the data that flows between the UI layer and the
/// editing service:
/// - Shared data structures for the selected photo and the edited result (data.rs)
/// - User-facing edit parameters such as the aspect ratio (params.rs)

pub mod data;
pub mod params;
