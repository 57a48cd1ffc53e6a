/// Media handling module
///
/// Everything that touches image files on disk:
/// - Intake of the user's photo: format gating, reading, sniffing (intake.rs)
/// - Export of the edited result through a save dialog (export.rs)

pub mod export;
pub mod intake;
