/// User-facing edit parameters
///
/// The aspect ratio is the only structured parameter the user picks; the
/// rest of the edit is described in free text. Its values feed the
/// instruction template sent to the editing service.

use std::fmt;

/// Target aspect ratio for the edited image
///
/// A closed, single-select enumeration. The canonical name is interpolated
/// verbatim into the instruction text and doubles as the selector label;
/// the descriptive phrase clarifies the orientation for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Landscape,
    Portrait,
}

impl AspectRatio {
    /// Every selectable ratio, in display order
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    /// Canonical name, used for the selector label and prompt substitution
    pub fn name(&self) -> &'static str {
        match self {
            AspectRatio::Square => "Square",
            AspectRatio::Landscape => "Landscape",
            AspectRatio::Portrait => "Portrait",
        }
    }

    /// Fixed descriptive phrase used only for prompt-template substitution
    pub fn phrase(&self) -> &'static str {
        match self {
            AspectRatio::Square => "square",
            AspectRatio::Landscape => "landscape/horizontal",
            AspectRatio::Portrait => "portrait/vertical",
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
