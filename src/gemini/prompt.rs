/// The master instruction sent with every edit
///
/// The template is constant except for three substitution points: the aspect
/// ratio's name, its descriptive phrase, and the user's request quoted
/// verbatim. The fixed rules it encodes (identity preservation, output
/// quality, aspect ratio) are what make results usable for personal-branding
/// photos regardless of what the user types.

use crate::state::params::AspectRatio;

/// Build the full instruction text for one edit
pub fn master_instruction(user_prompt: &str, aspect_ratio: AspectRatio) -> String {
    format!(
        "IMPORTANT INSTRUCTION: You are an expert photo editor for personal branding. \
Your task is to edit the provided image based on the user's request.\n\
\n\
**CRITICAL RULE: You MUST preserve the subject's facial features and identity 100%. \
The final image must look exactly like the same person.** \
Do not alter their face, skin tone, or unique characteristics.\n\
\n\
**QUALITY & STYLE:**\n\
- The final image quality must be 8K, super sharp, and hyper-realistic, \
resembling a photo taken with a high-end professional DSLR camera.\n\
- Apply the user's requested style changes to the background, clothing, lighting, and overall mood.\n\
\n\
**ASPECT RATIO:**\n\
- The output image MUST have a {name} aspect ratio ({phrase}).\n\
\n\
**USER'S REQUEST:** \"{prompt}\"\n\
\n\
Now, generate the edited image.",
        name = aspect_ratio.name(),
        phrase = aspect_ratio.phrase(),
        prompt = user_prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_user_prompt_verbatim_and_quoted() {
        let instruction =
            master_instruction("cinematic lighting, navy suit", AspectRatio::Landscape);
        assert!(instruction.contains("\"cinematic lighting, navy suit\""));
    }

    #[test]
    fn whitespace_in_prompt_is_preserved() {
        let instruction = master_instruction("  padded request \n", AspectRatio::Square);
        assert!(instruction.contains("\"  padded request \n\""));
    }

    #[test]
    fn embeds_aspect_ratio_name_and_phrase() {
        let instruction = master_instruction("x", AspectRatio::Portrait);
        assert!(instruction.contains("a Portrait aspect ratio (portrait/vertical)"));

        let instruction = master_instruction("x", AspectRatio::Landscape);
        assert!(instruction.contains("a Landscape aspect ratio (landscape/horizontal)"));
    }

    #[test]
    fn template_is_constant_outside_substitutions() {
        let a = master_instruction("same", AspectRatio::Square);
        let b = master_instruction("same", AspectRatio::Square);
        assert_eq!(a, b);

        // Fixed rules survive every substitution
        for ratio in AspectRatio::ALL {
            let instruction = master_instruction("anything", ratio);
            assert!(instruction.contains("preserve the subject's facial features"));
            assert!(instruction.contains("8K, super sharp, and hyper-realistic"));
            assert!(instruction.ends_with("Now, generate the edited image."));
        }
    }
}
