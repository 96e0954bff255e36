use std::fmt::{self, Write};

use influence_core::questionnaire::{INFLUENCE_FORMULA, INTRODUCTION, SECTIONS};
use influence_core::{CollectionWindow, Country, MediaCategory};

/// Writes the questionnaire as plain text for the terminal.
pub(crate) fn render_guide(out: &mut impl Write) -> fmt::Result {
    let window = CollectionWindow::STUDY;
    let countries: Vec<&str> = Country::ALL.iter().map(|c| c.as_str()).collect();
    let categories: Vec<&str> = MediaCategory::ALL.iter().map(|c| c.as_str()).collect();

    writeln!(out, "Public Sphere Influence Questionnaire\n")?;
    writeln!(out, "{INTRODUCTION}\n")?;
    writeln!(out, "Working formula: {INFLUENCE_FORMULA}")?;
    writeln!(out, "Collection window: {window}")?;
    writeln!(out, "Countries: {}", countries.join(", "))?;
    writeln!(out, "Media categories: {}\n", categories.join(", "))?;

    for section in SECTIONS {
        let scope = if section.per_session {
            "once per session"
        } else {
            "per sample"
        };
        writeln!(
            out,
            "Section {}: {} ({scope})",
            section.number, section.title
        )?;
        writeln!(out, "  {}", section.definition)?;
        for prompt in section.prompts {
            writeln!(out, "  - {prompt}")?;
        }
        writeln!(out, "  fields: {}\n", section.fields.join(", "))?;
    }

    Ok(())
}
