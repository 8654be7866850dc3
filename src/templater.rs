use std::path::Path;

use crate::tools::{read_file, write_file};

pub const TEMPLATE_FILE: &str = "template.html";
pub const OUTPUT_FILE: &str = "presentation.html";
pub const MARKER: &str = "<!-- REPLACEME -->";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub replacements: usize, // marker occurrences substituted
}

/// Substitutes `content` for every occurrence of [`MARKER`] in `template`.
///
/// Occurrences are matched left to right without overlap, in a single pass:
/// a marker appearing inside `content` is inserted literally.
///
/// # Arguments
///
/// * `template` - The document shell containing the marker.
/// * `content` - The text inserted at each marker position.
///
pub fn render(template: &str, content: &str) -> Rendered {
    let replacements = template.matches(MARKER).count();
    let text = template.replace(MARKER, content);

    Rendered { text, replacements }
}

/// Renders `root/template.html` with the file at `content_path` and writes
/// `root/presentation.html`.
///
/// Nothing is written unless both inputs were read.
pub fn run_in(root: &Path, content_path: &Path) -> anyhow::Result<Rendered> {
    let template_path = root.join(TEMPLATE_FILE);
    let output_path = root.join(OUTPUT_FILE);

    let template = read_file(&template_path)?;
    let content = read_file(content_path)?;

    let rendered = render(&template, &content);
    log::debug!(
        "replaced {} marker(s) in {}",
        rendered.replacements,
        template_path.display()
    );
    if rendered.replacements == 0 {
        log::warn!(
            "{} does not contain {}, output is the template unchanged",
            template_path.display(),
            MARKER
        );
    }

    write_file(&output_path, &rendered.text)?;
    log::info!("wrote {}", output_path.display());

    Ok(rendered)
}

pub fn run(content_path: &Path) -> anyhow::Result<()> {
    run_in(Path::new("."), content_path)?;
    Ok(())
}
