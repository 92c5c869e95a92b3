use std::path::Path;

use tera::Tera;

use crate::error::{Result, TplrError};

/// Build a one-shot Tera environment holding the named template.
///
/// The template is resolved by name relative to `search_root` (symlinks
/// are followed) and parsed eagerly, so a missing file and a syntax
/// defect surface as distinct errors. Autoescaping is disabled: this tool
/// renders plain text, not markup. Tera keeps a trailing newline in the
/// template source verbatim, so no further output-formatting switches are
/// needed.
pub fn load_template(search_root: &Path, name: &str) -> Result<Tera> {
    let path = search_root.join(name);
    let source = std::fs::read_to_string(&path).map_err(|e| TplrError::TemplateNotFound {
        name: name.to_string(),
        source: e,
    })?;

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(name, &source)
        .map_err(|e| TplrError::TemplateSyntax {
            name: name.to_string(),
            source: e,
        })?;

    Ok(tera)
}
