pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod stream;
pub mod vars;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TplrError};
use crate::stream::{OutputSink, VarsSource};

/// Everything one invocation needs: the template name and where variables
/// come from and output goes. Built once from the parsed command line and
/// read-only afterwards.
pub struct RenderOptions {
    pub template: PathBuf,
    pub vars: VarsSource,
    pub out: OutputSink,
}

/// Render one template and write the result.
///
/// The variables and output streams are opened first so that an unreadable
/// or unwritable path fails before any template work starts. Template
/// resolution itself stays lazy: a bad template path only surfaces here,
/// never at argument-parsing time. The whole rendered text is written in
/// one operation; there is no partial output on success and nothing is
/// retried on failure.
pub fn render(options: RenderOptions) -> Result<()> {
    let input = options.vars.open()?;
    let mut output = options.out.create()?;

    let name = options.template.to_string_lossy().into_owned();
    let tera = engine::load_template(Path::new("."), &name)?;
    let context = vars::load(input, &options.vars.to_string())?;

    let rendered = tera.render(&name, &context).map_err(|e| TplrError::Render {
        name: name.clone(),
        source: e,
    })?;

    output
        .write_all(rendered.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| TplrError::Io {
            context: format!("writing rendered output to {}", options.out),
            source: e,
        })?;

    Ok(())
}
