//! The `parse` command: run the patch parser over local input.
//!
//! Exercises the core without any network access, which is also the easiest
//! way to inspect what the compare report will contain for a given diff:
//! `git diff | repolens parse -`.

use std::io::Read;
use std::path::Path;

use crate::cli::ParseArgs;
use crate::commands::print_json;
use crate::error::{RepolensError, Result};
use crate::patch;

pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    let text = read_patch_text(&args.file)?;
    print_json(&patch::parse(&text))
}

fn read_patch_text(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| RepolensError::UserError(format!("failed to read stdin: {e}")))?;
        return Ok(text);
    }

    std::fs::read_to_string(file).map_err(|e| {
        RepolensError::UserError(format!(
            "failed to read patch file {}: {}",
            file.display(),
            e
        ))
    })
}
