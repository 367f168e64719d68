//! Token dumps for highlighted files.

use std::path::{Path, PathBuf};

use keylex_ir::Token;
use keylex_jml::{ExpansionOptions, Highlighter};
use rayon::prelude::*;

use crate::error::{CliError, CliResult};

/// Read a source file for highlighting.
pub fn read_source(path: &Path) -> CliResult<String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CliError::from_io(path.to_path_buf(), e))?;
    if u32::try_from(content.len()).is_err() {
        return Err(CliError::TooLarge {
            path: path.to_path_buf(),
            len: content.len(),
        });
    }
    Ok(content)
}

/// Render tokens one per line: offset, short category name, escaped text.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&format!(
            "  {:>6}  {:<3} {:?}\n",
            tok.offset,
            tok.category.short_name(),
            tok.text
        ));
    }
    out
}

fn render(path: &Path, tokens: &[Token<'_>]) -> String {
    format!(
        "Tokens for '{}' ({} tokens):\n{}",
        path.display(),
        tokens.len(),
        format_tokens(tokens)
    )
}

/// Highlight one Java file and render its token dump.
pub fn dump_jml_file(path: &Path, options: &ExpansionOptions) -> CliResult<String> {
    let source = read_source(path)?;
    let mut highlighter = Highlighter::new(options.clone());
    let tokens = highlighter.highlight(&source);
    Ok(render(path, &tokens))
}

/// Highlight one KeY file and render its token dump.
pub fn dump_key_file(path: &Path) -> CliResult<String> {
    let source = read_source(path)?;
    let tokens = keylex_key::highlight(&source);
    Ok(render(path, &tokens))
}

/// Dump several Java files in parallel, one highlighter per file.
///
/// Results come back in input order.
pub fn dump_jml_files(files: &[PathBuf], options: &ExpansionOptions) -> Vec<CliResult<String>> {
    files
        .par_iter()
        .map(|path| dump_jml_file(path, options))
        .collect()
}

/// Dump several KeY files in parallel.
pub fn dump_key_files(files: &[PathBuf]) -> Vec<CliResult<String>> {
    files.par_iter().map(|path| dump_key_file(path)).collect()
}
