// Input resolution — turns command-line paths into document sources.
//
// Each input file becomes one document whose identifier is the file's base
// name. Everything here fails fast: a bad argument is reported before any
// counting starts.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A resolved input: where to read it from and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub id: String,
    pub path: PathBuf,
}

/// Resolve input paths into uniquely-named documents, preserving order.
pub fn resolve_inputs(paths: &[PathBuf]) -> Result<Vec<InputFile>> {
    if paths.is_empty() {
        anyhow::bail!("No input files given. Pass at least one text file.");
    }

    let mut seen = HashSet::new();
    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("Input path has no file name: {}", path.display()))?;

        if !seen.insert(id.clone()) {
            anyhow::bail!(
                "Two inputs are both named {id:?} (second one: {}).\n\
                 Documents are identified by file name, so names must be unique.",
                path.display()
            );
        }

        inputs.push(InputFile {
            id,
            path: path.clone(),
        });
    }
    Ok(inputs)
}

/// Check that the output directory exists and really is a directory.
pub fn require_output_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Output directory {} does not exist or is not a directory.",
            dir.display()
        );
    }
    Ok(())
}

/// Check that every input names an existing regular file.
///
/// Runs before counting so a typo is reported without reading anything.
/// Files are not opened here; see [`open_input`].
pub fn require_files(inputs: &[InputFile]) -> Result<()> {
    for input in inputs {
        if !input.path.is_file() {
            anyhow::bail!(
                "Input {} does not exist or is not a regular file.",
                input.path.display()
            );
        }
    }
    Ok(())
}

/// Open one input for line-by-line reading.
///
/// Meant to be mapped lazily over the inputs so only one file is open at a
/// time while counting.
pub fn open_input(input: &InputFile) -> Result<(String, BufReader<File>)> {
    let file = File::open(&input.path)
        .with_context(|| format!("Failed to open {}", input.path.display()))?;
    Ok((input.id.clone(), BufReader::new(file)))
}
