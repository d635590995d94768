//! PDF compilation via the external pdflatex collaborator
//!
//! A failed compilation is a partial success: the .tex output already
//! exists, only the PDF artifact is missing. No retries.

use crate::error::Result;
use log::{error, info, warn};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

const AUX_EXTENSIONS: &[&str] = &["aux", "log", "out", "fdb_latexmk", "fls"];

/// Compile a generated .tex file with pdflatex, run twice so cross
/// references resolve, then remove the auxiliary files. Returns Ok(false)
/// when pdflatex is missing or exits non-zero (captured output is logged).
pub fn compile_pdf(tex_file: &Path) -> Result<bool> {
    let work_dir = match tex_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name: OsString = tex_file
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| tex_file.as_os_str().to_os_string());

    for attempt in 1..=2 {
        let output = match Command::new("pdflatex")
            .arg("-interaction=nonstopmode")
            .arg(&file_name)
            .current_dir(&work_dir)
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("pdflatex not found; skipping PDF compilation");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            error!("LaTeX compilation failed (attempt {})", attempt);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.trim().is_empty() {
                error!("pdflatex stdout:\n{}", stdout);
            }
            if !stderr.trim().is_empty() {
                error!("pdflatex stderr:\n{}", stderr);
            }
            return Ok(false);
        }
    }

    cleanup_aux_files(tex_file);
    info!("PDF compiled: {}", tex_file.with_extension("pdf").display());
    Ok(true)
}

fn cleanup_aux_files(tex_file: &Path) {
    for ext in AUX_EXTENSIONS {
        let aux = tex_file.with_extension(ext);
        if aux.exists() {
            if let Err(e) = fs::remove_file(&aux) {
                warn!("could not remove {}: {}", aux.display(), e);
            }
        }
    }
}
