use crate::error::{FolioError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard by piping it into the platform tool:
/// `pbcopy` on macOS, `xclip` or `xsel` on Linux, `clip` on Windows.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_into("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_into("xclip", &["-selection", "clipboard"], text).or_else(|first| {
            tracing::debug!("xclip unavailable ({}), trying xsel", first);
            pipe_into("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                FolioError::Api(format!("{}. Install xclip or xsel.", e))
            })
        })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_into("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(FolioError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg_attr(
    not(any(target_os = "macos", target_os = "linux", target_os = "windows")),
    allow(dead_code)
)]
fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| FolioError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| FolioError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| FolioError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(FolioError::Api(format!("{} exited with error", program)))
    }
}

/// Normalizes a BibTeX entry for pasting: surrounding blank lines dropped,
/// exactly one trailing newline.
pub fn format_citation(bibtex: &str) -> String {
    format!("{}\n", bibtex.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_citation_adds_single_newline() {
        assert_eq!(
            format_citation("@article{a,\n  title={A}\n}"),
            "@article{a,\n  title={A}\n}\n"
        );
    }

    #[test]
    fn test_format_citation_trims_padding() {
        assert_eq!(format_citation("\n\n@misc{x}\n\n\n"), "@misc{x}\n");
    }

    #[test]
    fn test_missing_program_is_api_error() {
        let err = pipe_into("folio-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert!(matches!(err, FolioError::Api(_)));
    }
}
