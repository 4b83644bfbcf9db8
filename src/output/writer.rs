// src/output/writer.rs
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::OutputTarget;

/// Buffered stdout, or a file staged next to its destination.
///
/// File output lands in a temporary file in the target's directory and only
/// replaces the destination on [`OutputWriter::commit`]. Dropping the writer
/// uncommitted removes the staged file and leaves the destination untouched.
pub enum OutputWriter {
    Stdout(BufWriter<Stdout>),
    File {
        staged: BufWriter<NamedTempFile>,
        path: PathBuf,
    },
}

impl OutputWriter {
    /// # Errors
    ///
    /// Fails when the target's directory does not accept new files.
    pub fn create(target: &OutputTarget) -> io::Result<Self> {
        match target {
            OutputTarget::Stdout => Ok(Self::Stdout(BufWriter::new(io::stdout()))),
            OutputTarget::File(path) => {
                let staged = stage_in(parent_dir(path))?;
                Ok(Self::File {
                    staged: BufWriter::new(staged),
                    path: path.clone(),
                })
            }
        }
    }

    /// Flushes and, for file targets, moves the staged file into place.
    ///
    /// # Errors
    ///
    /// Fails when flushing or the final rename fails.
    pub fn commit(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut out) => out.flush(),
            Self::File { staged, path } => {
                let staged = staged.into_inner().map_err(io::IntoInnerError::into_error)?;
                staged.persist(&path).map_err(|e| e.error)?;
                log::debug!("wrote {}", path.display());
                Ok(())
            }
        }
    }
}

fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".combo_filter");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // File::create's mode, narrowed by the umask
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File { staged, .. } => staged.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File { staged, .. } => staged.flush(),
        }
    }
}
