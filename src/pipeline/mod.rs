//! Single-document processing pipeline.
//!
//! A [`FileBuffer`] flows through an ordered chain of [`Transform`]
//! steps: one buffer in, one buffer out, synchronous, no state shared
//! across invocations. The enclosing CLI owns all filesystem I/O;
//! steps only ever see in-memory contents.

use std::path::{Path, PathBuf};

// =============================================================================
// Types
// =============================================================================

/// One named in-memory document.
///
/// The path is carried for diagnostics only; transforms never read it
/// from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBuffer {
    pub path: PathBuf,
    pub contents: String,
}

impl FileBuffer {
    pub fn new(path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            contents: contents.into(),
        }
    }
}

/// A single pipeline step: consumes one buffer, emits one buffer.
pub trait Transform {
    fn transform(self, buf: FileBuffer) -> FileBuffer;
}

// =============================================================================
// Pipeline
// =============================================================================

/// Chains transform steps over one buffer.
pub struct Pipeline {
    buf: FileBuffer,
}

impl Pipeline {
    pub fn new(buf: FileBuffer) -> Self {
        Self { buf }
    }

    /// Apply one transform step.
    pub fn pipe<T: Transform>(self, step: T) -> Self {
        Self {
            buf: step.transform(self.buf),
        }
    }

    /// Unwrap the final buffer.
    pub fn into_inner(self) -> FileBuffer {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Suffix(&'static str);

    impl Transform for Suffix {
        fn transform(self, mut buf: FileBuffer) -> FileBuffer {
            buf.contents.push_str(self.0);
            buf
        }
    }

    #[test]
    fn test_pipe_applies_steps_in_order() {
        let buf = FileBuffer::new("page.html", "x");
        let out = Pipeline::new(buf)
            .pipe(Suffix("a"))
            .pipe(Suffix("b"))
            .into_inner();

        assert_eq!(out.contents, "xab");
        assert_eq!(out.path, PathBuf::from("page.html"));
    }
}
