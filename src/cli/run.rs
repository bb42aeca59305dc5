//! Read one document, run the import pass, write the result.
//!
//! All filesystem I/O lives here; the importer itself only ever sees
//! in-memory buffers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::Cli;
use crate::importer::TagImporter;
use crate::log;
use crate::pipeline::{FileBuffer, Pipeline};

/// Process the single input document named by the CLI.
pub fn run(cli: &Cli) -> Result<()> {
    let from_stdin = cli.input.as_os_str() == "-";
    if from_stdin && cli.in_place {
        bail!("cannot rewrite stdin in place");
    }

    let buf = read_input(&cli.input, from_stdin)?;

    let mut importer = TagImporter::new();
    if let Some(token) = &cli.placeholder {
        importer = importer.with_placeholder(token);
    }

    let out = Pipeline::new(buf).pipe(importer).into_inner();

    write_output(cli, &out)
}

fn read_input(path: &Path, from_stdin: bool) -> Result<FileBuffer> {
    let contents = if from_stdin {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .context("failed to read stdin")?;
        s
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    Ok(FileBuffer::new(path, contents))
}

fn write_output(cli: &Cli, out: &FileBuffer) -> Result<()> {
    let target = if cli.in_place {
        Some(cli.input.as_path())
    } else {
        cli.output.as_deref()
    };

    match target {
        Some(path) => {
            fs::write(path, &out.contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("import"; "wrote {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(out.contents.as_bytes())
                .context("failed to write stdout")?;
        }
    }

    Ok(())
}
