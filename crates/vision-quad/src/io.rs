//! JSON loading and saving for frame inputs, parameters and reports.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use vision_quad_heal::HealParams;

use crate::frame::{FrameContours, FrameReport};

/// Errors produced while reading or writing JSON files.
#[derive(thiserror::Error, Debug)]
pub enum FrameIoError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Write(#[from] std::io::Error),
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FrameIoError> {
    let file = File::open(path).map_err(|source| FrameIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| FrameIoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a frame's contour candidates: `{"contours": [[[x, y], ...], ...]}`.
pub fn load_frame(path: &Path) -> Result<FrameContours, FrameIoError> {
    let frame: FrameContours = read_json(path)?;
    log::info!(
        "loaded {} contour(s) from {}",
        frame.contours.len(),
        path.display()
    );
    Ok(frame)
}

/// Load [`HealParams`]; missing fields take their defaults.
pub fn load_params(path: &Path) -> Result<HealParams, FrameIoError> {
    read_json(path)
}

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_report<W: Write>(report: &FrameReport, out: W) -> Result<(), FrameIoError> {
    let mut out = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
