use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use lathe_mesh::{Face, LoadOptions, Mesh, MeshError, Result, Vector3};

mod writer;

pub use writer::{write_off, OffWriter};

const RESERVE_LIMIT: usize = 1 << 16;

/// The non-empty lines of an OFF file, split into tokens.
///
/// Comments (from a '#' to the end of the line) and blank lines are skipped. Every record keeps
/// its 1-based line number for error reporting.
struct Records<T: BufRead> {
    lines: std::io::Lines<T>,
    line: usize,
}

struct Record {
    line: usize,
    tokens: Vec<String>,
}

impl Record {
    fn parse<V: FromStr>(&self, index: usize, what: &str) -> Result<V> {
        let token = self.tokens.get(index).ok_or_else(|| {
            MeshError::malformed(self.line, format!("missing {}", what))
        })?;
        token.parse::<V>().map_err(|_| {
            MeshError::malformed(self.line, format!("`{}` is not a valid {}", token, what))
        })
    }
}

impl<T: BufRead> Records<T> {
    fn new(f: T) -> Self {
        Self {
            lines: f.lines(),
            line: 0,
        }
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        for line in self.lines.by_ref() {
            self.line += 1;
            let line = line.map_err(|e| MeshError::read_line(self.line, e))?;
            let content = line.split('#').next().unwrap_or("");
            let tokens = content
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>();
            if !tokens.is_empty() {
                return Ok(Some(Record {
                    line: self.line,
                    tokens,
                }));
            }
        }
        Ok(None)
    }

    /// Like `next_record` but running out of input is an error.
    fn expect_record(&mut self, what: &str) -> Result<Record> {
        self.next_record()?.ok_or_else(|| {
            MeshError::malformed(self.line, format!("unexpected end of input, expected {}", what))
        })
    }
}

/// Parses an OFF file into a mesh without running the post-parse pipeline.
fn read_records<T: BufRead>(f: T) -> Result<Mesh> {
    let mut records = Records::new(f);

    // The format tag may be followed by the counts on the same line.
    let header = records.expect_record("an OFF header")?;
    let tag = header.tokens[0].clone();
    if !tag.ends_with("OFF") {
        log::warn!("line {}: unexpected format tag `{}`", header.line, tag);
    }
    let (counts, offset) = if header.tokens.len() > 1 {
        (header, 1)
    } else {
        (records.expect_record("vertex, face and edge counts")?, 0)
    };
    let vertex_count = counts.parse::<usize>(offset, "vertex count")?;
    let face_count = counts.parse::<usize>(offset + 1, "face count")?;
    let edge_count = counts.parse::<usize>(offset + 2, "edge count")?;
    log::debug!(
        "reading {} vertices, {} faces and {} edges",
        vertex_count,
        face_count,
        edge_count
    );

    let mut mesh = Mesh::new("", tag);
    mesh.declared_edge_count = edge_count;

    // The header counts are untrusted, so only a bounded amount is reserved up front.
    mesh.positions.reserve(vertex_count.min(RESERVE_LIMIT));
    for i in 0..vertex_count {
        let record = records.expect_record(&format!("vertex {} of {}", i, vertex_count))?;
        // Any trailing tokens (colors, etc.) are ignored.
        mesh.positions.push(Vector3 {
            x: record.parse(0, "coordinate")?,
            y: record.parse(1, "coordinate")?,
            z: record.parse(2, "coordinate")?,
        });
    }

    mesh.faces.reserve(face_count.min(RESERVE_LIMIT));
    for i in 0..face_count {
        let record = records.expect_record(&format!("face {} of {}", i, face_count))?;
        let n = record.parse::<usize>(0, "corner count")?;
        if n < 3 {
            return Err(MeshError::malformed(
                record.line,
                format!("a face needs at least 3 corners, found {}", n),
            ));
        }
        // Indices are 0-based and may be followed by a color; only the first `n` count.
        let vertices = (1..=n)
            .map(|k| record.parse::<u32>(k, "vertex index"))
            .collect::<Result<Vec<_>>>()?;
        mesh.faces.push(Face::new(vertices));
    }

    if let Some(extra) = records.next_record()? {
        log::trace!("line {}: ignoring content after the last face", extra.line);
    }
    Ok(mesh)
}

fn read_text<T: BufRead>(f: T, options: &LoadOptions) -> Result<Mesh> {
    let mut mesh = read_records(f)?;
    mesh.finalize(options)?;
    Ok(mesh)
}

/// Loads an OFF file, then normalizes it and computes its normals as `options` request.
pub fn read_off<P: AsRef<Path>>(p: P, options: &LoadOptions) -> Result<Mesh> {
    let path = p.as_ref();
    log::debug!("loading {}", path.display());
    let f = std::fs::File::open(path)?;
    let mut mesh = read_records(BufReader::new(f))?;
    mesh.name = path.to_string_lossy().into_owned();
    mesh.finalize(options)?;
    Ok(mesh)
}

pub fn parse_off(data: &[u8], options: &LoadOptions) -> Result<Mesh> {
    read_text(std::io::Cursor::new(data), options)
}

pub trait OffReader: BufRead {
    fn read_off(&mut self, options: &LoadOptions) -> Result<Mesh>;
}

impl<T: BufRead> OffReader for T {
    fn read_off(&mut self, options: &LoadOptions) -> Result<Mesh> {
        read_text(self, options)
    }
}
