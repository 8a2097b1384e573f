/// Errors produced while loading, processing, or saving a mesh.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The file could not be opened, read, or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The token stream does not follow the format grammar.
    #[error("malformed input on line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// A face whose uv or normal index list does not line up with its vertex list.
    #[error("invalid face: {0}")]
    InvalidFace(String),

    /// A face refers to an element that does not exist.
    #[error("face {face} references index {index} but only {count} are available")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        count: usize,
    },

    /// The geometry cannot be processed without dividing by zero.
    #[error("degenerate mesh: {0}")]
    DegenerateMesh(&'static str),
}

impl MeshError {
    pub fn malformed<S: Into<String>>(line: usize, message: S) -> Self {
        MeshError::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Wraps an error from reading line `line` of a text file. Bytes that are not UTF-8 make
    /// the line malformed; anything else is an i/o failure.
    pub fn read_line(line: usize, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            MeshError::malformed(line, err.to_string())
        } else {
            MeshError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_errors() {
        let err = MeshError::read_line(
            7,
            std::io::Error::new(std::io::ErrorKind::InvalidData, "invalid utf-8"),
        );
        assert!(matches!(err, MeshError::MalformedInput { line: 7, .. }));

        let err = MeshError::read_line(7, std::io::ErrorKind::UnexpectedEof.into());
        assert!(matches!(err, MeshError::Io(_)));
    }
}

pub type Result<T> = std::result::Result<T, MeshError>;
