/// The attribute indices a face corner carries in an OBJ file.
///
/// OBJ corners come in four shapes depending on which attribute pools the file declares:
///
/// ```text
///   f 1 2 3                  Position
///   f 1/1 2/2 3/3            PositionUv
///   f 1//1 2//1 3//1         PositionNormal
///   f 1/1/1 2/2/1 3/3/1      PositionUvNormal
/// ```
///
/// The layout is chosen once per file from whether it has any `vt` and `vn` statements, and
/// every face in the file must use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerLayout {
    Position,
    PositionUv,
    PositionNormal,
    PositionUvNormal,
}

/// The 0-based indices of one face corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub vertex: u32,
    pub uv: Option<u32>,
    pub normal: Option<u32>,
}

impl CornerLayout {
    pub fn new(has_uvs: bool, has_normals: bool) -> Self {
        match (has_uvs, has_normals) {
            (false, false) => CornerLayout::Position,
            (true, false) => CornerLayout::PositionUv,
            (false, true) => CornerLayout::PositionNormal,
            (true, true) => CornerLayout::PositionUvNormal,
        }
    }

    /// The corner syntax this layout expects, for error messages.
    pub fn syntax(&self) -> &'static str {
        match self {
            CornerLayout::Position => "v",
            CornerLayout::PositionUv => "v/vt",
            CornerLayout::PositionNormal => "v//vn",
            CornerLayout::PositionUvNormal => "v/vt/vn",
        }
    }

    /// Parses a corner token, converting its 1-based indices to 0-based.
    ///
    /// Returns `None` if the token does not have this layout's shape or an index is not a
    /// positive integer.
    pub fn parse_corner(&self, token: &str) -> Option<Corner> {
        let parts = token.split('/').collect::<Vec<_>>();
        let (vertex, uv, normal) = match (self, parts.as_slice()) {
            (CornerLayout::Position, [v]) => (v, None, None),
            (CornerLayout::PositionUv, [v, t]) => (v, Some(t), None),
            (CornerLayout::PositionNormal, [v, "", n]) => (v, None, Some(n)),
            (CornerLayout::PositionUvNormal, [v, t, n]) => (v, Some(t), Some(n)),
            _ => return None,
        };
        Some(Corner {
            vertex: parse_index(vertex)?,
            uv: match uv {
                Some(t) => Some(parse_index(t)?),
                None => None,
            },
            normal: match normal {
                Some(n) => Some(parse_index(n)?),
                None => None,
            },
        })
    }
}

fn parse_index(token: &str) -> Option<u32> {
    token.parse::<u32>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_from_declared_attributes() {
        assert_eq!(CornerLayout::new(false, false), CornerLayout::Position);
        assert_eq!(CornerLayout::new(true, false), CornerLayout::PositionUv);
        assert_eq!(CornerLayout::new(false, true), CornerLayout::PositionNormal);
        assert_eq!(CornerLayout::new(true, true), CornerLayout::PositionUvNormal);
    }

    #[test]
    fn parse_each_layout() {
        assert_eq!(
            Some(Corner {
                vertex: 0,
                uv: None,
                normal: None
            }),
            CornerLayout::Position.parse_corner("1")
        );
        assert_eq!(
            Some(Corner {
                vertex: 4,
                uv: Some(1),
                normal: None
            }),
            CornerLayout::PositionUv.parse_corner("5/2")
        );
        assert_eq!(
            Some(Corner {
                vertex: 2,
                uv: None,
                normal: Some(6)
            }),
            CornerLayout::PositionNormal.parse_corner("3//7")
        );
        assert_eq!(
            Some(Corner {
                vertex: 9,
                uv: Some(19),
                normal: Some(29)
            }),
            CornerLayout::PositionUvNormal.parse_corner("10/20/30")
        );
    }

    #[test]
    fn reject_mismatched_shapes() {
        assert_eq!(None, CornerLayout::Position.parse_corner("1/1"));
        assert_eq!(None, CornerLayout::PositionUv.parse_corner("1//1"));
        assert_eq!(None, CornerLayout::PositionNormal.parse_corner("1/1/1"));
        assert_eq!(None, CornerLayout::PositionUvNormal.parse_corner("1//1"));
        assert_eq!(None, CornerLayout::PositionUvNormal.parse_corner("1/1"));
    }

    #[test]
    fn reject_bad_indices() {
        // OBJ indices start at 1.
        assert_eq!(None, CornerLayout::Position.parse_corner("0"));
        // Relative indices are not supported.
        assert_eq!(None, CornerLayout::Position.parse_corner("-1"));
        assert_eq!(None, CornerLayout::PositionUv.parse_corner("1/x"));
        assert_eq!(None, CornerLayout::Position.parse_corner(""));
    }
}
