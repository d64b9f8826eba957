//! Line classification.

use glam::{Vec2, Vec3};

use crate::error::{DecodeError, DecodeResult, RecordKind};
use crate::numeric::parse_fixed_float;

/// A classified, decoded line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record<'a> {
    Position(Vec3),
    TexCoord(Vec2),
    Normal(Vec3),
    /// Face body with the `f ` prefix removed. Resolved later, once the
    /// structure variant is known.
    Face(&'a str),
}

/// Classify a line and decode its values.
///
/// Returns `Ok(None)` for empty lines, comments, and lines whose leading
/// token is not recognised. Prefixes are matched in the order `vt`, `vn`,
/// `v`, `f`.
pub fn classify(line: &str) -> DecodeResult<Option<Record<'_>>> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let record = if line.starts_with("vt") {
        let body = strip_prefix(line, 3, RecordKind::TexCoord)?;
        let (s, t) = split_pair(body, RecordKind::TexCoord)?;
        Record::TexCoord(Vec2::new(parse_fixed_float(s)?, parse_fixed_float(t)?))
    } else if line.starts_with("vn") {
        let body = strip_prefix(line, 3, RecordKind::Normal)?;
        Record::Normal(parse_vec3(body, RecordKind::Normal)?)
    } else if line.starts_with('v') {
        let body = strip_prefix(line, 2, RecordKind::Position)?;
        Record::Position(parse_vec3(body, RecordKind::Position)?)
    } else if line.starts_with('f') {
        Record::Face(strip_prefix(line, 2, RecordKind::Face)?)
    } else {
        return Ok(None);
    };

    Ok(Some(record))
}

/// Drop a fixed-width prefix (keyword plus separator).
fn strip_prefix(line: &str, width: usize, kind: RecordKind) -> DecodeResult<&str> {
    line.get(width..)
        .filter(|body| !body.is_empty())
        .ok_or(DecodeError::MalformedRecord {
            kind,
            reason: "record has no values",
        })
}

fn split_pair(body: &str, kind: RecordKind) -> DecodeResult<(&str, &str)> {
    let space = body.find(' ').ok_or(DecodeError::MalformedRecord {
        kind,
        reason: "expected two values separated by a space",
    })?;
    Ok((&body[..space], &body[space + 1..]))
}

/// Split at the first and the last space.
///
/// Anything between those two spaces ends up in the middle section, so a
/// body with more than three values does not split cleanly.
pub(crate) fn split_triple(body: &str, kind: RecordKind) -> DecodeResult<[&str; 3]> {
    match (body.find(' '), body.rfind(' ')) {
        (Some(first), Some(last)) if first != last => Ok([
            &body[..first],
            &body[first + 1..last],
            &body[last + 1..],
        ]),
        _ => Err(DecodeError::MalformedRecord {
            kind,
            reason: "expected three values separated by spaces",
        }),
    }
}

fn parse_vec3(body: &str, kind: RecordKind) -> DecodeResult<Vec3> {
    let [x, y, z] = split_triple(body, kind)?;
    Ok(Vec3::new(
        parse_fixed_float(x)?,
        parse_fixed_float(y)?,
        parse_fixed_float(z)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_blank_comment_and_unknown_lines() {
        assert_eq!(classify(""), Ok(None));
        assert_eq!(classify("# v 1 2 3"), Ok(None));
        assert_eq!(classify("x 1 2 3"), Ok(None));
        assert_eq!(classify("o Cube"), Ok(None));
        assert_eq!(classify("s off"), Ok(None));
    }

    #[test]
    fn position() {
        assert_eq!(
            classify("v 1 -2 0.5"),
            Ok(Some(Record::Position(Vec3::new(1.0, -2.0, 0.5))))
        );
    }

    #[test]
    fn tex_coord() {
        assert_eq!(
            classify("vt 0.5 1"),
            Ok(Some(Record::TexCoord(Vec2::new(0.5, 1.0))))
        );
    }

    #[test]
    fn normal() {
        assert_eq!(
            classify("vn 0 1 0"),
            Ok(Some(Record::Normal(Vec3::Y)))
        );
    }

    #[test]
    fn face_body_is_passed_through() {
        assert_eq!(classify("f 1/1 2/2 3/3"), Ok(Some(Record::Face("1/1 2/2 3/3"))));
    }

    #[test]
    fn position_with_two_values_is_malformed() {
        assert_eq!(
            classify("v 1 2"),
            Err(DecodeError::MalformedRecord {
                kind: RecordKind::Position,
                reason: "expected three values separated by spaces",
            })
        );
    }

    #[test]
    fn bare_keyword_is_malformed() {
        assert!(matches!(
            classify("vt"),
            Err(DecodeError::MalformedRecord {
                kind: RecordKind::TexCoord,
                ..
            })
        ));
        assert!(matches!(
            classify("f"),
            Err(DecodeError::MalformedRecord {
                kind: RecordKind::Face,
                ..
            })
        ));
    }

    #[test]
    fn tex_coord_with_third_component_fails_on_the_space() {
        assert_eq!(
            classify("vt 0.5 0.5 0"),
            Err(DecodeError::InvalidNumericToken {
                character: ' ',
                position: 3
            })
        );
    }

    #[test]
    fn bad_number_propagates() {
        assert!(matches!(
            classify("v 1 2 1e3"),
            Err(DecodeError::InvalidNumericToken { character: 'e', .. })
        ));
    }
}
