//! The room file format.
//!
//! ```text
//! ROOM NAME: <name>
//! CONNECTION 1: <name>
//! ...
//! CONNECTION k: <name>
//! ROOM TYPE: <START_ROOM|MID_ROOM|END_ROOM>
//! ```
//!
//! Every line ends with `\n`. Connections are written in the room's
//! connection order and numbered from 1.

use adventure_graph::{Graph, GraphError, Role, Room};

/// File name suffix for room files: `<Name>_room`.
pub const ROOM_FILE_SUFFIX: &str = "_room";

const NAME_KEY: &str = "ROOM NAME";
const CONNECTION_KEY: &str = "CONNECTION";
const TYPE_KEY: &str = "ROOM TYPE";

/// Why a room file could not be decoded.
///
/// Kept separate from [`StoreError`](crate::StoreError) because decoding
/// works on text alone; the store wraps it together with the file path.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The first non-blank line is not a `ROOM NAME:` line.
    #[error("expected `ROOM NAME:` line, found {0:?}")]
    MissingName(String),

    /// The file ends before its `ROOM TYPE:` line.
    #[error("missing `ROOM TYPE:` line")]
    MissingType,

    /// A line is neither a connection nor the type trailer, or comes
    /// after the trailer.
    #[error("unexpected line {0:?}")]
    UnexpectedLine(String),

    /// The `ROOM TYPE:` value is not a known role token.
    #[error(transparent)]
    Role(#[from] GraphError),
}

/// One room as it appears in a file: connections are still names, not ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub name: String,
    pub connections: Vec<String>,
    pub role: Role,
}

/// File name for a room called `name`.
pub fn room_file_name(name: &str) -> String {
    format!("{name}{ROOM_FILE_SUFFIX}")
}

/// Renders `room` (which must belong to `graph`) in the room file format.
pub fn encode_room(graph: &Graph, room: &Room) -> String {
    let mut out = format!("{NAME_KEY}: {}\n", room.name());
    for (i, target) in graph.connection_names(room.id()).iter().enumerate() {
        out.push_str(&format!("{CONNECTION_KEY} {}: {target}\n", i + 1));
    }
    out.push_str(&format!("{TYPE_KEY}: {}\n", room.role()));
    out
}

/// Parses the contents of a room file.
///
/// A file that stops before its `ROOM TYPE` line is rejected with
/// [`DecodeError::MissingType`]. Blank lines are skipped.
pub fn decode_room(text: &str) -> Result<RoomRecord, DecodeError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let first = lines.next().unwrap_or_default();
    let name = value_of(first, NAME_KEY)
        .ok_or_else(|| DecodeError::MissingName(first.to_string()))?
        .to_string();

    let mut connections = Vec::new();
    let role = loop {
        let line = lines.next().ok_or(DecodeError::MissingType)?;
        if let Some(token) = value_of(line, TYPE_KEY) {
            break token.parse::<Role>()?;
        }
        let target =
            connection_of(line).ok_or_else(|| DecodeError::UnexpectedLine(line.to_string()))?;
        connections.push(target.to_string());
    };

    if let Some(extra) = lines.next() {
        return Err(DecodeError::UnexpectedLine(extra.to_string()));
    }

    Ok(RoomRecord {
        name,
        connections,
        role,
    })
}

/// Value of a `KEY: value` line, or `None` if the key differs or the value is empty.
fn value_of<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let value = line.strip_prefix(key)?.strip_prefix(": ")?.trim_end();
    (!value.is_empty()).then_some(value)
}

/// Target of a `CONNECTION n: name` line.
fn connection_of(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(CONNECTION_KEY)?.strip_prefix(' ')?;
    let (number, target) = rest.split_once(": ")?;
    number.parse::<usize>().ok()?;
    let target = target.trim_end();
    (!target.is_empty()).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut g = Graph::new();
        let kitchen = g.add_room("Kitchen", Role::Start);
        let library = g.add_room("Library", Role::Mid);
        let armory = g.add_room("Armory", Role::End);
        g.add_edge(kitchen, library).unwrap();
        g.add_edge(kitchen, armory).unwrap();
        g
    }

    #[test]
    fn test_encode_room_layout() {
        let g = sample_graph();
        let text = encode_room(&g, &g.rooms()[0]);
        assert_eq!(
            text,
            "ROOM NAME: Kitchen\n\
             CONNECTION 1: Library\n\
             CONNECTION 2: Armory\n\
             ROOM TYPE: START_ROOM\n"
        );
    }

    #[test]
    fn test_decode_room_reads_fields() {
        let record = decode_room(
            "ROOM NAME: Office\nCONNECTION 1: Gallery\nCONNECTION 2: Stables\nROOM TYPE: END_ROOM\n",
        )
        .unwrap();
        assert_eq!(record.name, "Office");
        assert_eq!(record.connections, vec!["Gallery", "Stables"]);
        assert_eq!(record.role, Role::End);
    }

    #[test]
    fn test_decode_room_requires_type_trailer() {
        let err = decode_room("ROOM NAME: Office\nCONNECTION 1: Gallery\n").unwrap_err();
        assert!(matches!(err, DecodeError::MissingType), "{err}");
    }

    #[test]
    fn test_decode_room_rejects_unknown_role() {
        let err = decode_room("ROOM NAME: Office\nROOM TYPE: LOBBY\n").unwrap_err();
        assert!(
            matches!(err, DecodeError::Role(GraphError::UnknownRole(ref t)) if t == "LOBBY"),
            "{err}"
        );
    }

    #[test]
    fn test_decode_room_rejects_garbage() {
        assert!(matches!(decode_room(""), Err(DecodeError::MissingName(_))));
        assert!(matches!(decode_room("NAME: Office\n"), Err(DecodeError::MissingName(_))));
        assert!(matches!(
            decode_room("ROOM NAME: Office\nCONNECTION x: Gallery\nROOM TYPE: MID_ROOM\n"),
            Err(DecodeError::UnexpectedLine(_))
        ));
        assert!(matches!(
            decode_room("ROOM NAME: Office\nROOM TYPE: MID_ROOM\nCONNECTION 1: Gallery\n"),
            Err(DecodeError::UnexpectedLine(ref l)) if l == "CONNECTION 1: Gallery"
        ));
        assert!(matches!(
            decode_room("ROOM NAME: \nROOM TYPE: MID_ROOM\n"),
            Err(DecodeError::MissingName(_))
        ));
    }

    #[test]
    fn test_decode_room_tolerates_crlf_and_blank_lines() {
        let record = decode_room("ROOM NAME: Office\r\n\r\nCONNECTION 1: Gallery\r\nROOM TYPE: MID_ROOM\r\n\n").unwrap();
        assert_eq!(record.connections, vec!["Gallery"]);
        assert_eq!(record.role, Role::Mid);
    }

    #[test]
    fn test_room_file_name() {
        assert_eq!(room_file_name("Theater"), "Theater_room");
    }
}
