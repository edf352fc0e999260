//! The `[letter, ...values]` representation of path commands.
//!
//! This is the representation used by a number of JavaScript tools, for example
//! `[["M", 0, 0], ["L", 10, 10], ["Z"]]`.

use crate::commands::{Command, CommandKind};
use crate::PathError;

/// A command as a letter followed by its values.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayCommand {
    pub letter: char,
    pub values: Vec<f64>,
}

impl ArrayCommand {
    pub fn new(letter: char, values: &[f64]) -> Self {
        ArrayCommand {
            letter,
            values: values.to_vec(),
        }
    }

    /// Checks the letter and the number of values.
    pub fn to_command(&self) -> Result<Command, PathError> {
        let (kind, relative) = CommandKind::from_letter(self.letter)
            .ok_or_else(|| PathError::UnknownCommand(self.letter.to_string()))?;

        Command::new(kind, relative, &self.values)
    }
}

impl<'l> From<&'l Command> for ArrayCommand {
    fn from(cmd: &'l Command) -> Self {
        ArrayCommand::new(cmd.letter(), cmd.values())
    }
}

#[cfg(feature = "serialization")]
mod serialization {
    use super::ArrayCommand;

    use serde::de::{Error, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    impl serde::Serialize for ArrayCommand {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
            let mut letter = [0; 4];
            seq.serialize_element(self.letter.encode_utf8(&mut letter))?;
            for value in &self.values {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }

    struct ArrayCommandVisitor;

    impl<'de> Visitor<'de> for ArrayCommandVisitor {
        type Value = ArrayCommand;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a command letter followed by numbers")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ArrayCommand, A::Error> {
            let letter: String = seq
                .next_element()?
                .ok_or_else(|| Error::invalid_length(0, &self))?;

            let mut chars = letter.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(Error::invalid_value(
                        serde::de::Unexpected::Str(&letter),
                        &"a single letter",
                    ));
                }
            };

            let mut values = Vec::new();
            while let Some(value) = seq.next_element()? {
                values.push(value);
            }

            Ok(ArrayCommand { letter, values })
        }
    }

    impl<'de> serde::Deserialize<'de> for ArrayCommand {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(ArrayCommandVisitor)
        }
    }
}

#[test]
fn array_conversions() {
    use crate::math::point;
    use crate::Path;

    let path = Path::new(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::line_to(point(10.0, 5.0)).relative(),
        Command::close(),
    ])
    .unwrap();

    let array = path.to_array();
    assert_eq!(
        array,
        vec![
            ArrayCommand::new('M', &[0.0, 0.0]),
            ArrayCommand::new('l', &[10.0, 5.0]),
            ArrayCommand::new('Z', &[]),
        ]
    );

    assert_eq!(Path::from_array(&array), Ok(path));
}

#[test]
fn invalid_arrays() {
    use crate::Path;

    assert_eq!(
        ArrayCommand::new('X', &[1.0]).to_command(),
        Err(PathError::UnknownCommand("X".to_string()))
    );
    assert_eq!(
        ArrayCommand::new('q', &[1.0, 2.0]).to_command(),
        Err(PathError::Arity {
            kind: CommandKind::QuadraticCurveTo,
            expected: 4,
            actual: 2,
        })
    );
    assert_eq!(
        Path::from_array(&[ArrayCommand::new('L', &[1.0, 2.0])]),
        Err(PathError::MissingMoveTo(CommandKind::LineTo))
    );
}

#[cfg(feature = "serialization")]
#[test]
fn json_arrays() {
    let commands: Vec<ArrayCommand> = serde_json::from_str(r#"[["M", 1, 2.5], ["z"]]"#).unwrap();
    assert_eq!(
        commands,
        vec![ArrayCommand::new('M', &[1.0, 2.5]), ArrayCommand::new('z', &[])]
    );

    let json = serde_json::to_string(&commands).unwrap();
    assert_eq!(json, r#"[["M",1.0,2.5],["z"]]"#);

    assert!(serde_json::from_str::<ArrayCommand>(r#"["ML", 1, 2]"#).is_err());
}
