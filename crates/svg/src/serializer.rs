//! Writes paths using the SVG path data syntax.

use crate::path::{Command, CommandKind, Path};

/// Serializes a path.
///
/// Values are rounded to `decimals` fractional digits if set.
///
/// With `minify`, the output is as short as the syntax allows:
///
/// - the letter of a command that repeats the previous one is omitted, and so is the
///   letter of a line following a move-to,
/// - the flags of arcs are glued to the x coordinate of their end point,
/// - leading zeros and the spaces before negative numbers are removed,
/// - close path commands are lower case.
///
/// ```
/// # extern crate pathdata_svg;
/// use pathdata_svg::{parse, to_path_string};
///
/// let path = parse("M 10 10 l 5 -5 l 0.5 -0.5 Z").unwrap();
/// assert_eq!(to_path_string(&path, None, false), "M10 10l5 -5l0.5 -0.5Z");
/// assert_eq!(to_path_string(&path, None, true), "m10 10 5-5 .5-.5z");
/// ```
pub fn to_path_string(path: &Path, decimals: Option<u32>, minify: bool) -> String {
    let mut output = String::new();
    let mut prev_letter = None;

    for (idx, cmd) in path.iter().enumerate() {
        let cmd = match decimals {
            Some(decimals) => cmd.rounded(decimals),
            None => cmd.clone(),
        };

        let mut letter = cmd.letter();
        if minify {
            if idx == 0 && path.commands().get(1).map(Command::letter) == Some('l') {
                // Following lines are relative to the first point either way.
                letter = 'm';
            }
            if cmd.kind() == CommandKind::ClosePath {
                letter = 'z';
            }
        }

        let implicit = minify && prev_letter.map_or(false, |prev| is_implicit(prev, letter));
        if !implicit {
            output.push(letter);
        }

        for (i, token) in tokens(&cmd, minify).iter().enumerate() {
            let separated = i > 0 || implicit;
            if separated && !(minify && token.starts_with('-')) {
                output.push(' ');
            }
            output.push_str(token);
        }

        prev_letter = Some(letter);
    }

    output
}

// Whether the letter can be left out after the previous one.
fn is_implicit(prev: char, letter: char) -> bool {
    match letter {
        'M' | 'm' | 'Z' | 'z' => false,
        'L' => prev == 'M' || prev == 'L',
        'l' => prev == 'm' || prev == 'l',
        _ => prev == letter,
    }
}

fn tokens(cmd: &Command, minify: bool) -> Vec<String> {
    let values = cmd.values();
    match cmd.arc_flags() {
        Some(flags) if minify => {
            let mut flags_and_x = String::new();
            flags_and_x.push(if flags.large_arc { '1' } else { '0' });
            flags_and_x.push(if flags.sweep { '1' } else { '0' });
            flags_and_x.push_str(&number(values[5], true));

            vec![
                number(values[0], true),
                number(values[1], true),
                number(values[2], true),
                flags_and_x,
                number(values[6], true),
            ]
        }
        _ => values.iter().map(|&value| number(value, minify)).collect(),
    }
}

fn number(value: f64, minify: bool) -> String {
    // Avoids printing negative zeros.
    let s = (value + 0.0).to_string();
    if !minify {
        return s;
    }

    if let Some(fraction) = s.strip_prefix("0.") {
        format!(".{}", fraction)
    } else if let Some(fraction) = s.strip_prefix("-0.") {
        format!("-.{}", fraction)
    } else {
        s
    }
}

#[cfg(test)]
use crate::parser::parse;

#[test]
fn plain() {
    let path = parse("M 0 0 L 10 -10 H 5 a5 5 30 1 0 10 10 z").unwrap();
    assert_eq!(
        to_path_string(&path, None, false),
        "M0 0L10 -10H5a5 5 30 1 0 10 10z"
    );
}

#[test]
fn minified() {
    let src = "M10 10 l5 -5 l0.5 -0.5 h10 h-0.25 a5 5 0 1 1 -10 0 L 3 3 z M 1 1 L 2 2";
    let path = parse(src).unwrap();

    let minified = to_path_string(&path, None, true);
    assert_eq!(
        minified,
        "m10 10 5-5 .5-.5h10-.25a5 5 0 11-10 0L3 3zM1 1 2 2"
    );

    assert_eq!(parse(&minified).unwrap(), path);
}

#[test]
fn glued_arc_flags() {
    let path = parse("M0 0 a5 5 0 0 1 0.5 0 a5 5 0 1 0 -0.5 0").unwrap();

    let minified = to_path_string(&path, None, true);
    assert_eq!(minified, "M0 0a5 5 0 01.5 0 5 5 0 10-.5 0");
    assert_eq!(parse(&minified).unwrap(), path);
}

#[test]
fn rounding() {
    let path = parse("M 1.23456 -0.0001 L 2.5 2.4449").unwrap();
    assert_eq!(to_path_string(&path, Some(2), false), "M1.23 0L2.5 2.44");
    assert_eq!(to_path_string(&path, Some(0), true), "M1 0 3 2");
}
