use glam::Vec2;

use crate::error::{VizError, VizResult};

/// One drawing instruction of a glyph outline. Curves list their control
/// points before the end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

/// Parses an outline string such as `"m 0 0 l 10 0 q 15 5 10 10 z"`.
///
/// Opcodes: `m` moveto, `l` lineto, `q` quadratic (ctrl, end), `b` cubic
/// (ctrl1, ctrl2, end), `z` close.
pub fn parse_outline(source: &str) -> VizResult<Vec<PathCommand>> {
    let mut tokens = source.split_whitespace();
    let mut commands = Vec::new();

    while let Some(op) = tokens.next() {
        let mut point = || -> VizResult<Vec2> {
            let x = number(tokens.next(), op)?;
            let y = number(tokens.next(), op)?;
            Ok(Vec2::new(x, y))
        };
        let command = match op {
            "m" => PathCommand::MoveTo(point()?),
            "l" => PathCommand::LineTo(point()?),
            "q" => {
                let ctrl = point()?;
                let to = point()?;
                PathCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let ctrl1 = point()?;
                let ctrl2 = point()?;
                let to = point()?;
                PathCommand::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => PathCommand::Close,
            other => return Err(VizError::glyph(format!("unknown outline opcode {other:?}"))),
        };
        commands.push(command);
    }
    Ok(commands)
}

fn number(token: Option<&str>, op: &str) -> VizResult<f32> {
    let token = token.ok_or_else(|| VizError::glyph(format!("truncated {op:?} command")))?;
    token
        .parse::<f32>()
        .map_err(|_| VizError::glyph(format!("invalid coordinate {token:?} in {op:?} command")))
}
