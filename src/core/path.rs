use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Vertex in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing command of an SVG-style path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Vertex),
    LineTo(Vertex),
    CubicTo {
        control1: Vertex,
        control2: Vertex,
        to: Vertex,
    },
    Close,
}

/// Ordered path commands with SVG `d` attribute serialization.
///
/// Formatting is `M x y`, ` C x1 y1, x2 y2, x y`, ` L x y` and ` Z`, with
/// integral coordinates printed without a fractional part. Serde uses the
/// same string form, so JSON snapshots carry plain `d` attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: SmallVec<[PathCommand; 16]>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Vertex) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Vertex) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, control1: Vertex, control2: Vertex, to: Vertex) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns `true` when every coordinate of every command is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let finite = |v: &Vertex| v.x.is_finite() && v.y.is_finite();
        self.commands.iter().all(|command| match command {
            PathCommand::MoveTo(v) | PathCommand::LineTo(v) => finite(v),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => finite(control1) && finite(control2) && finite(to),
            PathCommand::Close => true,
        })
    }

    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl FromStr for PathData {
    type Err = ChartError;

    /// Parses the `M`/`L`/`C`/`Z` subset written by `Display`.
    fn from_str(input: &str) -> ChartResult<Self> {
        let mut tokens = input.split_whitespace();
        let mut path = Self::new();
        while let Some(command) = tokens.next() {
            match command {
                "M" => {
                    path.move_to(parse_vertex(&mut tokens, input)?);
                }
                "L" => {
                    path.line_to(parse_vertex(&mut tokens, input)?);
                }
                "C" => {
                    let control1 = parse_vertex(&mut tokens, input)?;
                    let control2 = parse_vertex(&mut tokens, input)?;
                    let to = parse_vertex(&mut tokens, input)?;
                    path.cubic_to(control1, control2, to);
                }
                "Z" => {
                    path.close();
                }
                _ => return Err(invalid_path(input, "unknown command")),
            }
        }
        Ok(path)
    }
}

fn parse_vertex(tokens: &mut SplitWhitespace<'_>, input: &str) -> ChartResult<Vertex> {
    let mut number = || -> ChartResult<f64> {
        tokens
            .next()
            .ok_or_else(|| invalid_path(input, "missing coordinate"))?
            .trim_end_matches(',')
            .parse::<f64>()
            .map_err(|_| invalid_path(input, "bad coordinate"))
    };
    let x = number()?;
    let y = number()?;
    Ok(Vertex::new(x, y))
}

fn invalid_path(input: &str, reason: &str) -> ChartError {
    ChartError::InvalidData(format!("path `{input}`: {reason}"))
}

impl Serialize for PathData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PathData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 prints as "-0" otherwise
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(v) => write!(f, "M {} {}", Num(v.x), Num(v.y))?,
                PathCommand::LineTo(v) => write!(f, "L {} {}", Num(v.x), Num(v.y))?,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    f,
                    "C {} {}, {} {}, {} {}",
                    Num(control1.x),
                    Num(control1.y),
                    Num(control2.x),
                    Num(control2.y),
                    Num(to.x),
                    Num(to.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}
