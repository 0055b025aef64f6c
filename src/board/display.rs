//! Fixed-width console rendering of a position.

use std::fmt::{self, Write};

use super::position::Position;
use super::types::{Side, BOARD_SIZE};

/// Labels and sizes used by [`Position::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Appended to the stand label of the side to move.
    pub turn_label: String,
    pub splitter_width: usize,
    /// Printed in place of an empty stand.
    pub empty_stand: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            turn_label: "【手番】".to_string(),
            splitter_width: 40,
            empty_stand: "無し".to_string(),
        }
    }
}

impl Position {
    /// Render the board with White's stand above and Black's below.
    #[must_use]
    pub fn render(&self, options: &DisplayOptions) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = self.write_board(&mut out, options);
        out
    }

    fn write_board<W: Write>(&self, out: &mut W, options: &DisplayOptions) -> fmt::Result {
        let splitter = "-".repeat(options.splitter_width);
        let grid_line = format!("{}+", "+---".repeat(BOARD_SIZE));

        writeln!(out, "{splitter}")?;
        self.write_stand(out, Side::White, "後手持駒", options)?;

        writeln!(out, "{grid_line}")?;
        for cells in self.field().rows() {
            for cell in cells {
                let symbol = cell.map(|piece| piece.to_sfen()).unwrap_or_default();
                write!(out, "|{symbol:^3}")?;
            }
            writeln!(out, "|")?;
            writeln!(out, "{grid_line}")?;
        }

        self.write_stand(out, Side::Black, "先手持駒", options)?;
        writeln!(out, "{splitter}")
    }

    fn write_stand<W: Write>(
        &self,
        out: &mut W,
        side: Side,
        label: &str,
        options: &DisplayOptions,
    ) -> fmt::Result {
        let stand = self.stand(side);
        let contents = if stand.is_empty() {
            options.empty_stand.clone()
        } else {
            stand.to_string()
        };
        let turn = if self.side_to_move() == side {
            options.turn_label.as_str()
        } else {
            ""
        };
        match side {
            Side::White => {
                writeln!(out, "{label}{turn}")?;
                writeln!(out, "{contents}")
            }
            Side::Black => {
                writeln!(out, "{contents}")?;
                writeln!(out, "{label}{turn}")
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_board(f, &DisplayOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_layout() {
        let text = Position::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        // splitter, label, stand, 19 grid lines, stand, label, splitter
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "-".repeat(40));
        assert_eq!(lines[1], "後手持駒");
        assert_eq!(lines[2], "無し");
        assert_eq!(lines[3], "+---+---+---+---+---+---+---+---+---+");
        assert_eq!(lines[4], "| l | n | s | g | k | g | s | n | l |");
        assert_eq!(lines[6], "|   | r |   |   |   |   |   | b |   |");
        assert_eq!(lines[23], "先手持駒【手番】");
    }

    #[test]
    fn test_custom_options() {
        let pos = Position::try_from_sfen("4k4/9/9/9/4+r4/9/9/9/4K4 w 2P 3").unwrap();
        let options = DisplayOptions {
            turn_label: "●".to_string(),
            splitter_width: 10,
            empty_stand: "-".to_string(),
        };
        let text = pos.render(&options);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "----------");
        assert_eq!(lines[1], "後手持駒●");
        assert_eq!(lines[2], "-");
        assert_eq!(lines[12], "|   |   |   |   |+r |   |   |   |   |");
        assert_eq!(lines[22], "歩x2");
        assert_eq!(lines[23], "先手持駒");
    }
}
