use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::alphabet::get_idx;
use crate::boggle::parse::parse_row;
use crate::error::{Error, Result};

/// The classic board is 4x4; anything rectangular works.
pub const BOARD_WIDTH: usize = 4;
pub const BOARD_HEIGHT: usize = 4;

/// A rectangular grid of tiles. Each tile holds one or more letters (`QU`),
/// kept in whatever case they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<String>>,
}

impl Board {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Board> {
        let width = rows.first().map(Vec::len).ok_or(Error::EmptyBoard)?;
        if width == 0 {
            return Err(Error::EmptyBoard);
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedBoard { line: idx + 1, expected: width, found: row.len() });
            }
            for (col, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    return Err(Error::EmptyTile { row: idx, col });
                }
                check_label(cell)?;
            }
        }
        Ok(Board { cells: rows })
    }

    /// One row per line, tiles separated by tabs. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Board> {
        let mut rows: Vec<Vec<String>> = vec![];
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let cells = parse_row(line.trim_end_matches('\r')).ok_or_else(|| Error::MalformedLine {
                line: line_no,
                reason: format!("expected tab-separated letters, found {:?}", line),
            })?;
            if let Some(first) = rows.first() {
                if first.len() != cells.len() {
                    return Err(Error::RaggedBoard { line: line_no, expected: first.len(), found: cells.len() });
                }
            }
            rows.push(cells.into_iter().map(String::from).collect());
        }
        let board = Board::from_rows(rows)?;
        debug!("Parsed {}x{} board", board.width(), board.height());
        Ok(board)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Board> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Board::parse(&text)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
        Board::from_reader(File::open(path)?)
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Every `(row, col)`, row by row.
    pub fn positions(&self) -> impl Iterator<Item=(usize, usize)> {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    pub fn rows(&self) -> impl Iterator<Item=&[String]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

fn check_label(label: &str) -> Result<()> {
    match label.chars().find(|&c| get_idx(c).is_none()) {
        Some(character) => Err(Error::InvalidCharacter { word: label.to_string(), character }),
        None => Ok(()),
    }
}

impl Display for Board {
    /// Each tile followed by a tab, one row per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}\t", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
