use std::collections::BTreeSet;
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::boggle::board::Board;
use crate::boggle::mask::VisitMask;
use crate::error::Result;
use crate::wordlist::index::Index;

/// Row-major offsets of the eight surrounding cells.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Finds the words on a board, reusing one visitation mask across searches.
pub struct Solver<'a, D: ?Sized> {
    board: &'a Board,
    dictionary: &'a D,
    mask: VisitMask,
}

impl<'a, D: Index + ?Sized> Solver<'a, D> {
    pub fn new(board: &'a Board, dictionary: &'a D) -> Self {
        Solver { board, dictionary, mask: VisitMask::for_board(board), }
    }

    /// Every dictionary word spelled by a path of adjacent, distinct cells, in
    /// the board's own casing.
    pub fn find_valid_words(&mut self) -> Result<BTreeSet<String>> {
        let start = Instant::now();
        let mut words = BTreeSet::new();
        let mut path = String::new();
        for (row, col) in self.board.positions() {
            search(self.board, self.dictionary, row, col, &mut path, &mut self.mask, &mut words)?;
        }
        debug_assert!(self.mask.is_clear());
        debug!("Found {} words in {:?}", words.len(), start.elapsed());
        Ok(words)
    }

    pub fn mask(&self) -> &VisitMask {
        &self.mask
    }
}

pub fn find_valid_words<D: Index + ?Sized>(board: &Board, dictionary: &D) -> Result<BTreeSet<String>> {
    Solver::new(board, dictionary).find_valid_words()
}

/// Same as [`find_valid_words`], with each start cell searched on the rayon pool
/// using its own mask.
pub fn find_valid_words_parallel<D>(board: &Board, dictionary: &D) -> Result<BTreeSet<String>>
    where D: Index + Sync + ?Sized {
    let start = Instant::now();
    let positions: Vec<(usize, usize)> = board.positions().collect();
    let words = positions.into_par_iter()
        .map(|(row, col)| -> Result<BTreeSet<String>> {
            let mut mask = VisitMask::for_board(board);
            let mut path = String::new();
            let mut words = BTreeSet::new();
            search(board, dictionary, row, col, &mut path, &mut mask, &mut words)?;
            Ok(words)
        })
        .try_reduce(BTreeSet::new, |mut all, words| {
            all.extend(words);
            Ok(all)
        })?;
    debug!("Found {} words in {:?} (parallel)", words.len(), start.elapsed());
    Ok(words)
}

/// One DFS step: extends `path` with the tile at `(row, col)` and explores from
/// there. `path` and `mask` are restored before returning.
fn search<D: Index + ?Sized>(board: &Board, dictionary: &D,
                             row: usize, col: usize,
                             path: &mut String,
                             mask: &mut VisitMask,
                             words: &mut BTreeSet<String>) -> Result<()> {
    let tile = match board.cell(row, col) {
        Some(tile) if !mask.is_visited(row, col) => tile,
        _ => return Ok(()),
    };

    let len = path.len();
    path.push_str(tile);
    let result = extend(board, dictionary, row, col, path, mask, words);
    path.truncate(len);
    result
}

fn extend<D: Index + ?Sized>(board: &Board, dictionary: &D,
                             row: usize, col: usize,
                             path: &mut String,
                             mask: &mut VisitMask,
                             words: &mut BTreeSet<String>) -> Result<()> {
    // No word goes this way.
    if !dictionary.contains_prefix(path)? {
        return Ok(());
    }

    let mut mask = mask.visit(row, col);
    if dictionary.contains(path)? {
        words.insert(path.clone());
    }
    for (dr, dc) in NEIGHBOURS {
        let (next_row, next_col) = match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
            (Some(r), Some(c)) => (r, c),
            _ => continue,
        };
        search(board, dictionary, next_row, next_col, path, &mut mask, words)?;
    }
    Ok(())
}
