use std::ops::{Deref, DerefMut};

use crate::boggle::board::Board;

/// Which cells the current search path already uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitMask {
    width: usize,
    visited: Vec<bool>,
}

impl VisitMask {
    pub fn new(width: usize, height: usize) -> VisitMask {
        VisitMask { width, visited: vec![false; width * height] }
    }

    pub fn for_board(board: &Board) -> VisitMask {
        VisitMask::new(board.width(), board.height())
    }

    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self.visited[row * self.width + col]
    }

    /// Nothing is marked.
    pub fn is_clear(&self) -> bool {
        self.visited.iter().all(|&v| !v)
    }

    /// Marks `(row, col)` until the returned guard is dropped. The guard derefs
    /// to the mask so deeper steps can keep marking through it.
    pub fn visit(&mut self, row: usize, col: usize) -> Visit<'_> {
        let idx = row * self.width + col;
        debug_assert!(!self.visited[idx]);
        self.visited[idx] = true;
        Visit { mask: self, idx }
    }
}

pub struct Visit<'m> {
    mask: &'m mut VisitMask,
    idx: usize,
}

impl Deref for Visit<'_> {
    type Target = VisitMask;

    fn deref(&self) -> &VisitMask {
        &*self.mask
    }
}

impl DerefMut for Visit<'_> {
    fn deref_mut(&mut self) -> &mut VisitMask {
        &mut *self.mask
    }
}

impl Drop for Visit<'_> {
    fn drop(&mut self) {
        self.mask.visited[self.idx] = false;
    }
}
