//! Tower of Hanoi move generation.

use std::fmt;

/// One of the three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Peg::A => write!(f, "A"),
            Peg::B => write!(f, "B"),
            Peg::C => write!(f, "C"),
        }
    }
}

/// A single disk move between two pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Generates the move sequence transferring `disks` disks from `from` to
/// `to` using `via` as the auxiliary peg.
///
/// Produces exactly `2^disks - 1` moves in O(2ⁿ) time with O(n) recursion
/// depth. Zero disks yield an empty sequence.
///
/// # Example
///
/// ```
/// use algolab_core::{hanoi_moves, Peg};
///
/// let moves = hanoi_moves(3, Peg::A, Peg::B, Peg::C);
/// assert_eq!(moves.len(), 7);
/// assert_eq!(moves[0].from, Peg::A);
/// assert_eq!(moves[0].to, Peg::C);
/// ```
pub fn hanoi_moves(disks: u32, from: Peg, via: Peg, to: Peg) -> Vec<Move> {
    let mut moves = Vec::new();
    push_moves(disks, from, via, to, &mut moves);
    moves
}

fn push_moves(disks: u32, from: Peg, via: Peg, to: Peg, moves: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }
    push_moves(disks - 1, from, to, via, moves);
    moves.push(Move { from, to });
    push_moves(disks - 1, via, from, to, moves);
}
