//! Core move engine for the water sort puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Color`: An opaque color identifier, compared only by equality.
//! - `Tube`: A capacity-bounded stack of color units, bottom to top.
//! - `Board`: The ordered set of tubes, plus the pour rules (legality test,
//!   transferred-unit arithmetic and the solved test).
//! - `Move`: One recorded pour.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::BoardError;
use crate::palette::Palette;

/// Number of units a tube holds in the standard puzzle.
pub const TUBE_CAPACITY: usize = 4;

/// Number of distinct colors a board may use (one per letter `A`..`Z`).
pub const MAX_COLORS: usize = 26;

/// A single color of liquid.
///
/// Colors carry no meaning beyond identity. In text they are written as the
/// uppercase letters `A` (id 0) through `Z` (id 25).
///
/// # Examples
///
/// ```
/// use water_sort_solver::engine::Color;
/// let c = Color::from_char('C').unwrap();
/// assert_eq!(c.id(), 2);
/// assert_eq!(c.to_char(), 'C');
/// assert!(Color::from_char('c').is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Creates a color from its id, or `None` if the id is out of range.
    pub fn new(id: u8) -> Option<Self> {
        if (id as usize) < MAX_COLORS {
            Some(Color(id))
        } else {
            None
        }
    }

    /// Parses an uppercase letter into a color.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Color(ch as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

/// A tube of stacked color units, stored bottom to top.
///
/// A tube does not know its own capacity; the owning `Board` does, so the
/// capacity-dependent queries take it as an argument.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tube {
    units: Vec<Color>,
}

impl Tube {
    pub fn new(units: Vec<Color>) -> Self {
        Tube { units }
    }

    pub fn empty() -> Self {
        Tube { units: Vec::new() }
    }

    /// The units in the tube, bottom first.
    pub fn units(&self) -> &[Color] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The topmost unit, if any.
    pub fn top(&self) -> Option<Color> {
        self.units.last().copied()
    }

    /// Length of the contiguous same-color run at the top of the tube.
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_solver::engine::{Color, Tube};
    /// let a = Color::from_char('A').unwrap();
    /// let b = Color::from_char('B').unwrap();
    /// assert_eq!(Tube::new(vec![a, b, b]).top_run(), 2);
    /// assert_eq!(Tube::empty().top_run(), 0);
    /// ```
    pub fn top_run(&self) -> usize {
        match self.top() {
            Some(top) => self.units.iter().rev().take_while(|&&c| c == top).count(),
            None => 0,
        }
    }

    /// Free slots left in the tube for the given capacity.
    pub fn room(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.units.len())
    }

    /// True when the tube is full and holds a single color.
    pub fn is_complete(&self, capacity: usize) -> bool {
        self.units.len() == capacity && self.top_run() == capacity
    }

    /// True when the tube needs no further work: empty or complete.
    pub fn is_sorted(&self, capacity: usize) -> bool {
        self.is_empty() || self.is_complete(capacity)
    }
}

/// One pour: `count` units moved from tube `from` to tube `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub count: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.count == 1 { "unit" } else { "units" };
        write!(
            f,
            "tube {} -> tube {}, {} {}",
            self.from, self.to, self.count, unit
        )
    }
}

/// The puzzle board: an ordered list of tubes sharing one capacity.
///
/// Tube indices are stable identifiers for the lifetime of the board. Equality
/// and hashing are structural and order-sensitive (tube order, then unit order
/// inside each tube), so a `Board` is its own canonical key for visited-state
/// sets.
///
/// Every pour produces a new `Board`; no operation here mutates an existing one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tubes: Vec<Tube>,
    capacity: usize,
}

impl Board {
    /// Creates a board after checking it is well formed.
    ///
    /// # Errors
    /// - `BoardError::NoTubes` if `tubes` is empty.
    /// - `BoardError::ZeroCapacity` if `capacity` is 0.
    /// - `BoardError::TubeOverflow` if any tube holds more than `capacity` units.
    pub fn new(tubes: Vec<Tube>, capacity: usize) -> Result<Self, BoardError> {
        if tubes.is_empty() {
            return Err(BoardError::NoTubes);
        }
        if capacity == 0 {
            return Err(BoardError::ZeroCapacity);
        }
        if let Some((tube, t)) = tubes.iter().enumerate().find(|(_, t)| t.len() > capacity) {
            return Err(BoardError::TubeOverflow {
                tube,
                len: t.len(),
                capacity,
            });
        }
        Ok(Board { tubes, capacity })
    }

    /// Creates a board with the standard `TUBE_CAPACITY`.
    pub fn from_tubes(tubes: Vec<Tube>) -> Result<Self, BoardError> {
        Self::new(tubes, TUBE_CAPACITY)
    }

    /// Deals a shuffled board with `colors` full tubes' worth of units and
    /// `empty_tubes` extra empty tubes, using the standard capacity.
    ///
    /// The same seed always yields the same board. Shuffled boards are not
    /// guaranteed to be solvable.
    pub fn new_random_with_seed(
        colors: usize,
        empty_tubes: usize,
        seed: u64,
    ) -> Result<Self, BoardError> {
        Self::new_random_with_capacity(colors, empty_tubes, TUBE_CAPACITY, seed)
    }

    /// Like `new_random_with_seed`, with every tube holding `capacity` units.
    pub fn new_random_with_capacity(
        colors: usize,
        empty_tubes: usize,
        capacity: usize,
        seed: u64,
    ) -> Result<Self, BoardError> {
        if colors > MAX_COLORS {
            return Err(BoardError::TooManyColors {
                requested: colors,
                max: MAX_COLORS,
            });
        }
        if capacity == 0 {
            return Err(BoardError::ZeroCapacity);
        }
        let mut units: Vec<Color> = (0..colors as u8)
            .flat_map(|id| std::iter::repeat(Color(id)).take(capacity))
            .collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        units.shuffle(&mut rng);

        let mut tubes: Vec<Tube> = units
            .chunks(capacity)
            .map(|chunk| Tube::new(chunk.to_vec()))
            .collect();
        tubes.extend((0..empty_tubes).map(|_| Tube::empty()));
        Self::new(tubes, capacity)
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    pub fn tube(&self, index: usize) -> Option<&Tube> {
        self.tubes.get(index)
    }

    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of same-color units at the top of tube `from`.
    ///
    /// Returns 0 for an empty tube or an out-of-range index.
    pub fn movable_run(&self, from: usize) -> usize {
        self.tube(from).map_or(0, Tube::top_run)
    }

    /// Whether pouring from `from` into `to` is legal.
    ///
    /// A pour is legal when the tubes differ, the source is non-empty, the
    /// destination has at least one free slot, and the destination is either
    /// empty or topped with the source's top color. The destination does not
    /// need room for the whole run: `pour` moves as much as fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_solver::utils::board_from_str_array;
    /// let board = board_from_str_array(&["AAB", "AB", "."], 4).unwrap();
    /// assert!(board.can_pour(0, 1));  // B onto B
    /// assert!(board.can_pour(0, 2));  // anything into an empty tube
    /// assert!(!board.can_pour(2, 0)); // empty source
    /// assert!(!board.can_pour(1, 1)); // same tube
    /// ```
    pub fn can_pour(&self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let (Some(src), Some(dst)) = (self.tube(from), self.tube(to)) else {
            return false;
        };
        let Some(color) = src.top() else {
            return false;
        };
        if dst.room(self.capacity) == 0 {
            return false;
        }
        dst.top().map_or(true, |top| top == color)
    }

    /// Pours from `from` into `to`, returning the resulting board and the
    /// number of units transferred.
    ///
    /// The transferred count is `min(movable_run(from), room in to)`, so a pour
    /// into a tube with too little room is partial rather than refused.
    /// Returns `None` if the pour is not legal. `self` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use water_sort_solver::utils::board_from_str_array;
    /// let board = board_from_str_array(&["BBB", "AB"], 4).unwrap();
    /// let (next, moved) = board.pour(0, 1).unwrap();
    /// assert_eq!(moved, 2);
    /// assert_eq!(next.tube(0).unwrap().len(), 1);
    /// assert_eq!(next.tube(1).unwrap().len(), 4);
    /// assert_eq!(board.tube(0).unwrap().len(), 3);
    /// ```
    pub fn pour(&self, from: usize, to: usize) -> Option<(Board, usize)> {
        if !self.can_pour(from, to) {
            return None;
        }
        let count = self
            .movable_run(from)
            .min(self.tubes[to].room(self.capacity));

        let mut next = self.clone();
        let split_at = next.tubes[from].units.len() - count;
        let poured = next.tubes[from].units.split_off(split_at);
        next.tubes[to].units.extend(poured);
        Some((next, count))
    }

    /// Replays a recorded move.
    ///
    /// Returns `None` if the pour is illegal or would transfer a different
    /// number of units than `mv.count`.
    pub fn apply_move(&self, mv: &Move) -> Option<Board> {
        match self.pour(mv.from, mv.to) {
            Some((next, count)) if count == mv.count => Some(next),
            _ => None,
        }
    }

    /// True when every tube is either empty or full of a single color.
    pub fn is_solved(&self) -> bool {
        self.tubes.iter().all(|t| t.is_sorted(self.capacity))
    }

    /// Number of units of each color across the whole board.
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        let mut counts = BTreeMap::new();
        for &c in self.tubes.iter().flat_map(|t| t.units.iter()) {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    /// Renders the board using the palette's colors as ANSI true-color
    /// backgrounds. When `highlight` is set, the source tube is marked `^` and
    /// the destination `v` under the index header.
    pub fn to_string_with_palette(&self, palette: &Palette, highlight: Option<&Move>) -> String {
        let mut output = self.header();
        if let Some(mv) = highlight {
            for idx in 0..self.tubes.len() {
                let mark = if idx == mv.from {
                    '^'
                } else if idx == mv.to {
                    'v'
                } else {
                    ' '
                };
                output.push_str(&format!("{:<4}", mark));
            }
            output.push('\n');
        }

        for slot in (0..self.capacity).rev() {
            for tube in &self.tubes {
                match tube.units.get(slot) {
                    Some(&c) => match palette.entry(c).and_then(|e| e.rgb()) {
                        Some((r, g, b)) => output.push_str(&format!(
                            "[\x1b[48;2;{};{};{}m{}\x1b[m] ",
                            r,
                            g,
                            b,
                            c.to_char()
                        )),
                        None => output.push_str(&format!("[{}] ", c.to_char())),
                    },
                    None => output.push_str("[ ] "),
                }
            }
            output.truncate(output.trim_end().len());
            if slot > 0 {
                output.push('\n');
            }
        }
        output
    }

    fn header(&self) -> String {
        let mut header = String::new();
        for idx in 0..self.tubes.len() {
            header.push_str(&format!(" {:<3}", idx));
        }
        header.truncate(header.trim_end().len());
        header.push('\n');
        header
    }
}

impl fmt::Display for Board {
    /// Formats the board top slot first, one column per tube.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = self.header();
        for slot in (0..self.capacity).rev() {
            let row: Vec<String> = self
                .tubes
                .iter()
                .map(|t| match t.units.get(slot) {
                    Some(c) => format!("[{}]", c.to_char()),
                    None => "[ ]".to_string(),
                })
                .collect();
            output.push_str(&row.join(" "));
            if slot > 0 {
                output.push('\n');
            }
        }
        write!(f, "{}", output)
    }
}
