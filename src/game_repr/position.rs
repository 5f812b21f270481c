use std::fmt;
use std::str::FromStr;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND RULES
 */

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Board plus side to move.
///
/// `Position` is a plain fixed-size array and is `Copy`, so every search node
/// owns its own board and sibling branches can never observe each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    current: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard opening: four discs in the centre, Black to move.
    pub fn new() -> Self {
        let mut pos = Self::empty(Color::Black);
        pos.cells[3][3] = Cell::White;
        pos.cells[3][4] = Cell::Black;
        pos.cells[4][3] = Cell::Black;
        pos.cells[4][4] = Cell::White;
        pos
    }

    pub fn empty(current: Color) -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current,
        }
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn count(&self, color: Color) -> u32 {
        let target = color.to_cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u32
    }

    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }

    /// Legal moves for the side to move, in row-major order.
    pub fn available_moves(&self) -> MoveList {
        self.moves_for(self.current)
    }

    fn moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.flips_anything(color, row, col) {
                    moves.push(Move::at(row, col));
                }
            }
        }
        moves
    }

    fn has_moves(&self, color: Color) -> bool {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .any(|(row, col)| self.flips_anything(color, row, col))
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.flips_anything(self.current, mv.row(), mv.col())
    }

    /// The game is over once the side to move has nothing to play. Passes are
    /// resolved by [`Position::apply_move`] and when parsing, so the opponent
    /// is stuck as well.
    pub fn is_terminal(&self) -> bool {
        !self.has_moves(self.current)
    }

    /// Disc-count winner of a finished game; `None` for a draw.
    pub fn winner(&self) -> Option<Color> {
        let black = self.count(Color::Black);
        let white = self.count(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Plays `mv` for the side to move and returns the resulting position.
    ///
    /// The turn passes to the opponent unless the opponent has no legal
    /// reply while the mover still does, in which case the mover plays again.
    pub fn apply_move(&self, mv: Move) -> Result<Position, GameError> {
        let (row, col) = (mv.row(), mv.col());
        if !self.cells[row][col].is_empty() {
            return Err(GameError::Occupied { row, col });
        }
        if !self.flips_anything(self.current, row, col) {
            return Err(GameError::IllegalMove { mv });
        }

        let mut next = *self;
        let mover = self.current.to_cell();
        next.cells[row][col] = mover;

        for (dr, dc) in DIRECTIONS {
            let run = self.flip_run(self.current, row, col, dr, dc);
            let (mut r, mut c) = (row as i8, col as i8);
            for _ in 0..run {
                r += dr;
                c += dc;
                next.cells[r as usize][c as usize] = mover;
            }
        }

        next.current = self.current.opposite();
        next.resolve_pass();

        Ok(next)
    }

    /// Hands the turn over when the side to move is stuck but its opponent
    /// is not.
    fn resolve_pass(&mut self) {
        let opponent = self.current.opposite();
        if !self.has_moves(self.current) && self.has_moves(opponent) {
            self.current = opponent;
        }
    }

    fn flips_anything(&self, color: Color, row: usize, col: usize) -> bool {
        self.cells[row][col].is_empty()
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.flip_run(color, row, col, dr, dc) > 0)
    }

    /// Number of opponent discs bracketed by a disc placed at (row, col) in
    /// direction (dr, dc). Zero when the run is not closed by `color`.
    fn flip_run(&self, color: Color, row: usize, col: usize, dr: i8, dc: i8) -> usize {
        let player = color.to_cell();
        let opponent = color.opposite().to_cell();

        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut run = 0;

        while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            match self.cells[r as usize][c as usize] {
                cell if cell == opponent => {
                    run += 1;
                    r += dr;
                    c += dc;
                }
                cell if cell == player => return run,
                _ => return 0,
            }
        }

        0
    }
}

/// Eight rows of `B`/`W`/`.` (whitespace inside a row is ignored), optionally
/// followed by a line naming the side to move. Black moves by default. A named
/// side with no legal move passes straight away.
impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        let mut pos = Position::empty(Color::Black);

        for row in 0..BOARD_SIZE {
            let line = lines
                .next()
                .ok_or_else(|| GameError::Parse(format!("missing row {row}")))?;
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(GameError::Parse(format!(
                    "row {row} has {} cells: '{line}'",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                pos.cells[row][col] = Cell::from_char(ch)
                    .ok_or_else(|| GameError::Parse(format!("bad cell '{ch}' in row {row}")))?;
            }
        }

        if let Some(side) = lines.next() {
            let word = side.split_whitespace().next().unwrap_or_default();
            pos.current = match word.to_ascii_lowercase().as_str() {
                "b" | "black" => Color::Black,
                "w" | "white" => Color::White,
                _ => return Err(GameError::Parse(format!("bad side to move '{side}'"))),
            };
        }

        if let Some(extra) = lines.next() {
            return Err(GameError::Parse(format!("unexpected trailing line '{extra}'")));
        }

        pos.resolve_pass();
        Ok(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(Cell::to_char).collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "{} to move", self.current)
    }
}
