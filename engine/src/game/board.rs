use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// The 8 ways to win on a 3x3 grid: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 board, row-major, index 0..8. Cheap to copy, so search works on a
/// scratch copy and snapshots cross component boundaries by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_nine_available_moves() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_then_clear_restores_board_exactly() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        board.place(0, Mark::O);
        let before = board;

        board.place(7, Mark::X);
        board.clear(7);

        assert_eq!(board, before);
    }

    #[test]
    fn test_place_fills_cell() {
        let mut board = Board::new();
        board.place(3, Mark::O);

        assert_eq!(board.get(3), Some(Mark::O));
        assert!(!board.is_cell_empty(3));
        assert!(!board.available_moves().contains(&3));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for index in 0..BOARD_CELLS {
            board.place(index, if index % 2 == 0 { Mark::X } else { Mark::O });
        }

        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
