use std::path::Path;

use crate::engine::{Board, Color, Tube};
use crate::error::BoardError;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice describes one tube, listing its units from the bottom up
/// as uppercase letters `A`..`Z`. A `.` marks an empty slot and is skipped, so
/// `"AB.."` and `"AB"` describe the same tube and `"."` is an empty tube.
/// Surrounding whitespace is ignored.
///
/// # Arguments
/// * `s`: One string per tube, in tube-index order.
/// * `capacity`: The capacity shared by every tube.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(BoardError)` if a character is not a color letter or `.`, a tube
///   holds more than `capacity` units, `s` is empty, or `capacity` is 0.
///   Line and column numbers in errors are 1-based.
///
/// # Examples
/// ```
/// use water_sort_solver::utils::board_from_str_array;
/// use water_sort_solver::engine::Color;
///
/// let board = board_from_str_array(&["ABB", "."], 4).unwrap();
/// assert_eq!(board.tube_count(), 2);
/// assert_eq!(board.tube(0).unwrap().top(), Color::from_char('B'));
/// assert!(board.tube(1).unwrap().is_empty());
///
/// assert!(board_from_str_array(&["AxB"], 4).is_err());
/// assert!(board_from_str_array(&["AAAAA"], 4).is_err());
/// ```
pub fn board_from_str_array(s: &[&str], capacity: usize) -> Result<Board, BoardError> {
    let mut tubes = Vec::with_capacity(s.len());
    for (idx, row) in s.iter().enumerate() {
        tubes.push(parse_tube(row.trim(), idx + 1)?);
    }
    Board::new(tubes, capacity)
}

fn parse_tube(row: &str, line: usize) -> Result<Tube, BoardError> {
    let mut units = Vec::new();
    for (col, ch) in row.chars().enumerate() {
        if ch == '.' {
            continue;
        }
        let color = Color::from_char(ch).ok_or(BoardError::UnknownColor {
            ch,
            line,
            column: col + 1,
        })?;
        units.push(color);
    }
    Ok(Tube::new(units))
}

/// Parses board file text: one tube per line, in the format accepted by
/// `board_from_str_array`. Blank lines and lines starting with `#` are skipped;
/// line numbers in errors refer to the input text.
pub fn board_from_text(text: &str, capacity: usize) -> Result<Board, BoardError> {
    let mut tubes = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }
        tubes.push(parse_tube(line_trimmed, idx + 1)?);
    }
    Board::new(tubes, capacity)
}

/// Reads and parses a board file.
pub fn read_board_file(path: &Path, capacity: usize) -> Result<Board, BoardError> {
    let content = std::fs::read_to_string(path).map_err(|e| BoardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    board_from_text(&content, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TUBE_CAPACITY;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["ABCD", "DCBA", ".", "AB.."], TUBE_CAPACITY).unwrap();
        assert_eq!(board.tube_count(), 4);
        assert_eq!(board.capacity(), TUBE_CAPACITY);
        assert_eq!(board.tube(0).unwrap().units()[0], Color::from_char('A').unwrap());
        assert_eq!(board.tube(1).unwrap().top(), Color::from_char('A'));
        assert!(board.tube(2).unwrap().is_empty());
        assert_eq!(board.tube(3).unwrap().len(), 2);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["AB", "C?"], TUBE_CAPACITY);
        match result {
            Err(BoardError::UnknownColor { ch, line, column }) => {
                assert_eq!((ch, line, column), ('?', 2, 2));
            }
            other => panic!("expected UnknownColor, got {:?}", other),
        }
    }

    #[test]
    fn test_board_from_str_array_with_inner_spaces() {
        let err = board_from_str_array(&["A B"], TUBE_CAPACITY).unwrap_err();
        assert!(err.to_string().contains("unrecognized character ' '"));
    }

    #[test]
    fn test_board_from_str_array_lowercase_rejected() {
        assert!(board_from_str_array(&["ab"], TUBE_CAPACITY).is_err());
    }

    #[test]
    fn test_board_from_str_array_tube_too_full() {
        let err = board_from_str_array(&["A", "AAAAA"], TUBE_CAPACITY).unwrap_err();
        assert!(matches!(err, BoardError::TubeOverflow { tube: 1, len: 5, .. }));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let rows: [&str; 0] = [];
        assert!(matches!(
            board_from_str_array(&rows, TUBE_CAPACITY),
            Err(BoardError::NoTubes)
        ));
    }

    #[test]
    fn test_board_from_text_skips_comments_and_blanks() {
        let text = "# three colors, two spares\nABCA\n\nBCAB\nCABC\n.\n  .  \n";
        let board = board_from_text(text, TUBE_CAPACITY).unwrap();
        assert_eq!(board.tube_count(), 5);
        assert!(board.tube(4).unwrap().is_empty());
    }

    #[test]
    fn test_board_from_text_reports_input_line() {
        let text = "# header\n\nAB\nA?\n";
        match board_from_text(text, TUBE_CAPACITY) {
            Err(BoardError::UnknownColor { line, column, .. }) => {
                assert_eq!((line, column), (4, 2));
            }
            other => panic!("expected UnknownColor, got {:?}", other),
        }
    }

    #[test]
    fn test_read_board_file_missing() {
        let err = read_board_file(Path::new("/nonexistent/board.txt"), TUBE_CAPACITY).unwrap_err();
        assert!(matches!(err, BoardError::FileRead { .. }));
    }
}
