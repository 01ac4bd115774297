//! Boustrophedon triangle-strip indexing shared by the grid generators

/// Build one continuous strip over a `(rows + 1) × columns` vertex grid
///
/// Even rows walk the columns left to right emitting
/// `(row, col), (row + 1, col)`; odd rows walk right to left emitting
/// `(row + 1, col), (row, col)`, so each row picks up where the previous one
/// ended and no restart index is needed.
///
/// Returns `2 × rows × columns` indices, all below `(rows + 1) × columns`.
pub fn strip_indices(rows: u32, columns: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(2 * rows as usize * columns as usize);

    for row in 0..rows {
        let top = row * columns;
        let bottom = (row + 1) * columns;

        if row % 2 == 0 {
            for col in 0..columns {
                indices.push(top + col);
                indices.push(bottom + col);
            }
        } else {
            for col in (0..columns).rev() {
                indices.push(bottom + col);
                indices.push(top + col);
            }
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        assert_eq!(strip_indices(1, 3), vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_odd_row_runs_backwards() {
        let indices = strip_indices(2, 2);
        assert_eq!(indices, vec![0, 2, 1, 3, 5, 3, 4, 2]);
    }

    #[test]
    fn test_rows_join_without_gap() {
        // Consecutive rows share a vertex across the boundary
        let columns = 5usize;
        let indices = strip_indices(4, columns as u32);
        for row in 0..3usize {
            let end = (row + 1) * 2 * columns;
            if row % 2 == 0 {
                assert_eq!(indices[end - 1], indices[end + 1]);
            } else {
                assert_eq!(indices[end - 2], indices[end]);
            }
        }
    }

    #[test]
    fn test_length_and_bounds() {
        let (rows, columns) = (7, 9);
        let indices = strip_indices(rows, columns);
        assert_eq!(indices.len(), (2 * rows * columns) as usize);
        assert!(indices.iter().all(|&i| i < (rows + 1) * columns));
    }

    #[test]
    fn test_zero_rows_is_empty() {
        assert!(strip_indices(0, 4).is_empty());
    }
}
