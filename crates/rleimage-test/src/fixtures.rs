//! Fixture builders and traversal helpers

use rleimage_core::{Line, LineEnumerator, Region, RleImage, ScanlineCursor};

/// Build a line from `(length, value)` pairs.
///
/// # Panics
///
/// Panics if the pairs do not form a valid line.
pub fn line_from_runs<T: Copy + PartialEq>(pairs: &[(usize, T)]) -> Line<T> {
    Line::from_runs(pairs).expect("valid run table")
}

/// Build an image whose lines, in storage order, are given as run tables.
///
/// # Panics
///
/// Panics if the number of tables differs from the number of lines or any
/// table does not cover the full width of `buffered`.
pub fn image_from_runs<T: Copy + PartialEq, const D: usize>(
    buffered: Region<D>,
    lines: &[&[(usize, T)]],
) -> RleImage<T, D> {
    let first = lines.first().expect("at least one line")[0].1;
    let mut image = RleImage::new(buffered, first).expect("valid buffered region");
    assert_eq!(lines.len(), image.line_count(), "line table count");

    let mut positions = LineEnumerator::new(buffered);
    for pairs in lines {
        image
            .set_line(positions.current(), line_from_runs(pairs))
            .expect("line covers the buffered width");
        positions.advance();
    }
    image
}

/// Collect the values from the cursor position to the end of the line by
/// stepping forward. Leaves the cursor at the end of the line.
pub fn walk_forward<T: Copy + PartialEq, const D: usize>(
    cursor: &mut ScanlineCursor<'_, T, D>,
) -> Vec<T> {
    let mut values = Vec::new();
    while !cursor.is_at_end_of_line() {
        values.push(cursor.value());
        cursor.step_forward();
    }
    values
}

/// Collect the values from just before the cursor back to the beginning of
/// the line by stepping backward. Leaves the cursor at the beginning.
pub fn walk_backward<T: Copy + PartialEq, const D: usize>(
    cursor: &mut ScanlineCursor<'_, T, D>,
) -> Vec<T> {
    let mut values = Vec::new();
    while !cursor.is_at_begin_of_line() {
        cursor.step_backward();
        values.push(cursor.value());
    }
    values
}
