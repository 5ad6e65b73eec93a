//! Scanline cursor regression test - stepping along one line
//!
//! Tests run decoding by forward traversal, the forward/backward step
//! relationship at every column, reverse traversal from the line end, and
//! the cursor state around run boundaries.

use rleimage_core::{Region, RleImage, ScanlineCursor};
use rleimage_test::{RegParams, image_from_runs, walk_backward, walk_forward};

const RUN_TABLES: &[&[(usize, char)]] = &[
    &[(3, 'A'), (2, 'B'), (4, 'C')],
    &[(9, 'Z')],
    &[(1, 'a'), (1, 'b'), (1, 'c'), (1, 'd'), (1, 'e'), (1, 'f'), (1, 'g'), (1, 'h'), (1, 'i')],
    &[(1, 'x'), (7, 'y'), (1, 'x')],
    &[(4, 'p'), (5, 'p')],
];

fn single_line(pairs: &[(usize, char)]) -> RleImage<char, 1> {
    let width = pairs.iter().map(|&(len, _)| len).sum();
    image_from_runs(Region::from_size([width]).unwrap(), &[pairs])
}

fn expand(pairs: &[(usize, char)]) -> Vec<char> {
    pairs
        .iter()
        .flat_map(|&(len, value)| std::iter::repeat_n(value, len))
        .collect()
}

#[test]
fn scanline_reg() {
    let mut rp = RegParams::new("scanline");

    // --- Test 1: forward traversal decodes every run table ---
    for pairs in RUN_TABLES {
        let image = single_line(pairs);
        let mut cursor = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        cursor.go_to_begin_of_line();
        let values = walk_forward(&mut cursor);
        rp.compare_values(9.0, values.len() as f64, 0.0);
        rp.compare_slices(&expand(pairs), &values);
    }

    // --- Test 2: multi-run boundary crossing ---
    let image = single_line(RUN_TABLES[0]);
    let mut cursor = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
    for _ in 0..3 {
        cursor.step_forward();
    }
    rp.compare_values(3.0, cursor.index0() as f64, 0.0);
    rp.compare_values(1.0, cursor.real_index() as f64, 0.0);
    rp.compare_values(2.0, cursor.segment_remainder() as f64, 0.0);
    rp.compare_flag(true, cursor.value() == 'B');

    // --- Test 3: one step forward then back restores the state ---
    for pairs in RUN_TABLES {
        let image = single_line(pairs);
        let mut cursor = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        for column in 0..9 {
            cursor.seek(column);
            let before = (cursor.index0(), cursor.real_index(), cursor.segment_remainder());
            cursor.step_forward();
            cursor.step_backward();
            let after = (cursor.index0(), cursor.real_index(), cursor.segment_remainder());
            rp.compare_slices(&[before], &[after]);
        }
    }

    // --- Test 4: backward run crossing lands with remainder 1 ---
    let mut cursor = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
    cursor.seek(2);
    cursor.step_forward();
    rp.compare_slices(
        &[(3, 1, 2)],
        &[(cursor.index0(), cursor.real_index(), cursor.segment_remainder())],
    );
    cursor.step_backward();
    rp.compare_slices(
        &[(2, 0, 1)],
        &[(cursor.index0(), cursor.real_index(), cursor.segment_remainder())],
    );
    cursor.seek(5);
    cursor.step_backward();
    rp.compare_slices(
        &[(4, 1, 1)],
        &[(cursor.index0(), cursor.real_index(), cursor.segment_remainder())],
    );

    // --- Test 5: begin, end, then backward visits the reverse sequence ---
    for pairs in RUN_TABLES {
        let image = single_line(pairs);
        let mut cursor = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        cursor.go_to_begin_of_line();
        let forward = walk_forward(&mut cursor);
        cursor.go_to_begin_of_line();
        cursor.go_to_end_of_line();
        rp.compare_flag(true, cursor.is_at_end_of_line());
        let mut backward = walk_backward(&mut cursor);
        backward.reverse();
        rp.compare_slices(&forward, &backward);
        rp.compare_values(0.0, cursor.real_index() as f64, 0.0);
    }

    // --- Test 6: skipping whole runs lands on run starts ---
    let mut cursor = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
    let mut starts = Vec::new();
    while !cursor.is_at_end_of_line() {
        starts.push(cursor.index0());
        cursor.skip_run();
    }
    rp.compare_slices(&[0, 3, 5], &starts);

    assert!(rp.cleanup());
}
