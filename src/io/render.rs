//! Text rendering of the doubled grid

use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::DoubledGrid;

/// Render a doubled grid as one glyph per position
///
/// Marked cells print as `*`, marked horizontal edge slots as `–`,
/// marked vertical edge slots as `|`, and everything else as a space.
/// Each grid row ends with a newline.
pub fn render_grid(grid: &DoubledGrid) -> String {
    let mut output = String::with_capacity((grid.cols() + 1) * grid.rows());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let coordinate = Coordinate::new(row as i32, col as i32);
            let glyph = if !grid.is_marked(coordinate) {
                ' '
            } else if coordinate.is_cell() {
                '*'
            } else if row % 2 == 0 {
                '–'
            } else {
                '|'
            };
            output.push(glyph);
        }
        output.push('\n');
    }

    output
}
