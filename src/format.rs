use crate::grid::Grid;
use crate::placement::PlacementRecord;

/// Render a grid with column letters across the top and 1-based row numbers
/// down the side. Empty cells print as blanks.
pub fn format_grid(grid: &Grid) -> String {
    // Columns past 'Z' just keep counting through the code points.
    fn column_label(idx: usize) -> char {
        u32::try_from(idx)
            .ok()
            .and_then(|i| char::from_u32('A' as u32 + i))
            .unwrap_or('?')
    }

    let mut out = String::from("   ");
    for x in 0..grid.width() {
        out.push(' ');
        out.push(column_label(x));
    }
    out.push('\n');

    for (y, row) in grid.rows().iter().enumerate() {
        out.push_str(&format!("{:>3}", y + 1));
        for cell in row {
            out.push(' ');
            out.push(cell.unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

/// One line per placed word: word, start cell in grid labels, direction.
pub fn format_placements(records: &[PlacementRecord]) -> String {
    let width = records.iter().map(|r| r.word.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for record in records {
        let column = char::from_u32('A' as u32 + record.x as u32).unwrap_or('?');
        out.push_str(&format!(
            "{:<width$}  {}{:<3} {}\n",
            record.word,
            column,
            record.y + 1,
            record.direction
        ));
    }
    out
}
