use std::fmt::Write;

use crate::classify::IndexGrid;

/// Include guard wrapped around the generated header.
pub const HEADER_GUARD: &str = "__BITMAP_DATA_H__";

/// Every palette has at most 256 entries, so one byte per cell is enough.
const CELL_TYPE: &str = "unsigned char";

/// One array in the generated header. `label` names the array and prefixes its
/// `_HEIGHT`/`_WIDTH` defines.
#[derive(Clone, Copy, Debug)]
pub struct HeaderBlock<'a> {
    pub label: &'a str,
    pub grid: &'a IndexGrid,
}

impl<'a> HeaderBlock<'a> {
    pub fn new(label: &'a str, grid: &'a IndexGrid) -> Self {
        HeaderBlock { label, grid }
    }
}

/// Renders a grid as a nested C initializer, e.g. `{{0,1},{1,0}}`.
pub fn grid_literal(grid: &IndexGrid) -> String {
    let rows: Vec<String> = grid
        .rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("{{{}}}", cells.join(","))
        })
        .collect();
    format!("{{{}}}", rows.join(","))
}

/// Builds the complete header: guard, `<stddef.h>`, all dimension defines,
/// then one static array per block, in block order.
pub fn emit_header(guard: &str, blocks: &[HeaderBlock<'_>]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(out, "#ifndef {guard}\n#define {guard}\n\n#include <stddef.h>\n\n");
    for block in blocks {
        let _ = writeln!(out, "#define {}_HEIGHT {}", block.label, block.grid.height());
        let _ = writeln!(out, "#define {}_WIDTH {}", block.label, block.grid.width());
    }
    out.push('\n');
    for block in blocks {
        let label = block.label;
        let _ = writeln!(
            out,
            "static {CELL_TYPE} {label}[{label}_HEIGHT][{label}_WIDTH] = {};",
            grid_literal(block.grid)
        );
    }
    let _ = write!(out, "\n#endif // {guard}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> IndexGrid {
        IndexGrid::from_cells(2, 2, vec![0, 1, 1, 0]).unwrap()
    }

    #[test]
    fn two_by_two_font_block() {
        let grid = checker();
        let text = emit_header(HEADER_GUARD, &[HeaderBlock::new("FONT", &grid)]);
        assert!(text.contains("#define FONT_HEIGHT 2\n"));
        assert!(text.contains("#define FONT_WIDTH 2\n"));
        assert!(text.contains("{{0,1},{1,0}}"));
        assert!(text.contains("static unsigned char FONT[FONT_HEIGHT][FONT_WIDTH] = {{0,1},{1,0}};"));
    }

    #[test]
    fn empty_grid_renders_empty_braces() {
        let grid = IndexGrid::from_cells(0, 0, Vec::new()).unwrap();
        assert_eq!(grid_literal(&grid), "{}");
        let text = emit_header(HEADER_GUARD, &[HeaderBlock::new("GFX", &grid)]);
        assert!(text.contains("#define GFX_HEIGHT 0"));
        assert!(text.contains("= {};"));
    }

    #[test]
    fn zero_width_rows_render_as_empty_rows() {
        let grid = IndexGrid::from_cells(0, 2, Vec::new()).unwrap();
        assert_eq!(grid_literal(&grid), "{{},{}}");
    }

    #[test]
    fn multi_digit_indices_are_plain_decimal() {
        let grid = IndexGrid::from_cells(3, 1, vec![15, 8, 10]).unwrap();
        assert_eq!(grid_literal(&grid), "{{15,8,10}}");
    }

    #[test]
    fn full_document_layout() {
        let font = checker();
        let gfx = IndexGrid::from_cells(3, 1, vec![15, 0, 7]).unwrap();
        let text = emit_header(
            HEADER_GUARD,
            &[HeaderBlock::new("DATA_BITMAP_FONT", &font), HeaderBlock::new("DATA_BITMAP_GFX", &gfx)],
        );
        let expected = "#ifndef __BITMAP_DATA_H__\n\
#define __BITMAP_DATA_H__\n\
\n\
#include <stddef.h>\n\
\n\
#define DATA_BITMAP_FONT_HEIGHT 2\n\
#define DATA_BITMAP_FONT_WIDTH 2\n\
#define DATA_BITMAP_GFX_HEIGHT 1\n\
#define DATA_BITMAP_GFX_WIDTH 3\n\
\n\
static unsigned char DATA_BITMAP_FONT[DATA_BITMAP_FONT_HEIGHT][DATA_BITMAP_FONT_WIDTH] = {{0,1},{1,0}};\n\
static unsigned char DATA_BITMAP_GFX[DATA_BITMAP_GFX_HEIGHT][DATA_BITMAP_GFX_WIDTH] = {{15,0,7}};\n\
\n\
#endif // __BITMAP_DATA_H__";
        assert_eq!(text, expected);
    }
}
