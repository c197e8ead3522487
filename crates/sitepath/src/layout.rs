//! Site grids built from, and rendered to, text.
//!
//! One line per row:
//!
//! | char | meaning |
//! |---|---|
//! | `#` | obstacle |
//! | `.` | terrain cost 1 |
//! | `1`..`9` | terrain cost of that digit |
//!
//! [`Grid::render_path`] uses the same alphabet plus `*` for route cells and
//! `+` for costs above 9.

use sitepath_core::Position;

use crate::error::{GridError, LayoutError};
use crate::grid::Grid;
use crate::path::Path;

impl Grid {
    /// Parse a text layout.
    ///
    /// Whitespace around each line is ignored, as are blank lines before
    /// the first row and after the last one. Every row must have the same
    /// width.
    pub fn from_layout(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(LayoutError::Empty.into());
        }

        let mut costs = Vec::with_capacity(width * rows.len());
        let mut obstacles = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                }
                .into());
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                let cost = match ch {
                    '#' => {
                        obstacles.push(pos);
                        1
                    }
                    '.' => 1,
                    '1'..='9' => ch.to_digit(10).unwrap_or(1),
                    _ => return Err(LayoutError::InvalidChar { ch, pos }.into()),
                };
                costs.push(cost);
            }
        }

        let mut grid = Grid::with_costs(width as i32, rows.len() as i32, &costs)?;
        for p in obstacles {
            grid.mark_obstacle(p)?;
        }
        Ok(grid)
    }

    /// Render the grid as a layout, marking the cells of `path` with `*`.
    pub fn render_path(&self, path: &Path) -> String {
        let mut out = String::with_capacity(self.bounds().len() + self.height() as usize);
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                let p = Position::new(x, y);
                let ch = if path.contains(p) {
                    '*'
                } else if self.is_obstacle(p) {
                    '#'
                } else {
                    match self.terrain_cost(p).unwrap_or(1) {
                        1 => '.',
                        c @ 2..=9 => char::from_digit(c, 10).unwrap_or('+'),
                        _ => '+',
                    }
                };
                out.push(ch);
            }
        }
        out
    }

    /// Render the grid as a layout with no route marked.
    pub fn render(&self) -> String {
        self.render_path(&Path::from(Vec::new()))
    }
}
