//! SVG life-chart rendering: a fixed grid of cells, one row per year of a
//! 90-year span, with the elapsed-count prefix filled in and the rest left
//! empty. The grid never resizes with the count; only the fill does.

use crate::elapsed::Unit;

const CELL_SIZE: f32 = 8.0;
const CELL_GAP: f32 = 2.0;
const PADDING: f32 = 15.0;
const TITLE_HEIGHT: f32 = 30.0;

/// Rows in every chart but the years one, which packs its cells 10 wide.
pub const LIFE_YEARS: u32 = 90;

#[derive(Clone, Copy)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub filled: &'static str,
    pub empty: &'static str,
    pub title: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                filled: "#f85149",
                empty: "#30363d",
                title: "#c9d1d9",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                filled: "#d73a49",
                empty: "#d0d7de",
                title: "#24292f",
            },
        }
    }
}

/// Grid shape for a unit: (columns, rows). Each row is one year of life,
/// except for years, which lay out as a compact 10-wide block.
pub fn layout(unit: Unit) -> (u32, u32) {
    match unit {
        Unit::Days => (365, LIFE_YEARS),
        Unit::Weeks => (52, LIFE_YEARS),
        Unit::Months => (12, LIFE_YEARS),
        Unit::Years => (10, LIFE_YEARS.div_ceil(10)),
    }
}

/// Total cells in the chart for a unit.
pub fn cell_count(unit: Unit) -> usize {
    let (columns, rows) = layout(unit);
    (columns * rows) as usize
}

fn build_cell_rects(count: usize, unit: Unit) -> String {
    let (columns, rows) = layout(unit);
    let mut out = String::new();

    for row in 0..rows {
        let y = PADDING + TITLE_HEIGHT + row as f32 * (CELL_SIZE + CELL_GAP);
        for col in 0..columns {
            let x = PADDING + col as f32 * (CELL_SIZE + CELL_GAP);
            let class = if ((row * columns + col) as usize) < count {
                "filled"
            } else {
                "empty"
            };
            out.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{CELL_SIZE}\" height=\"{CELL_SIZE}\" rx=\"1\" class=\"{class}\"/>\n"
            ));
        }
    }

    out
}

/// Renders the chart for an already-clamped (non-negative) count. Counts
/// past the grid simply fill every cell.
pub fn render_svg(count: usize, unit: Unit, theme: Theme) -> String {
    let colors = theme.colors();
    let (columns, rows) = layout(unit);
    let count = count.min(cell_count(unit));

    let w = PADDING * 2.0 + columns as f32 * (CELL_SIZE + CELL_GAP) - CELL_GAP;
    let h = PADDING * 2.0 + TITLE_HEIGHT + rows as f32 * (CELL_SIZE + CELL_GAP) - CELL_GAP;
    let title_y = PADDING + TITLE_HEIGHT / 2.0;
    let cells = build_cell_rects(count, unit);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.filled {{ fill: {filled}; }}
.empty  {{ fill: {empty}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text x="{PADDING}" y="{title_y}" fill="{title}">Your life in {unit}</text>

{cells}
</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        filled = colors.filled,
        empty = colors.empty,
        title = colors.title,
        title_y = title_y,
        cells = cells,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(svg: &str) -> usize {
        svg.matches("class=\"filled\"").count()
    }

    fn empty_cells(svg: &str) -> usize {
        svg.matches("class=\"empty\"").count()
    }

    #[test]
    fn highlights_exactly_the_count_prefix() {
        let svg = render_svg(1234, Unit::Weeks, Theme::Dark);
        assert_eq!(filled_cells(&svg), 1234);
        assert_eq!(
            filled_cells(&svg) + empty_cells(&svg),
            cell_count(Unit::Weeks)
        );
    }

    #[test]
    fn zero_count_clears_the_chart() {
        let svg = render_svg(0, Unit::Years, Theme::Light);
        assert_eq!(filled_cells(&svg), 0);
        assert_eq!(empty_cells(&svg), cell_count(Unit::Years));
    }

    #[test]
    fn oversized_count_fills_every_cell() {
        let svg = render_svg(usize::MAX, Unit::Months, Theme::Dark);
        assert_eq!(filled_cells(&svg), cell_count(Unit::Months));
        assert_eq!(empty_cells(&svg), 0);
    }

    #[test]
    fn weeks_grid_budgets_52_cells_per_year() {
        assert_eq!(layout(Unit::Weeks), (52, LIFE_YEARS));
        assert_eq!(cell_count(Unit::Weeks), 52 * 90);
    }

    #[test]
    fn titles_name_the_unit() {
        let svg = render_svg(10, Unit::Days, Theme::Light);
        assert!(svg.contains("Your life in days"));
    }
}
