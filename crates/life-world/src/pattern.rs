//! Well-known starting patterns.
//!
//! Cell offsets are `(x, y)` with `+y` up, relative to the pattern's
//! bottom-left corner.

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 1), (2, 1), (3, 1), (0, 0), (1, 0), (2, 0)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 3), (1, 3), (0, 2), (1, 2), (2, 1), (3, 1), (2, 0), (3, 0)],
};

/// Travels one cell right and one cell down every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 2), (2, 1), (0, 0), (1, 0), (2, 0)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

impl Pattern {
    /// Look up a built-in pattern, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}
