//! The classic B3/S23 transition rules.

/// What a rule decides for a cell in the next generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fate {
    Live,
    Die,
}

/// One of the four Game of Life rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A live cell with fewer than two live neighbours dies.
    Underpopulation,
    /// A live cell with two or three live neighbours lives on.
    Survival,
    /// A live cell with more than three live neighbours dies.
    Overpopulation,
    /// A dead cell with exactly three live neighbours becomes alive.
    Birth,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 4] = [
        Rule::Underpopulation,
        Rule::Survival,
        Rule::Overpopulation,
        Rule::Birth,
    ];

    /// Whether this rule matches a cell with the given state and live
    /// neighbour count.
    pub const fn applies(self, alive: bool, neighbours: usize) -> bool {
        match self {
            Rule::Underpopulation => alive && neighbours < 2,
            Rule::Survival => alive && (neighbours == 2 || neighbours == 3),
            Rule::Overpopulation => alive && neighbours > 3,
            Rule::Birth => !alive && neighbours == 3,
        }
    }

    pub const fn fate(self) -> Fate {
        match self {
            Rule::Survival | Rule::Birth => Fate::Live,
            Rule::Underpopulation | Rule::Overpopulation => Fate::Die,
        }
    }

    /// Rules matching the given state, in evaluation order.
    ///
    /// All four rules are tested; at most one ever matches.
    pub fn matching(alive: bool, neighbours: usize) -> impl Iterator<Item = Rule> {
        Self::ALL
            .into_iter()
            .filter(move |rule| rule.applies(alive, neighbours))
    }
}
