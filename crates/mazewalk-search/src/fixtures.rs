//! Mazes shared by the search tests.

use mazewalk_core::Point;
use rand::RngExt;

/// A 7x7 perfect maze with one dead-end spur off the top corridor.
pub(crate) const PERFECT: &str = "#######\n      #\n## ## #\n## ## #\n## ####\n##     \n#######";

pub(crate) fn perfect_path() -> Vec<Point> {
    [
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 2),
        (3, 2),
        (4, 2),
        (5, 2),
        (5, 3),
        (5, 4),
        (5, 5),
        (5, 6),
    ]
    .into_iter()
    .map(|(row, col)| Point::new(row, col))
    .collect()
}

/// Two routes to the goal: a 13-cell one along the top and right, and a
/// 17-cell one down the left that zig-zags back up.
pub(crate) const LOOP: &str =
    "#########\n        #\n# ##### #\n# #   # #\n# # # # #\n#   #    \n#########";

pub(crate) const LOOP_SHORTEST: usize = 13;

/// The first turn down leads into a two-cell dead end.
pub(crate) const DEAD_END: &str = "#####\n    #\n# # #\n# #  \n#####";

/// Start and goal on opposite sides of a full-height wall.
pub(crate) const DISCONNECTED: &str = "#####\n  #  \n  #  \n  #  \n#####";

/// A small room with no inner walls.
pub(crate) const ROOM: &str = "#####\n     \n#   #\n#    \n#####";

/// A three-row corridor `n` cells long.
pub(crate) fn corridor(n: usize) -> String {
    format!("{}\n{}\n{}", "#".repeat(n), " ".repeat(n), "#".repeat(n))
}

/// A walled rectangle with the conventional entry and exit carved and
/// roughly a third of the interior filled with walls.
pub(crate) fn random_maze() -> String {
    let mut rng = rand::rng();
    let height = rng.random_range(3..12usize);
    let width = rng.random_range(3..16usize);

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let line: String = (0..width)
            .map(|col| {
                let border = row == 0 || row == height - 1 || col == 0 || col == width - 1;
                let carved = (row == 1 && col == 0) || (row == height - 2 && col == width - 1);
                if carved {
                    ' '
                } else if border || rng.random_range(0..100u32) < 33 {
                    '#'
                } else {
                    ' '
                }
            })
            .collect();
        rows.push(line);
    }
    rows.join("\n")
}
