//! Puzzle instances shared by the unit tests. Comments give the length of an
//! optimal solution.

/// Already solved, the plan is empty.
pub const EIGHT_PUZZLE_SOLVED: &str = "1 2 3\n4 5 6\n7 8 x\n";

/// 1 move.
pub const EIGHT_PUZZLE_ONE_MOVE: &str = "1 2 3\n4 5 6\n7 x 8\n";

/// Two tiles swapped, fails the parity check.
pub const EIGHT_PUZZLE_UNSOLVABLE: &str = "2 1 3\n4 5 6\n7 8 x\n";

/// 5 moves, Manhattan distance 5.
pub const EIGHT_PUZZLE_SHORT: &str = "1 2 3\nx 8 5\n4 7 6\n";

/// 10 moves.
pub const EIGHT_PUZZLE_MEDIUM: &str = "5 1 3\n4 2 6\n7 8 x\n";

/// 22 moves, Manhattan distance 14.
pub const EIGHT_PUZZLE_HARD: &str = "3 6 x\n7 5 8\n1 2 4\n";

/// 16 moves.
pub const FIFTEEN_PUZZLE: &str = "1 2 8 3\n9 5 11 4\n7 10 6 12\n13 x 14 15\n";

/// 20 moves.
pub const FIFTEEN_PUZZLE_LONGER: &str = "5 1 x 3\n9 7 2 12\n6 10 4 8\n13 14 11 15\n";
