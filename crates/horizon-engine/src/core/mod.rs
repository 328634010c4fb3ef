//! Board primitives: blocks, block groups, boundaries, pieces and the obstacle field.
//!
//! # Coordinate System
//!
//! - Columns grow rightward, rows grow downward
//! - Playable columns are `LEFT_COLUMN..RIGHT_COLUMN` (14 wide)
//! - Visible rows are `TOP_ROW..FLOOR_ROW` (24 tall); row 0 and above is spawn buffer
//! - The walls sit at columns `-1` and `RIGHT_COLUMN`, the floor at `FLOOR_ROW`
//!
//! Coordinates are signed because boundaries and spawning pieces poke outside the
//! visible area.

pub use self::{
    block::*, block_group::*, boundary::*, obstacle_field::*, piece::*, render_board::*,
};

mod block;
mod block_group;
mod boundary;
mod obstacle_field;
mod piece;
mod render_board;

/// Number of playable columns.
pub const COLUMNS: i32 = 14;
/// Number of visible rows.
pub const ROWS: i32 = 24;
/// First visible row; new pieces spawn with their anchor here.
pub const TOP_ROW: i32 = 1;
/// Row occupied by the floor, one past the last visible row.
pub const FLOOR_ROW: i32 = TOP_ROW + ROWS;
/// Leftmost playable column.
pub const LEFT_COLUMN: i32 = 0;
/// Column occupied by the right wall, one past the rightmost playable column.
pub const RIGHT_COLUMN: i32 = LEFT_COLUMN + COLUMNS;
/// Spawn column for new pieces.
pub const MIDDLE_COLUMN: i32 = (LEFT_COLUMN + COLUMNS) / 2;
