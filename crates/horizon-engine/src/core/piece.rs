use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::Serialize;

use super::{
    MIDDLE_COLUMN, TOP_ROW,
    block::{Block, ColorIndex, Position},
    block_group::BlockGroup,
};

/// A falling tetromino: four blocks around an anchor, shaped by a [`ShapeKind`] and a
/// [`Rotation`].
///
/// Movement and rotation mutate the piece in place and never check collisions. The
/// game controller applies a move speculatively, tests it, and undoes it with the
/// inverse operation when it collides.
///
/// # Example
///
/// ```
/// use horizon_engine::{Piece, ShapeKind};
///
/// let mut piece = Piece::spawn(ShapeKind::T);
/// let before = piece.clone();
///
/// piece.move_left();
/// piece.rotate_clockwise();
/// piece.rotate_counterclockwise();
/// piece.move_right();
/// assert_eq!(piece, before);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    group: BlockGroup,
    kind: ShapeKind,
    rotation: Rotation,
    is_ghost: bool,
}

impl Piece {
    /// Number of blocks in every piece.
    pub const BLOCKS: usize = 4;

    /// Spawn anchor for new pieces.
    pub const SPAWN_POSITION: Position = Position::new(MIDDLE_COLUMN, TOP_ROW);

    #[must_use]
    pub fn new(kind: ShapeKind, anchor: Position, rotation: Rotation) -> Self {
        let group = BlockGroup::filled(anchor, Self::BLOCKS, kind.color());
        let mut piece = Self {
            group,
            kind,
            rotation,
            is_ghost: false,
        };
        piece.load_offsets();
        piece
    }

    #[must_use]
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::new(kind, Self::SPAWN_POSITION, Rotation::default())
    }

    /// Returns a landing-preview copy of this piece.
    ///
    /// Ghosts are moved around freely for rendering and are never frozen into the
    /// obstacle field.
    #[must_use]
    pub fn ghost(&self) -> Self {
        Self {
            is_ghost: true,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn is_ghost(&self) -> bool {
        self.is_ghost
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.group.anchor()
    }

    #[must_use]
    pub fn group(&self) -> &BlockGroup {
        &self.group
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.group.blocks()
    }

    pub(crate) fn into_group(self) -> BlockGroup {
        self.group
    }

    pub fn move_left(&mut self) {
        self.group.move_by(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.group.move_by(1, 0);
    }

    pub fn move_down(&mut self) {
        self.group.move_by(0, 1);
    }

    /// Undoes a rejected [`Self::move_down`]. Pieces never rise otherwise.
    pub fn move_up(&mut self) {
        self.group.move_by(0, -1);
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.rotated_clockwise();
        self.load_offsets();
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.rotation = self.rotation.rotated_counterclockwise();
        self.load_offsets();
    }

    fn load_offsets(&mut self) {
        let (column_offsets, row_offsets) = self.kind.offsets(self.rotation);
        self.group.set_offsets(column_offsets, row_offsets);
    }
}

/// Rotation state of a piece.
///
/// - `0`: spawn orientation
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise (90° counterclockwise)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation(u8);

impl Rotation {
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    #[must_use]
    pub fn rotated_clockwise(self) -> Self {
        Rotation((self.0 + 1) % 4)
    }

    #[must_use]
    pub fn rotated_counterclockwise(self) -> Self {
        Rotation((self.0 + 3) % 4)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The seven tetromino shapes, numbered 1 to 7.
///
/// The number doubles as the shape's palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// Red Z-piece.
    Z = 1,
    /// Green S-piece.
    S = 2,
    /// Blue J-piece.
    J = 3,
    /// Orange L-piece.
    L = 4,
    /// Cyan I-piece.
    I = 5,
    /// Magenta T-piece.
    T = 6,
    /// Yellow O-piece. All four rotation states share one layout.
    O = 7,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(1..=7) {
            1 => ShapeKind::Z,
            2 => ShapeKind::S,
            3 => ShapeKind::J,
            4 => ShapeKind::L,
            5 => ShapeKind::I,
            6 => ShapeKind::T,
            _ => ShapeKind::O,
        }
    }
}

impl ShapeKind {
    /// Number of shapes (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::O,
    ];

    /// Looks a shape up by its number.
    ///
    /// ```
    /// use horizon_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_number(5), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_number(0), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(ShapeKind::Z),
            2 => Some(ShapeKind::S),
            3 => Some(ShapeKind::J),
            4 => Some(ShapeKind::L),
            5 => Some(ShapeKind::I),
            6 => Some(ShapeKind::T),
            7 => Some(ShapeKind::O),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn color(self) -> ColorIndex {
        ColorIndex::new_unchecked(self.number())
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::Z => 'Z',
            ShapeKind::S => 'S',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::I => 'I',
            ShapeKind::T => 'T',
            ShapeKind::O => 'O',
        }
    }

    /// Column and row offsets of the four blocks in the given rotation.
    #[must_use]
    pub fn offsets(self, rotation: Rotation) -> (&'static [i32; 4], &'static [i32; 4]) {
        let (columns, rows) = &SHAPE_OFFSETS[usize::from(self.number() - 1)][rotation.as_usize()];
        (columns, rows)
    }
}

type ShapeOffsets = ([i32; 4], [i32; 4]);

/// `(column_offsets, row_offsets)` per shape (in `ShapeKind` number order) and rotation.
static SHAPE_OFFSETS: [[ShapeOffsets; 4]; ShapeKind::LEN] = [
    // Z
    [
        ([-1, -1, 0, 0], [1, 0, 0, -1]),
        ([-1, 0, 0, 1], [-1, -1, 0, 0]),
        ([1, 1, 0, 0], [-1, 0, 0, 1]),
        ([1, 0, 0, -1], [1, 1, 0, 0]),
    ],
    // S
    [
        ([-1, -1, 0, 0], [-1, 0, 0, 1]),
        ([1, 0, 0, -1], [-1, -1, 0, 0]),
        ([1, 1, 0, 0], [1, 0, 0, -1]),
        ([-1, 0, 0, 1], [1, 1, 0, 0]),
    ],
    // J
    [
        ([-1, -1, 0, 1], [-1, 0, 0, 0]),
        ([1, 1, 0, -1], [1, 0, 0, 0]),
        ([1, 0, 0, 0], [-1, -1, 0, 1]),
        ([-1, 0, 0, 0], [1, 1, 0, -1]),
    ],
    // L
    [
        ([1, 1, 0, -1], [-1, 0, 0, 0]),
        ([-1, -1, 0, 1], [1, 0, 0, 0]),
        ([-1, 0, 0, 0], [-1, -1, 0, 1]),
        ([1, 0, 0, 0], [1, 1, 0, -1]),
    ],
    // I
    [
        ([0, 0, 0, 0], [-2, 1, 0, -1]),
        ([-2, 1, 0, -1], [0, 0, 0, 0]),
        ([-2, -1, 0, 1], [0, 0, 0, 0]),
        ([0, 0, 0, 0], [-2, -1, 0, 1]),
    ],
    // T
    [
        ([0, -1, 0, 0], [1, 0, 0, -1]),
        ([-1, 0, 0, 1], [0, -1, 0, 0]),
        ([0, 1, 0, 0], [-1, 0, 0, 1]),
        ([1, 0, 0, -1], [0, 1, 0, 0]),
    ],
    // O
    [
        ([-1, -1, 0, 0], [0, -1, 0, -1]),
        ([-1, -1, 0, 0], [0, -1, 0, -1]),
        ([-1, -1, 0, 0], [0, -1, 0, -1]),
        ([-1, -1, 0, 0], [0, -1, 0, -1]),
    ],
];
