//! Segment tables for the supported tube types
//!
//! Both tables are indexed by glyph code and share the same code layout
//! (see [`super::Glyph`]). Bit 7 is the decimal point, which not every tube
//! has; no glyph sets it.
//!
//! Entries past the last named glyph are dark. They keep slightly
//! out-of-range codes from lighting anything.

/// Number of entries in every segment table
pub const TABLE_LEN: usize = 33;

/// Pattern that lights nothing
pub const BLANK: u8 = 0b0000_0000;

/// Decimal point segment, shared by both wiring layouts
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// IV-3A tubes, wired `H D C B A G F E` from bit 7 down
pub const IV3A: [u8; TABLE_LEN] = [
    0b0111_1011, // 0
    0b0011_0000, // 1
    0b0101_1101, // 2
    0b0111_1100, // 3
    0b0011_0110, // 4
    0b0110_1110, // 5
    0b0110_1111, // 6
    0b0011_1000, // 7
    0b0111_1111, // 8
    0b0111_1110, // 9
    0b0011_1111, // A
    0b0110_0111, // b
    0b0100_1011, // C
    0b0111_0101, // d
    0b0100_1111, // E
    0b0000_1111, // F
    BLANK,       // dark
    0b0011_0110, // 4
    0b0101_1101, // 2
    0b0010_0101, // n
    0b0010_0000, // i
    0b0110_0111, // b
    0b0110_0111, // b
    0b0011_0000, // l
    0b0100_1111, // E
    0b0110_1110, // S
    BLANK,
    BLANK,
    BLANK,
    BLANK,
    BLANK,
    BLANK,
    BLANK,
];

/// IV-22B tubes, wired `H G F E D C B A` from bit 7 down
pub const IV22B: [u8; TABLE_LEN] = [
    0b0111_0111, // 0
    0b0010_0100, // 1
    0b0101_1101, // 2
    0b0110_1101, // 3
    0b0010_1110, // 4
    0b0110_1011, // 5
    0b0111_1011, // 6
    0b0010_0101, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0011_1111, // A
    0b0111_1010, // b
    0b0101_0011, // C
    0b0111_1100, // d
    0b0101_1011, // E
    0b0001_1011, // F
    BLANK,       // dark
    0b0010_1110, // 4
    0b0101_1101, // 2
    0b0011_1000, // n
    0b0010_0000, // i
    0b0111_1010, // b
    0b0111_1010, // b
    0b0010_0100, // l
    0b0101_1011, // E
    0b0110_1011, // S
    BLANK,
    BLANK,
    BLANK,
    BLANK,
    BLANK,
    BLANK,
    BLANK,
];
