//! secp256k1 curve parameters
//!
//! The Koblitz curve used by Bitcoin: y² = x³ + 7 over 𝔽ₚ with
//! p = 2²⁵⁶ − 2³² − 977. All byte arrays are big-endian.

/// Size of a field element or scalar in bytes
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a scalar (private key) in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of a compressed point encoding: tag byte plus x-coordinate
pub const POINT_COMPRESSED_SIZE: usize = 33;

/// Size of an uncompressed point encoding: tag byte plus both coordinates
pub const POINT_UNCOMPRESSED_SIZE: usize = 65;

/// Tag byte of an uncompressed point encoding
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Tag byte of a compressed point with even y
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// Tag byte of a compressed point with odd y
pub const TAG_COMPRESSED_ODD: u8 = 0x03;

/// The field prime p = 2²⁵⁶ − 2³² − 977
pub const P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
    0xFC, 0x2F,
];

/// The group order n
pub const N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// x-coordinate of the base point G
pub const G_X: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
    0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
    0x17, 0x98,
];

/// y-coordinate of the base point G
pub const G_Y: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
    0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
    0xD4, 0xB8,
];

/// Curve coefficient a (the x term); zero for secp256k1
pub const A: u32 = 0;

/// Curve coefficient b (the constant term)
pub const B: u32 = 7;
