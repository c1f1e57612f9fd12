//! Compile-time selection of whether king moves include castling.

/// Marker trait choosing between full move generation and attack-only
/// generation.
///
/// Castling legality asks which squares the opponent attacks. Computing those
/// with castling disabled keeps the two sides' generators from recursing into
/// each other.
pub(crate) trait CastlingMode {
    const INCLUDE_CASTLING: bool;
}

/// Zero-sized type for ordinary move generation, castling included.
pub(crate) struct WithCastling;
impl CastlingMode for WithCastling {
    const INCLUDE_CASTLING: bool = true;
}

/// Zero-sized type for attack queries: no castling.
pub(crate) struct AttacksOnly;
impl CastlingMode for AttacksOnly {
    const INCLUDE_CASTLING: bool = false;
}
