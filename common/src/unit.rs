//! Marker types.

/// Marker type describing a start of a period.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing an end of a period.
#[derive(Clone, Copy, Debug)]
pub struct End;
