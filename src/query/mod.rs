//! Non-persistent geometric queries.
//!
//! Only the interval primitives of the Separating Axis Theorem are provided here: projecting a
//! placed shape on a world axis, and testing candidate axes for separation. Contact generation
//! is left to the narrow-phase consuming these intervals.

pub mod sat;
