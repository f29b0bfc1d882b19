//! Stateless operations shared by the dispatchers. Every function takes and
//! returns raw 64-bit register values; 32-bit variants sign-extend their result.

pub mod bit;
pub mod compare;
pub mod math;
pub mod shift;
