//! Notes, intervals and scales of western music theory, with transposition
//! that spells the result the way it is conventionally written.

pub mod cli;
pub mod interval;
pub mod note;
pub mod scale;
