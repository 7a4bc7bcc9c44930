/*
[INPUT]:  Paladins API numeric ids and JSON payloads
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod responses;

pub use enums::*;
pub use responses::*;
