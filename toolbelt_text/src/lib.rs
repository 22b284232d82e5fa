//! Text utilities: building strings, printing decorated messages and
//! printing testing messages.

pub mod message;
pub mod string;
pub mod testing;

pub use message::{MESSAGE_WIDTH, Tier};
pub use string::{
    centre, centre_in_place, concatenate, concatenate_back, concatenate_front, convert,
    generate_repeat, generate_repeat_char,
};
pub use testing::TestingMessageConfig;
