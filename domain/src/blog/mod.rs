//! Blog post parameters

pub mod word_count;

pub use word_count::{MAX_WORD_COUNT, MIN_WORD_COUNT, WORD_COUNT_STEP, WordCount};
