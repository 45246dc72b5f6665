//! Embedded word/frequency list
//!
//! Generated at build time from `data/freq.txt`.

include!(concat!(env!("OUT_DIR"), "/default_words.rs"));
