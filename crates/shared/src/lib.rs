//! Types shared by the numviz algorithms, the locker simulator and the front ends.

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod protocol;
