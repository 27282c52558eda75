#![allow(dead_code)]

pub mod fixed_random_source;
