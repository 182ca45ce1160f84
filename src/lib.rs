#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod controller;
pub mod led;
pub mod signal;
