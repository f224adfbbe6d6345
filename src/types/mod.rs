// Types layer - All data structures

pub mod db;
pub mod dto;
pub mod internal;
