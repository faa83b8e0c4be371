//! Query execution per entity level.

pub mod dish;
pub mod menu;
pub mod submenu;
