// src/gui/components/mod.rs
pub mod action_bar;
pub mod legend;
pub mod program_tree;
pub mod routine_grid;
