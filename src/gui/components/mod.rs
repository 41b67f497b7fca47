// src/gui/components/mod.rs
pub mod dataset_table;
pub mod form;
