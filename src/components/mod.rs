//! UI components for the stakeholder map page.

pub mod data_table;
pub mod sidebar;
pub mod stakeholder_map;
