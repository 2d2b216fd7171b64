//! Part Inventory
//!
//! Part specifications, the suppliers that can fulfill them and the
//! requisition requests raised against them, kept in memory and driven from
//! an interactive console.

pub mod cli;
pub mod core;
pub mod entities;
