//! @acp:module "Commands"
//! @acp:summary "Command implementations for the onepager binary"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Commands
//!
//! Command implementations used by the binary.

pub mod generate;

pub use generate::{execute_generate, generate_page, GenerateReport};
