//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module    | Commands handled        |
//! |-----------|-------------------------|
//! | `lexicon` | `List`, `Categories`    |
//! | `parse`   | `Parse`                 |
//! | `config`  | `Config`                |

pub mod config;
pub mod lexicon;
pub mod parse;

pub use config::cmd_config;
pub use lexicon::{cmd_categories, cmd_list};
pub use parse::cmd_parse;
