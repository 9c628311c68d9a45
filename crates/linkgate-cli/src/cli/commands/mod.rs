//! CLI command handlers, one file per subcommand.

mod check;
mod list;
mod resolve;
mod shorten;

pub use check::run_check;
pub use list::run_list;
pub use resolve::run_resolve;
pub use shorten::run_shorten;
