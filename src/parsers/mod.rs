//! PNOV CSV parsing.
//!
//! Three layers, leaf first:
//! - [`split_csv_line`] splits one line, honoring quoted commas
//! - [`parse_pnov_str`] drops the header and maps rows onto records
//! - [`load_pnov`] reads a file or stdin and never fails upward
//!
//! ```
//! use pnov_bridge::parsers::parse_pnov_str;
//!
//! let text = "Tracking ID,Status,Reason,DA,DSP,Route,Attempt,Cost\n\
//!             T1,Missing,Lost,Dana,FastCo,R1,2024-01-01,75.50\n";
//! let dataset = parse_pnov_str(text);
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.records()[0].cost, 75.5);
//! ```

mod csv_line;
mod loader;
mod records;

pub use csv_line::split_csv_line;
pub use loader::{load_pnov, read_source, LoadOutcome, LoadSource, MAX_INPUT_SIZE};
pub use records::{map_cells, parse_cost, parse_pnov_str};
