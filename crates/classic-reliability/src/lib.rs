//! Reliability metrics
//!
//! Internal consistency of a multi-item scale ([`cronbach_alpha`]) and
//! agreement between raters ([`intraclass_corr`]). Both operate on a
//! [`Panel`], a subjects × items matrix built from long-format records or
//! supplied directly in wide form.

pub mod cronbach;
pub mod icc;
pub mod panel;
pub mod types;

pub use cronbach::cronbach_alpha;
pub use icc::intraclass_corr;
pub use panel::Panel;
pub use types::{CronbachResult, IccResult, MissingValues};
