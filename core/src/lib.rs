//! Pipeline steps for sifting low-latency proxy endpoints out of remote
//! range lists: fetch ranges, scan them, reshape the results, and rank
//! the survivors with an external latency tester.

pub mod convert;
pub mod exec;
pub mod extract;
pub mod fetch;
pub mod latency;
pub mod pipeline;
pub mod scan;
pub mod tool;
