pub mod record;
pub mod report;
pub mod trend;

pub use record::*;
pub use report::*;
pub use trend::*;
