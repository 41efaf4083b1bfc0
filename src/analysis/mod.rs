pub mod pipeline;
pub mod trends;

pub use pipeline::Pipeline;
pub use trends::mean_price_by_date;
