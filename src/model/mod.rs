pub mod record;
pub mod series;

pub use record::PriceRecord;
pub use series::PriceSeries;
