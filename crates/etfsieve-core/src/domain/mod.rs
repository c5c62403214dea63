mod calendar;
mod constraints;
mod series;
mod ticker;

pub use calendar::{parse_date, years_before};
pub use constraints::UserConstraints;
pub use series::{PricePoint, PriceSeries};
pub use ticker::Ticker;
