pub mod adx;
pub mod ema;
pub mod sma;

pub use adx::{calculate_adx, AdxSeries};
pub use ema::calculate_ema;
pub use sma::calculate_sma;
