pub mod cci;
pub mod macd;
pub mod rsi;
pub mod stochastic;
pub mod wavetrend;

pub use cci::calculate_cci;
pub use macd::{calculate_macd, MacdSeries};
pub use rsi::calculate_rsi;
pub use stochastic::{calculate_stochastic, StochasticSeries};
pub use wavetrend::{calculate_wavetrend, WaveTrendSeries};
