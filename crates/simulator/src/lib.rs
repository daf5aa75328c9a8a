pub mod output;
pub mod session;
pub mod sweep;

pub use output::{write_exchange_csv, write_sweep_csv};
pub use session::{run_session, Party};
pub use sweep::{acceptance_rate, uniformity_sweep, SweepRow};
