pub mod dispersion;
pub mod jitter;
pub mod pvi;

pub use dispersion::{
    cov, cov5_x, relstab, Cov, Cov5, Cov5Config, RelStab, RelStabConfig, ShortInput,
};
pub use jitter::{
    jitter_ddp, jitter_local, jitter_ppq5, jitter_rap, Jitter, JitterConfig, JitterKind,
};
pub use pvi::{npvi, rpvi, Npvi, Rpvi};
