#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::unwrap_in_result,
        clippy::panic,
        clippy::panic_in_result_fn
    )
)]

mod hierarchy;
mod symbol_index;
mod test_lib;

pub use hierarchy::*;
pub use symbol_index::*;
pub use test_lib::VirtualTypeGraph;
