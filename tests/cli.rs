//! Black-box tests of the `ls` and `wc` binaries.

mod common;

#[path = "cli/ls_smoke.rs"]
mod ls_smoke;
#[path = "cli/wc_smoke.rs"]
mod wc_smoke;
