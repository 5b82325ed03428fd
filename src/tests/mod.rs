#[macro_use]
mod util;

mod kind;
