mod header;
mod main;

pub use main::main_view;
