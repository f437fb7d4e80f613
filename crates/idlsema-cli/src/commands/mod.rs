pub mod check;
pub mod program_loader;
