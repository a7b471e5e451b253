pub mod binary;

pub use binary::apply_binop;
