pub mod operation;
pub mod vector;
