pub mod luma;
pub mod merge;
