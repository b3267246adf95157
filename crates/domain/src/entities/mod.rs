pub mod path_result;

pub use path_result::PathResult;
