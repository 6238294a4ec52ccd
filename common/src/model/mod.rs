pub mod figure;
pub mod metadata;
