pub mod a001_maid;
pub mod a002_recommendation;
