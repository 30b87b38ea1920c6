pub mod matrix;
pub mod weight;

#[doc(inline)]
pub use self::{matrix::WeightMatrix, weight::Weight};
