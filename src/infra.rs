#[cfg(feature = "proptest")]
pub mod proptest;
