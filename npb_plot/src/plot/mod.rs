pub mod axes;
pub mod figure;
pub mod pyplot;
