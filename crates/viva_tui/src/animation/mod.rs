pub mod shimmer;

pub use shimmer::Shimmer;
