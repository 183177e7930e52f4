// 比較層 - 結合・速度変化算出・分類
// 入出力を持たない純粋な変換と、それらを束ねる Comparator

pub mod classify;
pub mod comparator;
pub mod join;
pub mod speedup;

// 公開API
pub use classify::{classify, Significance};
pub use comparator::Comparator;
pub use join::outer_join;
pub use speedup::{derive_speedups, relative_speedup};
