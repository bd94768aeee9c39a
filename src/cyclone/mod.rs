//! 사이클론 집진 성능 계산 모듈 모음.
//!
//! 유효 회전수 → 절단 입경 → 입경별 집진 효율 → 다단 합성 효율 순으로 흐르며,
//! 압력손실은 별도 갈래로 계산한다. 모든 함수는 입력만으로 결과가 정해지는 순수 함수이다.

pub mod compounding;
pub mod cut_size;
pub mod distribution;
pub mod effective_turns;
pub mod efficiency;
pub mod geometry;
pub mod performance;
pub mod pressure_loss;
pub mod properties;

pub use compounding::*;
pub use cut_size::*;
pub use distribution::*;
pub use effective_turns::*;
pub use efficiency::*;
pub use geometry::*;
pub use performance::*;
pub use pressure_loss::*;
pub use properties::*;
