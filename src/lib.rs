//! 사이클론 집진 성능 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod cyclone;
pub mod export;
pub mod presets;
pub mod quantity;
pub mod ui_cli;
pub mod units;
