//! Rendering layer for RiskView.
//!
//! The chart geometry ([`scale`], [`chart`]) is pure and fully testable:
//! it turns a metric slice into a [`chart::ChartScene`] of positioned bars,
//! ticks, and labels in a fixed 600×300 logical coordinate space. The
//! terminal widgets ([`widgets`]) only paint a scene; they never compute
//! layout themselves.

pub mod app;
pub mod chart;
pub mod display;
pub mod scale;
pub mod widgets;

pub use app::App;
pub use chart::ChartScene;
