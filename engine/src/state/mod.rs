// Selection state behind the technical-analysis panel.
pub mod indicator_view;

pub use indicator_view::{IndicatorView, ViewSnapshot};
