// Dashboard configuration: instrument table, defaults and indicator readouts.
pub mod settings;

pub use settings::DashboardSettings;
