pub mod chart_viewmodel;
pub mod home_viewmodel;

pub use chart_viewmodel::{BarItem, ChartViewModel, PieSlice};
pub use home_viewmodel::{FormListItem, HomeViewModel};
