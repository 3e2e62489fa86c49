// App module for fastfood-dash
// Holds the widget state and the per-keypress derivation pass

pub mod input;
pub mod plan;
pub mod state;

pub use input::handle_input;
pub use plan::{build_plan, DashboardPlan, MapPlan, MapPoint};
pub use state::{App, Focus};
