pub mod controller;

pub use controller::{PanelUpdate, RefreshStart, Refresher};
