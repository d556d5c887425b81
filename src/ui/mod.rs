//! egui rendering modules, organized by component:
//! - `toolbar`: top bar with connection status
//! - `messages`: message log area
//! - `input`: bottom compose panel
//! - `theme`: color schemes and styling utilities

pub mod input;
pub mod messages;
pub mod theme;
pub mod toolbar;

pub use theme::ChatTheme;
