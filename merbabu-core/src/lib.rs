// Core library for the Merbabu inventory manager.
// Everything here is UI-free; the desktop shell only draws what these types hold.

pub mod inventory;
pub mod item;
pub mod session;
pub mod table;
pub mod theme;
pub mod validate;

pub use inventory::Inventory;
pub use item::Item;
pub use session::Session;
pub use table::{TableRow, TableView, COLUMNS};
pub use theme::{Rgb, Theme, ThemePreset};
pub use validate::{validate, Field, FormInput, Policy, QuantityProblem, ValidationError};
