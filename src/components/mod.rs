//! UI Components
//!
//! One component per dashboard flow, each bound to its page identifiers.

mod category_panel;
mod overdue_panel;
mod update_form;

pub use category_panel::CategoryPanel;
pub use overdue_panel::OverduePanel;
pub use update_form::UpdateForm;
