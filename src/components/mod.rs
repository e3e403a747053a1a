//! UI Components
//!
//! One file per view.

mod chat_interface;
mod login_page;
mod task_form;
mod task_item;
mod tasks_page;

pub use chat_interface::ChatInterface;
pub use login_page::LoginPage;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use tasks_page::TasksPage;
