//! UI Components
//!
//! One page per feature area plus the shared widgets they use.

mod clients_page;
mod consumable_log_page;
mod delete_confirm_button;
mod home_page;
mod inventory_page;
mod page_header;
mod queue_page;
mod toast_host;

pub use clients_page::ClientsPage;
pub use consumable_log_page::ConsumableLogPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use home_page::HomePage;
pub use inventory_page::InventoryPage;
pub use page_header::PageHeader;
pub use queue_page::QueuePage;
pub use toast_host::ToastHost;
