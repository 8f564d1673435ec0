pub mod complaint_list;
pub mod register;

pub use complaint_list::ComplaintListView;
pub use register::RegisterView;
