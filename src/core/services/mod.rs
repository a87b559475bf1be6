pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{MonthlyReport, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::FormErrors;

pub type ServiceResult<T> = Result<T, FormErrors>;
