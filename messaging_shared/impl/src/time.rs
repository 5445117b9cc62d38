use chrono::{DateTime, Utc};
use messaging_di::Build;
use messaging_shared_contracts::time::TimeService;
use messaging_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
