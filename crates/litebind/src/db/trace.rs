use crate::value::Value;

///
/// StatementSink
///
/// Observer for every statement a store hands to the driver. Optional,
/// injected by the caller, and semantics-neutral: a sink sees the exact
/// statement text and bound parameters but cannot alter execution.
///
/// The SQL-shape compatibility tests attach a recording sink here instead of
/// scraping the driver.
///

pub trait StatementSink: Send + Sync {
    fn on_statement(&self, sql: &str, params: &[Value]);
}
