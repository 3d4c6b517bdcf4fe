/*!
 * Monitoring
 * Structured tracing setup for hosts embedding the signal registry
 */

mod tracer;

pub use tracer::{init_tracing, ENV_TRACE_JSON};
