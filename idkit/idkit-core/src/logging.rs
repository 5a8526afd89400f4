use serde_json::Value;
use std::fmt::Debug;

pub trait IAuditLogger: Send + Sync + Debug {
    fn log_request(&self, operation: &str, uid: &str, payload: Value);
    fn log_response(&self, operation: &str, uid: &str, response: Value);
    fn log_failure(&self, operation: &str, uid: &str, message: &str);
}

#[derive(Debug, Default)]
pub struct ConsoleAuditLogger;
impl IAuditLogger for ConsoleAuditLogger {
    fn log_request(&self, operation: &str, uid: &str, payload: Value) {
        println!(
            "[IDKIT REQUEST] Op: {} | Uid: {} | Payload: {}",
            operation, uid, payload
        );
    }
    fn log_response(&self, operation: &str, uid: &str, response: Value) {
        println!(
            "[IDKIT RESPONSE] Op: {} | Uid: {} | Response: {}",
            operation, uid, response
        );
    }
    fn log_failure(&self, operation: &str, uid: &str, message: &str) {
        println!(
            "[IDKIT FAILURE] Op: {} | Uid: {} | Error: {}",
            operation, uid, message
        );
    }
}
