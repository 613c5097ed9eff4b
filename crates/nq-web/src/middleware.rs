//! Middleware for the NestQuest web layer.

use actix_web::middleware::Logger;

// Returns the standard middleware stack.
pub fn standard_middleware() -> Logger {
    // The 'default' logger outputs:
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}
