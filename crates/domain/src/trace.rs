use serde::Serialize;

/// Structured trace events emitted across all Showcase crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ApiCall {
        endpoint: String,
        status: u16,
        duration_ms: u64,
    },
    SessionEstablished {
        user_id: String,
        role: String,
    },
    SessionCleared {
        reason: String,
    },
    GuardEvaluated {
        area: String,
        outcome: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "sc_event");
    }
}
