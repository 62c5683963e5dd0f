
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use crate::Result;

lazy_static! {
    pub static ref STORE_OPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "raft_memstore_ops_total",
        "Number of store operations served, by operation",
        &["op"]
    )
    .expect("metric can not be created");

    pub static ref STORE_NOT_FOUND_TOTAL: IntCounterVec = register_int_counter_vec!(
        "raft_memstore_not_found_total",
        "Lookups that found nothing, by namespace",
        &["namespace"]
    )
    .expect("metric can not be created");
}

pub(crate) fn record_op(op: &str) {
    STORE_OPS_TOTAL.with_label_values(&[op]).inc();
}

pub(crate) fn record_not_found(namespace: &str) {
    STORE_NOT_FOUND_TOTAL.with_label_values(&[namespace]).inc();
}

/// Render every metric in the default registry in the Prometheus text format
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
