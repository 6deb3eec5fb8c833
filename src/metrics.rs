//! OpenTelemetry metrics for the graph toolkit.
//!
//! This module provides metrics instrumentation for algorithm runs.
//! Enable the `metrics` feature to use this functionality.

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter, Unit},
    KeyValue,
};

/// Metrics collector for algorithm invocations.
pub struct AlgorithmMetrics {
    /// Counter for algorithm invocations, labeled by algorithm name.
    runs: Counter<u64>,
    /// Histogram for algorithm latency in seconds.
    latency: Histogram<f64>,
    /// Counter for graph loads.
    graph_loads: Counter<u64>,
}

impl AlgorithmMetrics {
    /// Creates a new metrics collector using the global meter provider.
    #[must_use]
    pub fn new() -> Self {
        let meter = global::meter("graph_toolkit");
        Self::with_meter(&meter)
    }

    /// Creates a new metrics collector with a specific meter.
    #[must_use]
    pub fn with_meter(meter: &Meter) -> Self {
        let runs = meter
            .u64_counter("graph_toolkit.algorithm_runs")
            .with_description("Total number of algorithm invocations")
            .init();

        let latency = meter
            .f64_histogram("graph_toolkit.algorithm_latency")
            .with_description("Algorithm latency in seconds")
            .with_unit(Unit::new("s"))
            .init();

        let graph_loads = meter
            .u64_counter("graph_toolkit.graph_loads")
            .with_description("Total number of graph files loaded")
            .init();

        Self {
            runs,
            latency,
            graph_loads,
        }
    }

    /// Records an algorithm invocation.
    pub fn record_run(&self, algorithm: &str) {
        self.runs
            .add(1, &[KeyValue::new("algorithm", algorithm.to_string())]);
    }

    /// Records algorithm latency.
    pub fn record_latency(&self, latency_secs: f64, algorithm: &str) {
        self.latency.record(
            latency_secs,
            &[KeyValue::new("algorithm", algorithm.to_string())],
        );
    }

    /// Records a graph load.
    pub fn record_graph_load(&self) {
        self.graph_loads.add(1, &[]);
    }
}

impl Default for AlgorithmMetrics {
    fn default() -> Self {
        Self::new()
    }
}
