//! Unit tests for the metrics registry

use troyonix::metrics::Metrics;

#[test]
fn test_export_contains_http_metrics() {
    let metrics = Metrics::new().expect("metrics initialization");
    metrics.http_requests_total.inc();
    metrics.http_request_duration_seconds.observe(0.01);

    let body = metrics.export().unwrap();
    assert!(body.contains("http_requests_total 1"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
}

#[test]
fn test_record_calculation_outcomes() {
    let metrics = Metrics::new().expect("metrics initialization");
    metrics.record_calculation("rsi", true);
    metrics.record_calculation("rsi", true);
    metrics.record_calculation("crossover", false);

    let body = metrics.export().unwrap();
    assert!(body.contains(r#"indicator_calculations_total{indicator="rsi",outcome="ok"} 2"#));
    assert!(body.contains(
        r#"indicator_calculations_total{indicator="crossover",outcome="rejected"} 1"#
    ));
}
