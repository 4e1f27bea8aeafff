use prometheus::{
    Encoder, Gauge, HistogramOpts, HistogramVec, IntCounter, IntCounterVec,
    IntGauge, Opts, Registry, TextEncoder,
};

/// Latency buckets in milliseconds, from sub-millisecond handlers up to
/// the pathological Fibonacci tail.
const DURATION_BUCKETS_MS: &[f64] = &[
    0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1_000.0,
    2_500.0, 5_000.0, 10_000.0,
];

/// The process-wide instrument set. Built once in `main` and shared through
/// `AppState`; thread safety is the prometheus registry's concern, nothing
/// here takes its own locks.
pub struct ApiMetrics {
    registry: Registry,

    // Per-request instrumentation, written by the timing middleware
    http_requests_total: IntCounterVec,
    http_requests_milliseconds: HistogramVec,

    // Result gauges, one per compute endpoint, overwritten on success
    last_sum1n: IntGauge,
    last_fibo: IntGauge,
    last_calculator: Gauge,
    list_size: IntGauge,

    errors_calculator_total: IntCounter,
}

impl ApiMetrics {
    /// Create the registry and register every instrument with it.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Number of HTTP requests received"),
            &["method", "endpoint"],
        )?;

        let http_requests_milliseconds = HistogramVec::new(
            HistogramOpts::new(
                "http_requests_milliseconds",
                "Duration of HTTP requests in milliseconds",
            )
            .buckets(DURATION_BUCKETS_MS.to_vec()),
            &["method", "endpoint"],
        )?;

        let last_sum1n =
            IntGauge::new("last_sum1n", "Last result of sum1n")?;
        let last_fibo =
            IntGauge::new("last_fibo", "Last result of fibo")?;
        let last_calculator =
            Gauge::new("last_calculator", "Last result of calculator")?;
        let list_size =
            IntGauge::new("list_size", "Current list size")?;
        let errors_calculator_total = IntCounter::new(
            "errors_calculator_total",
            "Number of errors in calculator",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_milliseconds.clone()))?;
        registry.register(Box::new(last_sum1n.clone()))?;
        registry.register(Box::new(last_fibo.clone()))?;
        registry.register(Box::new(last_calculator.clone()))?;
        registry.register(Box::new(list_size.clone()))?;
        registry.register(Box::new(errors_calculator_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_milliseconds,
            last_sum1n,
            last_fibo,
            last_calculator,
            list_size,
            errors_calculator_total,
        })
    }

    // ─── Write side (middleware + handlers) ──────────────────────

    pub fn inc_request(&self, method: &str, endpoint: &str) {
        self.http_requests_total
            .with_label_values(&[method, endpoint])
            .inc();
    }

    pub fn observe_duration(&self, method: &str, endpoint: &str, ms: f64) {
        self.http_requests_milliseconds
            .with_label_values(&[method, endpoint])
            .observe(ms);
    }

    pub fn set_last_sum1n(&self, value: i64) {
        self.last_sum1n.set(value);
    }

    pub fn set_last_fibo(&self, value: i64) {
        self.last_fibo.set(value);
    }

    pub fn set_last_calculator(&self, value: f64) {
        self.last_calculator.set(value);
    }

    pub fn set_list_size(&self, value: i64) {
        self.list_size.set(value);
    }

    pub fn inc_calculator_error(&self) {
        self.errors_calculator_total.inc();
    }

    // ─── Read side ───────────────────────────────────────────────

    pub fn request_count(&self, method: &str, endpoint: &str) -> u64 {
        self.http_requests_total
            .with_label_values(&[method, endpoint])
            .get()
    }

    pub fn duration_sample_count(&self, method: &str, endpoint: &str) -> u64 {
        self.http_requests_milliseconds
            .with_label_values(&[method, endpoint])
            .get_sample_count()
    }

    pub fn calculator_errors(&self) -> u64 {
        self.errors_calculator_total.get()
    }

    pub fn last_calculator_value(&self) -> f64 {
        self.last_calculator.get()
    }

    /// Render the whole registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            prometheus::Error::Msg(format!(
                "metrics exposition is not valid UTF-8: {e}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ApiMetrics {
        ApiMetrics::new().expect("metric registration")
    }

    #[test]
    fn exposition_contains_every_instrument() {
        let m = metrics();
        m.inc_request("GET", "/sum1n");
        m.observe_duration("GET", "/sum1n", 1.0);
        m.set_last_sum1n(55);
        m.set_last_fibo(5);
        m.set_last_calculator(2.0);
        m.set_list_size(3);
        m.inc_calculator_error();

        let out = m.render().unwrap();
        for name in [
            "http_requests_total",
            "http_requests_milliseconds",
            "last_sum1n",
            "last_fibo",
            "last_calculator",
            "list_size",
            "errors_calculator_total",
        ] {
            assert!(out.contains(name), "missing {name} in exposition");
        }
    }

    #[test]
    fn request_counter_tracks_label_pairs_independently() {
        let m = metrics();
        m.inc_request("GET", "/fibo");
        m.inc_request("GET", "/fibo");
        m.inc_request("GET", "/sum1n");

        assert_eq!(m.request_count("GET", "/fibo"), 2);
        assert_eq!(m.request_count("GET", "/sum1n"), 1);

        let out = m.render().unwrap();
        assert!(out.contains("method=\"GET\""));
        assert!(out.contains("endpoint=\"/fibo\""));
    }

    #[test]
    fn histogram_records_one_observation_per_call() {
        let m = metrics();
        m.observe_duration("GET", "/calculator", 0.4);
        m.observe_duration("GET", "/calculator", 12.0);

        assert_eq!(m.duration_sample_count("GET", "/calculator"), 2);

        let out = m.render().unwrap();
        assert!(out.contains("le=\"0.5\""));
        assert!(out.contains("le=\"+Inf\""));
    }

    #[test]
    fn gauges_hold_only_the_most_recent_value() {
        let m = metrics();
        m.set_last_sum1n(10);
        m.set_last_sum1n(55);

        let out = m.render().unwrap();
        assert!(out.contains("last_sum1n 55"));
        assert!(!out.contains("last_sum1n 10"));
    }

    #[test]
    fn exposition_is_prometheus_text_format() {
        let m = metrics();
        m.inc_calculator_error();

        let out = m.render().unwrap();
        assert!(out.contains("# HELP errors_calculator_total"));
        assert!(out.contains("# TYPE errors_calculator_total counter"));
        assert!(out.contains("errors_calculator_total 1"));
    }
}
