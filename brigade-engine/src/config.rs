//! Engine configuration

/// Pricing and dispatch configuration
///
/// Plain explicit struct - no ambient/global state. Tests build fixtures
/// directly; the application layer builds one from its settings screen.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Tax rate applied to the post-discount amount (e.g. 0.05 for 5%)
    pub tax_rate: f64,

    /// Service charge rate on the subtotal (e.g. 0.10 for 10%)
    pub service_charge_rate: f64,

    /// Service charge toggle; shipped off by policy, but the computation
    /// stays available and independently switchable
    pub service_charge_enabled: bool,

    /// Country code prefixed to bare 10-digit phone numbers
    pub default_country_code: String,

    /// Ticket document width in characters
    pub ticket_width: usize,
}

impl EngineConfig {
    pub fn new(tax_rate: f64) -> Self {
        Self {
            tax_rate,
            ..Default::default()
        }
    }

    pub fn with_service_charge(mut self, rate: f64, enabled: bool) -> Self {
        self.service_charge_rate = rate;
        self.service_charge_enabled = enabled;
        self
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.default_country_code = code.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.05,
            service_charge_rate: 0.10,
            service_charge_enabled: false,
            default_country_code: "91".to_string(),
            ticket_width: 32,
        }
    }
}
