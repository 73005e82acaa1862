use super::domain::StrategicScenario;

/// Read-only portfolio of pre-scored example scenarios.
///
/// Seed data only in this implementation; entries are immutable once built.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<StrategicScenario>,
}

impl ScenarioCatalog {
    /// The portfolio shipped with the service.
    pub fn seeded() -> Self {
        let scenarios = vec![
            StrategicScenario {
                id: 1,
                name: "Internal Development".to_string(),
                cost: 1_000_000.0,
                time_to_implement: 12.0,
                strategic_importance: 0.8,
                svi: 0.75,
                description: "Build open banking solution internally with dedicated team"
                    .to_string(),
                risks: vec![
                    "High development complexity".to_string(),
                    "Resource allocation challenges".to_string(),
                    "Regulatory compliance burden".to_string(),
                ],
                benefits: vec![
                    "Full control over features".to_string(),
                    "Deep domain knowledge".to_string(),
                    "Long-term strategic value".to_string(),
                ],
            },
            StrategicScenario {
                id: 2,
                name: "Outsourced Solution".to_string(),
                cost: 800_000.0,
                time_to_implement: 6.0,
                strategic_importance: 0.7,
                svi: 0.65,
                description: "Partner with third-party provider for open banking implementation"
                    .to_string(),
                risks: vec![
                    "Vendor dependency".to_string(),
                    "Limited customization".to_string(),
                    "Integration challenges".to_string(),
                ],
                benefits: vec![
                    "Faster time to market".to_string(),
                    "Lower initial cost".to_string(),
                    "Proven solution".to_string(),
                ],
            },
            StrategicScenario {
                id: 3,
                name: "Hybrid Approach".to_string(),
                cost: 900_000.0,
                time_to_implement: 8.0,
                strategic_importance: 0.85,
                svi: 0.82,
                description: "Combine internal development with strategic partnerships".to_string(),
                risks: vec![
                    "Coordination complexity".to_string(),
                    "Mixed technology stack".to_string(),
                    "Higher management overhead".to_string(),
                ],
                benefits: vec![
                    "Balanced risk profile".to_string(),
                    "Flexibility in implementation".to_string(),
                    "Strategic partnerships".to_string(),
                ],
            },
        ];

        Self { scenarios }
    }

    /// All scenarios, in seed insertion order.
    pub fn list(&self) -> &[StrategicScenario] {
        &self.scenarios
    }

    /// Exact-id lookup; no fuzzy matching.
    pub fn get(&self, id: u32) -> Option<&StrategicScenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
