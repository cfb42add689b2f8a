// ABOUTME: Read-only insurance catalog built from the provider and service sources
// ABOUTME: Resolves provider names to identifiers and lists services per provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{InsuranceProvider, InsuranceService};
use serde::Serialize;
use std::collections::HashMap;

/// Provider lookup and service listing, immutable after construction
#[derive(Debug, Clone, Default)]
pub struct InsuranceCatalog {
    provider_ids: HashMap<String, String>,
    providers: Vec<InsuranceProvider>,
    services: Vec<InsuranceService>,
}

/// Services offered by one provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderServices {
    /// Provider name as recorded for the user
    pub provider: Option<String>,
    /// Resolved provider identifier
    pub provider_id: Option<String>,
    /// Services offered by the provider
    pub services: Vec<InsuranceService>,
}

impl InsuranceCatalog {
    /// Build the catalog. When a provider name repeats, the last row wins.
    #[must_use]
    pub fn new(providers: Vec<InsuranceProvider>, services: Vec<InsuranceService>) -> Self {
        let provider_ids = providers
            .iter()
            .map(|p| (p.provider_name.clone(), p.provider_id.clone()))
            .collect();
        Self {
            provider_ids,
            providers,
            services,
        }
    }

    /// Resolve a provider name to its identifier
    #[must_use]
    pub fn provider_id(&self, provider_name: &str) -> Option<&str> {
        self.provider_ids.get(provider_name).map(String::as_str)
    }

    /// Number of provider rows
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Number of service rows
    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Services offered by the provider with the given identifier
    pub fn services_for<'a>(
        &'a self,
        provider_id: &'a str,
    ) -> impl Iterator<Item = &'a InsuranceService> + 'a {
        self.services
            .iter()
            .filter(move |service| service.provider_id == provider_id)
    }

    /// Build the provider/services view for a user's provider
    #[must_use]
    pub fn provider_services(
        &self,
        provider: Option<&str>,
        provider_id: Option<&str>,
    ) -> ProviderServices {
        ProviderServices {
            provider: provider.map(str::to_owned),
            provider_id: provider_id.map(str::to_owned),
            services: provider_id
                .map(|id| self.services_for(id).cloned().collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> InsuranceCatalog {
        InsuranceCatalog::new(
            vec![
                InsuranceProvider {
                    provider_id: "INS001".into(),
                    provider_name: "HealthFirst".into(),
                },
                InsuranceProvider {
                    provider_id: "INS002".into(),
                    provider_name: "CarePlus".into(),
                },
            ],
            vec![
                InsuranceService {
                    service_id: "SRV1".into(),
                    provider_id: "INS001".into(),
                    service_name: "Gym Discount".into(),
                },
                InsuranceService {
                    service_id: "SRV2".into(),
                    provider_id: "INS002".into(),
                    service_name: "Step Bonus".into(),
                },
            ],
        )
    }

    #[test]
    fn test_provider_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.provider_id("HealthFirst"), Some("INS001"));
        assert_eq!(catalog.provider_id("Unknown Mutual"), None);
    }

    #[test]
    fn test_services_for_provider() {
        let catalog = catalog();
        let view = catalog.provider_services(Some("CarePlus"), Some("INS002"));
        assert_eq!(view.services.len(), 1);
        assert_eq!(view.services[0].service_name, "Step Bonus");

        let none = catalog.provider_services(None, None);
        assert!(none.services.is_empty());
    }

    #[test]
    fn test_services_for_borrowed_id() {
        let catalog = catalog();
        let requested = String::from("INS001");

        let names: Vec<&str> = catalog
            .services_for(&requested)
            .map(|service| service.service_name.as_str())
            .collect();
        assert_eq!(names, ["Gym Discount"]);
        assert_eq!(catalog.services_for("INS404").count(), 0);
    }
}
