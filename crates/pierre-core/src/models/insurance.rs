// ABOUTME: Insurance provider and service records loaded from the insurance sources
// ABOUTME: Provider rows back the name-to-id lookup attached to each user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One row of the insurance providers source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceProvider {
    /// Provider identifier
    pub provider_id: String,
    /// Provider display name, matched against `current_insurance_provider`
    pub provider_name: String,
}

/// One row of the insurance services source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceService {
    /// Service identifier
    pub service_id: String,
    /// Provider offering the service
    pub provider_id: String,
    /// Service display name
    pub service_name: String,
}
