//! Vendor application domain entity
//!
//! A company's request to sell on the marketplace.

use serde::{Deserialize, Serialize};

use super::company::CompanyId;

/// Review status of a vendor application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorApplicationStatus {
    Pending,
    Approved,
}

impl std::fmt::Display for VendorApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorApplicationStatus::Pending => write!(f, "pending"),
            VendorApplicationStatus::Approved => write!(f, "approved"),
        }
    }
}

impl std::str::FromStr for VendorApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(VendorApplicationStatus::Pending),
            "approved" => Ok(VendorApplicationStatus::Approved),
            _ => Err(format!("Unknown vendor application status: {}", s)),
        }
    }
}

/// Data needed to create a new vendor application
#[derive(Debug, Clone)]
pub struct NewVendorApplication {
    pub company_id: CompanyId,
    pub status: VendorApplicationStatus,
}
