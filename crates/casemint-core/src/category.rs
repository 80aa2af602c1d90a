use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Legal-process classification selecting which case sub-type values and
/// fixed fields a dataset row receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "post_charge")]
    PostCharge,
    #[serde(rename = "postcharge_cfs")]
    PostChargeCfs,
    #[serde(rename = "pre_charge")]
    PreCharge,
}

impl Category {
    /// Every category, in dataset emission order.
    pub const ALL: [Category; 3] = [
        Category::PostCharge,
        Category::PostChargeCfs,
        Category::PreCharge,
    ];

    /// Canonical identifier used in file names and reports.
    pub fn key(&self) -> &'static str {
        match self {
            Category::PostCharge => "post_charge",
            Category::PostChargeCfs => "postcharge_cfs",
            Category::PreCharge => "pre_charge",
        }
    }

    /// Case sub-type values a record of this category may carry.
    pub fn case_subtypes(&self) -> &'static [&'static str] {
        match self {
            Category::PostCharge => &["Criminal", "Civil"],
            Category::PostChargeCfs => &["Family", "Housing", "Immigration"],
            Category::PreCharge => &[
                "Traffic",
                "Environmental",
                "Public Order",
                "Health and Safety",
            ],
        }
    }

    /// Fixed charge type attached to every record, where the category
    /// defines one. Pre-charge datasets carry no charge type column.
    pub fn charge_type(&self) -> Option<&'static str> {
        match self {
            Category::PostCharge => Some("postcharge"),
            Category::PostChargeCfs => Some("postcharge_cfs"),
            Category::PreCharge => None,
        }
    }

    /// File stem for the category's CSV dataset.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::PostCharge => "post_charge_data",
            Category::PostChargeCfs => "postcharge_cfs_data",
            Category::PreCharge => "pre_charge_data",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "post_charge" | "post-charge" => Ok(Category::PostCharge),
            "postcharge_cfs" | "post-charge-with-case-file-service" => Ok(Category::PostChargeCfs),
            "pre_charge" | "pre-charge" => Ok(Category::PreCharge),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
