use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One synthetic case row.
///
/// Fields are generated independently; there are no cross-record
/// invariants. `charge_type` is present only for categories that define a
/// fixed charge type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub month: String,
    pub year: i32,
    pub id: u32,
    pub offence: String,
    pub area: String,
    pub court_type: String,
    pub outcome: String,
    pub gender: String,
    pub age: u32,
    pub ethnicity: String,
    pub case_subtype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<String>,
}

/// Ordered records sharing one category's column set.
///
/// Built fully in memory per invocation, written once as CSV, then dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub category: Category,
    pub records: Vec<CaseRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
