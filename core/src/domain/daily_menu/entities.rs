use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::nutrition::entities::NutrientProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PortionSize {
    #[serde(rename = "porsi_besar")]
    Large,
    #[serde(rename = "porsi_kecil")]
    Small,
}

impl PortionSize {
    pub fn as_str(&self) -> &str {
        match self {
            PortionSize::Large => "porsi_besar",
            PortionSize::Small => "porsi_kecil",
        }
    }

    /// Display label shown to staff.
    pub fn label(&self) -> &str {
        match self {
            PortionSize::Large => "Porsi Besar",
            PortionSize::Small => "Porsi Kecil",
        }
    }
}

impl TryFrom<&str> for PortionSize {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "porsi_besar" => Ok(PortionSize::Large),
            "porsi_kecil" => Ok(PortionSize::Small),
            other => Err(format!("unknown portion size: {}", other)),
        }
    }
}

/// One stored row: a menu in a single portion size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMenuRow {
    pub id: Uuid,
    pub menu_name: String,
    pub portion_size: PortionSize,
    pub menu_items: Vec<String>,
    pub nutrients: NutrientProfile,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rows sharing a menu name, folded together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMenu {
    pub menu_name: String,
    pub menu_items: Vec<String>,
    pub porsi_besar: Option<NutrientProfile>,
    pub porsi_kecil: Option<NutrientProfile>,
    pub image_url: Option<String>,
}

impl DailyMenu {
    /// Only menus with both portions can be matched.
    pub fn is_complete(&self) -> bool {
        self.porsi_besar.is_some() && self.porsi_kecil.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchedDailyMenu {
    pub menu_name: String,
    pub menu_items: Vec<String>,
    pub match_score: f64,
    pub porsi_besar: NutrientProfile,
    pub porsi_kecil: NutrientProfile,
    pub closest_portion: PortionSize,
    pub closest_portion_label: String,
    /// Signed percentage of estimated calories above (or below) the closest portion.
    pub calorie_deviation: f64,
}
