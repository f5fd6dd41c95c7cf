use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "detections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub foodtray_count: i32,
    pub menu_count: i32,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbohydrates: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
    pub matched_menu_name: Option<String>,
    pub matched_portion: Option<String>,
    pub notes: Option<String>,
    pub detected_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detection_items::Entity")]
    DetectionItems,
}

impl Related<super::detection_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetectionItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
