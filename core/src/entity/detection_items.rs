use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "detection_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub detection_id: Uuid,
    pub item_index: i32,
    pub food_nutrition_id: Option<Uuid>,
    pub food_name: String,
    pub matched_food_name: Option<String>,
    pub confidence: f64,
    pub estimated_weight_gram: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub bbox_x1: f64,
    pub bbox_y1: f64,
    pub bbox_x2: f64,
    pub bbox_y2: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::detections::Entity",
        from = "Column::DetectionId",
        to = "super::detections::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Detections,
    #[sea_orm(
        belongs_to = "super::food_nutrition::Entity",
        from = "Column::FoodNutritionId",
        to = "super::food_nutrition::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FoodNutrition,
}

impl Related<super::detections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Detections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
