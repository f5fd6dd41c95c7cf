use super::handlers::{
    create_food_nutrition::{__path_create_food_nutrition, create_food_nutrition},
    delete_food_nutrition::{__path_delete_food_nutrition, delete_food_nutrition},
    get_food_nutrition::{__path_get_food_nutrition, get_food_nutrition},
    list_food_nutrition::{__path_list_food_nutrition, list_food_nutrition},
    update_food_nutrition::{__path_update_food_nutrition, update_food_nutrition},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    list_food_nutrition,
    create_food_nutrition,
    get_food_nutrition,
    update_food_nutrition,
    delete_food_nutrition
))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition", state.args.server.root_path),
            get(list_food_nutrition).post(create_food_nutrition),
        )
        .route(
            &format!("{}/nutrition/{{id}}", state.args.server.root_path),
            get(get_food_nutrition)
                .put(update_food_nutrition)
                .delete(delete_food_nutrition),
        )
}
