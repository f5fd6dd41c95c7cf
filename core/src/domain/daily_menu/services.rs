use tracing::{debug, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    daily_menu::{
        entities::{DailyMenu, MatchedDailyMenu},
        ports::{DailyMenuRepository, DailyMenuService},
        value_objects::{
            UpdateDailyMenuInput, apply_menu_update, find_best_menu_match, group_daily_menus,
        },
    },
    dashboard::ports::DashboardStatsRepository,
    detection::ports::{DetectionRepository, FoodDetector},
    health::ports::HealthCheckRepository,
    nutrition::{ports::FoodNutritionRepository, value_objects::validate_nutrient_amounts},
};

/// Trims item names and rejects blank ones or invalid nutrient values.
fn validate_menu_update(input: &mut UpdateDailyMenuInput) -> Result<(), CoreError> {
    if input.is_empty() {
        return Err(CoreError::Validation("no changes supplied".to_string()));
    }

    if let Some(items) = input.menu_items.as_mut() {
        for item in items.iter_mut() {
            *item = item.trim().to_string();
        }
        if items.iter().any(String::is_empty) {
            return Err(CoreError::Validation(
                "menu items must not be blank".to_string(),
            ));
        }
    }

    for changes in [input.porsi_besar, input.porsi_kecil].into_iter().flatten() {
        if !validate_nutrient_amounts(&changes.values()) {
            return Err(CoreError::Validation(
                "nutrient values must be non-negative numbers".to_string(),
            ));
        }
    }

    Ok(())
}

/// Loads the menus and finds the best match for the detected labels.
///
/// `Ok(None)` means no menu reached the threshold; a repository failure is
/// returned as an error.
pub async fn match_daily_menu<DM>(
    repository: &DM,
    detected_labels: &[String],
    estimated_calories: f64,
) -> Result<Option<MatchedDailyMenu>, CoreError>
where
    DM: DailyMenuRepository,
{
    let menus = group_daily_menus(repository.fetch_all().await?);
    let matched = find_best_menu_match(&menus, detected_labels, estimated_calories);

    match &matched {
        Some(menu) => debug!(
            menu_name = %menu.menu_name,
            score = menu.match_score,
            portion = menu.closest_portion.as_str(),
            "daily menu matched"
        ),
        None => debug!(menus = menus.len(), "no daily menu matched"),
    }

    Ok(matched)
}

impl<FN, DM, D, DT, HC, DS> DailyMenuService for Service<FN, DM, D, DT, HC, DS>
where
    FN: FoodNutritionRepository,
    DM: DailyMenuRepository,
    D: DetectionRepository,
    DT: FoodDetector,
    HC: HealthCheckRepository,
    DS: DashboardStatsRepository,
{
    async fn list_daily_menus(&self) -> Result<Vec<DailyMenu>, CoreError> {
        let rows = self.daily_menu_repository.fetch_all().await?;
        Ok(group_daily_menus(rows))
    }

    #[instrument(skip(self, detected_labels), fields(labels = detected_labels.len()))]
    async fn match_daily_menu(
        &self,
        detected_labels: Vec<String>,
        estimated_calories: f64,
    ) -> Result<Option<MatchedDailyMenu>, CoreError> {
        if !estimated_calories.is_finite() || estimated_calories < 0.0 {
            return Err(CoreError::Validation(
                "estimated_calories must be a non-negative number".to_string(),
            ));
        }

        match_daily_menu(
            &self.daily_menu_repository,
            &detected_labels,
            estimated_calories,
        )
        .await
    }

    #[instrument(skip(self, input))]
    async fn update_daily_menu(
        &self,
        menu_name: String,
        mut input: UpdateDailyMenuInput,
    ) -> Result<DailyMenu, CoreError> {
        validate_menu_update(&mut input)?;

        let rows = self.daily_menu_repository.find_by_name(&menu_name).await?;
        if rows.is_empty() {
            return Err(CoreError::NotFound);
        }

        let (now, _) = generate_timestamp();
        let updated = self
            .daily_menu_repository
            .update_rows(apply_menu_update(rows, &input, now))
            .await?;

        info!(menu_name = %menu_name, rows = updated.len(), "daily menu updated");

        group_daily_menus(updated)
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        daily_menu::value_objects::NutrientChanges,
        test_support::{
            InMemoryDailyMenuRepository, InMemoryFoodNutritionRepository, TestService, menu_rows,
            service_with,
        },
    };

    fn menu_service() -> TestService {
        service_with(
            InMemoryFoodNutritionRepository::with_foods(vec![]),
            InMemoryDailyMenuRepository::with_rows(menu_rows(
                "Menu A",
                &["Nasi", "Tahu"],
                500.0,
                300.0,
            )),
            Ok(Default::default()),
        )
    }

    #[tokio::test]
    async fn test_match_reads_menus_from_repository() {
        let repository =
            InMemoryDailyMenuRepository::with_rows(menu_rows("Menu A", &["Nasi", "Tahu"], 500.0, 300.0));

        let matched = match_daily_menu(&repository, &["nasi".to_string()], 480.0)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(matched.menu_name, "Menu A");
        assert_eq!(matched.calorie_deviation, -4.0);
    }

    #[tokio::test]
    async fn test_no_menus_is_no_match() {
        let repository = InMemoryDailyMenuRepository::with_rows(vec![]);

        let matched = match_daily_menu(&repository, &["nasi".to_string()], 480.0)
            .await
            .unwrap();

        assert_eq!(matched, None);
    }

    #[tokio::test]
    async fn test_repository_failure_is_not_a_miss() {
        let repository = InMemoryDailyMenuRepository::failing();

        let result = match_daily_menu(&repository, &["nasi".to_string()], 480.0).await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_update_menu_persists_changes() {
        let service = menu_service();

        let updated = service
            .update_daily_menu(
                "Menu A".to_string(),
                UpdateDailyMenuInput {
                    menu_items: Some(vec![" Nasi ".to_string(), "Tempe".to_string()]),
                    porsi_besar: Some(NutrientChanges {
                        calories: Some(550.0),
                        ..Default::default()
                    }),
                    image_url: Some("https://cdn.example.test/menu-a.jpg".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.menu_items, vec!["Nasi", "Tempe"]);
        assert_eq!(updated.porsi_besar.unwrap().calories, 550.0);
        assert_eq!(updated.porsi_kecil.unwrap().calories, 300.0);

        let menus = service.list_daily_menus().await.unwrap();
        assert_eq!(menus, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_menu_is_not_found() {
        let result = menu_service()
            .update_daily_menu(
                "Menu Z".to_string(),
                UpdateDailyMenuInput {
                    image_url: Some("menu.jpg".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input() {
        let service = menu_service();

        let empty = service
            .update_daily_menu("Menu A".to_string(), UpdateDailyMenuInput::default())
            .await;
        let blank_item = service
            .update_daily_menu(
                "Menu A".to_string(),
                UpdateDailyMenuInput {
                    menu_items: Some(vec!["  ".to_string()]),
                    ..Default::default()
                },
            )
            .await;
        let negative = service
            .update_daily_menu(
                "Menu A".to_string(),
                UpdateDailyMenuInput {
                    porsi_kecil: Some(NutrientChanges {
                        fat: Some(-1.0),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(empty, Err(CoreError::Validation(_))));
        assert!(matches!(blank_item, Err(CoreError::Validation(_))));
        assert!(matches!(negative, Err(CoreError::Validation(_))));
    }
}
