use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::round_to,
    daily_menu::entities::{DailyMenu, DailyMenuRow, MatchedDailyMenu, PortionSize},
    nutrition::entities::NutrientProfile,
};

/// Minimum share of a menu's items that must be detected.
pub const MENU_MATCH_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchDailyMenuInput {
    pub detected_labels: Vec<String>,
    pub estimated_calories: f64,
}

/// Partial nutrient values for one portion row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientChanges {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
}

impl NutrientChanges {
    pub fn apply_to(&self, profile: &NutrientProfile) -> NutrientProfile {
        NutrientProfile {
            calories: self.calories.unwrap_or(profile.calories),
            protein: self.protein.unwrap_or(profile.protein),
            carbohydrates: self.carbohydrates.unwrap_or(profile.carbohydrates),
            fat: self.fat.unwrap_or(profile.fat),
            fiber: self.fiber.unwrap_or(profile.fiber),
        }
    }

    pub fn values(&self) -> Vec<f64> {
        [
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fat,
            self.fiber,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Changes to a menu. Items and image apply to both portions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateDailyMenuInput {
    pub menu_items: Option<Vec<String>>,
    pub porsi_besar: Option<NutrientChanges>,
    pub porsi_kecil: Option<NutrientChanges>,
    pub image_url: Option<String>,
}

impl UpdateDailyMenuInput {
    pub fn is_empty(&self) -> bool {
        self.menu_items.is_none()
            && self.porsi_besar.is_none()
            && self.porsi_kecil.is_none()
            && self.image_url.is_none()
    }
}

/// Applies `input` to the stored rows of a single menu.
pub fn apply_menu_update(
    rows: Vec<DailyMenuRow>,
    input: &UpdateDailyMenuInput,
    updated_at: DateTime<Utc>,
) -> Vec<DailyMenuRow> {
    rows.into_iter()
        .map(|mut row| {
            if let Some(items) = &input.menu_items {
                row.menu_items = items.clone();
            }
            if let Some(image_url) = &input.image_url {
                row.image_url = Some(image_url.clone());
            }

            let changes = match row.portion_size {
                PortionSize::Large => input.porsi_besar,
                PortionSize::Small => input.porsi_kecil,
            };
            if let Some(changes) = changes {
                row.nutrients = changes.apply_to(&row.nutrients);
            }

            row.updated_at = updated_at;
            row
        })
        .collect()
}

pub fn normalize_menu_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Folds rows into menus, keeping the order in which names first appear.
pub fn group_daily_menus(rows: Vec<DailyMenuRow>) -> Vec<DailyMenu> {
    let mut menus: Vec<DailyMenu> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let index = *index_by_name.entry(row.menu_name.clone()).or_insert_with(|| {
            menus.push(DailyMenu {
                menu_name: row.menu_name.clone(),
                menu_items: row.menu_items.clone(),
                porsi_besar: None,
                porsi_kecil: None,
                image_url: None,
            });
            menus.len() - 1
        });

        let menu = &mut menus[index];
        if menu.image_url.is_none() {
            menu.image_url = row.image_url.clone();
        }

        match row.portion_size {
            PortionSize::Large => menu.porsi_besar = Some(row.nutrients),
            PortionSize::Small => menu.porsi_kecil = Some(row.nutrients),
        }
    }

    menus
}

/// Fraction of the menu's items present among the detected labels.
pub fn menu_match_score(menu_items: &[String], detected: &HashSet<String>) -> f64 {
    if menu_items.is_empty() {
        return 0.0;
    }

    let matched = menu_items
        .iter()
        .filter(|item| detected.contains(&normalize_menu_label(item)))
        .count();

    matched as f64 / menu_items.len() as f64
}

/// Portion whose calories are nearest to the estimate; ties go to the large one.
pub fn closest_portion(
    estimated_calories: f64,
    porsi_besar: &NutrientProfile,
    porsi_kecil: &NutrientProfile,
) -> PortionSize {
    let large_distance = (estimated_calories - porsi_besar.calories).abs();
    let small_distance = (estimated_calories - porsi_kecil.calories).abs();

    if large_distance <= small_distance {
        PortionSize::Large
    } else {
        PortionSize::Small
    }
}

/// Percentage deviation rounded to one decimal; zero for a zero-calorie portion.
pub fn calorie_deviation(estimated_calories: f64, portion_calories: f64) -> f64 {
    if portion_calories == 0.0 {
        return 0.0;
    }

    round_to(
        (estimated_calories - portion_calories) / portion_calories * 100.0,
        1,
    )
}

/// Picks the menu sharing the largest fraction of its items with the
/// detected labels. The first menu wins ties, incomplete menus are skipped,
/// and nothing is returned below `MENU_MATCH_THRESHOLD`.
pub fn find_best_menu_match(
    menus: &[DailyMenu],
    detected_labels: &[String],
    estimated_calories: f64,
) -> Option<MatchedDailyMenu> {
    let detected: HashSet<String> = detected_labels
        .iter()
        .map(|label| normalize_menu_label(label))
        .collect();

    let mut best: Option<(&DailyMenu, f64)> = None;

    for menu in menus.iter().filter(|menu| menu.is_complete()) {
        let score = menu_match_score(&menu.menu_items, &detected);
        let best_score = best.map(|(_, score)| score).unwrap_or(0.0);

        if score > best_score {
            best = Some((menu, score));
        }
    }

    let (menu, score) = best?;
    if score < MENU_MATCH_THRESHOLD {
        return None;
    }

    let porsi_besar = menu.porsi_besar?;
    let porsi_kecil = menu.porsi_kecil?;

    let portion = closest_portion(estimated_calories, &porsi_besar, &porsi_kecil);
    let portion_calories = match portion {
        PortionSize::Large => porsi_besar.calories,
        PortionSize::Small => porsi_kecil.calories,
    };

    Some(MatchedDailyMenu {
        menu_name: menu.menu_name.clone(),
        menu_items: menu.menu_items.clone(),
        match_score: score,
        porsi_besar,
        porsi_kecil,
        closest_portion: portion,
        closest_portion_label: portion.label().to_string(),
        calorie_deviation: calorie_deviation(estimated_calories, portion_calories),
    })
}
