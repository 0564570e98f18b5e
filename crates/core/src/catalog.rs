//! Built-in Vietnamese food reference catalog
//!
//! The static list seeded into the `foods` collection. Both the seed CLI and
//! the integration tests consume this one copy, so the stored reference data
//! and the expectations against it cannot drift apart.

use crate::model::NutritionRecord;

/// Number of records in the built-in catalog.
pub const SEED_FOOD_COUNT: usize = 28;

/// The built-in seed list. Ordered; ids are unique.
pub fn seed_foods() -> Vec<NutritionRecord> {
    vec![
        NutritionRecord::new("pho", "Phở bò", 120.0, 7.0, 10.0, 4.0).with_tags(["soup", "beef"]),
        NutritionRecord::new("buncha", "Bún chả", 210.0, 10.0, 20.0, 10.0).with_tags(["grill"]),
        NutritionRecord::new("banhmi", "Bánh mì", 260.0, 8.0, 45.0, 6.0).with_tags(["bread"]),
        NutritionRecord::new("comtam", "Cơm tấm", 200.0, 7.0, 40.0, 3.0).with_tags(["rice"]),
        NutritionRecord::new("goicuon", "Gỏi cuốn", 95.0, 3.0, 12.0, 2.0).with_tags(["fresh"]),
        NutritionRecord::new("bunbo", "Bún bò Huế", 150.0, 8.0, 18.0, 5.0).with_tags(["soup"]),
        NutritionRecord::new("chaoluc", "Cháo lòng", 85.0, 6.0, 12.0, 1.0).with_tags(["porridge"]),
        NutritionRecord::new("ca", "Cá kho", 180.0, 20.0, 0.0, 10.0).with_tags(["fish"]),
        NutritionRecord::new("ga", "Gà luộc", 165.0, 31.0, 0.0, 4.0).with_tags(["chicken"]),
        NutritionRecord::new("cha", "Chả giò", 250.0, 6.0, 30.0, 10.0).with_tags(["fried"]),
        NutritionRecord::new("xoi", "Xôi", 200.0, 5.0, 45.0, 2.0).with_tags(["rice"]),
        NutritionRecord::new("bunthitnuong", "Bún thịt nướng", 230.0, 9.0, 28.0, 8.0)
            .with_tags(["grill"]),
        NutritionRecord::new("canh", "Canh chua", 40.0, 2.0, 6.0, 1.0).with_tags(["soup"]),
        NutritionRecord::new("nem", "Nem rán", 240.0, 7.0, 28.0, 9.0).with_tags(["fried"]),
        NutritionRecord::new("bot", "Bột chiên", 260.0, 6.0, 33.0, 11.0).with_tags(["street"]),
        NutritionRecord::new("che", "Chè", 150.0, 2.0, 30.0, 2.0).with_tags(["dessert"]),
        NutritionRecord::new("banhcuon", "Bánh cuốn", 140.0, 4.0, 22.0, 3.0).with_tags(["rice"]),
        NutritionRecord::new("banhxeo", "Bánh xèo", 270.0, 8.0, 28.0, 12.0).with_tags(["pan"]),
        NutritionRecord::new("rau", "Rau luộc", 25.0, 2.0, 5.0, 0.0).with_tags(["veg"]),
        NutritionRecord::new("mut", "Mứt", 300.0, 0.0, 75.0, 0.0).with_tags(["sweet"]),
        NutritionRecord::new("sua", "Sữa chua", 60.0, 3.0, 8.0, 1.0).with_tags(["dairy"]),
        NutritionRecord::new("thitbo", "Thịt bò", 250.0, 26.0, 0.0, 15.0).with_tags(["beef"]),
        NutritionRecord::new("thitheo", "Thịt heo", 242.0, 25.0, 0.0, 14.0).with_tags(["pork"]),
        NutritionRecord::new("dua", "Dưa leo", 15.0, 0.7, 3.0, 0.0).with_tags(["veg"]),
        NutritionRecord::new("trung", "Trứng luộc", 155.0, 13.0, 1.0, 11.0).with_tags(["egg"]),
        NutritionRecord::new("sushi", "Sushi (viet style)", 130.0, 5.0, 20.0, 2.0)
            .with_tags(["rice"]),
        NutritionRecord::new("muc", "Mực nướng", 95.0, 15.0, 1.0, 2.0).with_tags(["seafood"]),
        NutritionRecord::new("tom", "Tôm", 99.0, 24.0, 0.0, 0.3).with_tags(["seafood"]),
    ]
}
