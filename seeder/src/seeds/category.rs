use crate::seed::{Outcome, SeedContext, SeedError, Seeder, SkipReason};
use db::models::category;
use sea_orm::TransactionTrait;
use std::collections::HashMap;
use std::pin::Pin;

/// One entry of the fixed taxonomy. `parent` names the `key` of an entry
/// that appears earlier in the list.
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub key: &'static str,
    pub name: &'static str,
    pub parent: Option<&'static str>,
}

const fn top(key: &'static str, name: &'static str) -> CategorySeed {
    CategorySeed { key, name, parent: None }
}

const fn child(key: &'static str, name: &'static str, parent: &'static str) -> CategorySeed {
    CategorySeed { key, name, parent: Some(parent) }
}

pub const CATEGORIES: &[CategorySeed] = &[
    top("smartphones", "Smartphones"),
    top("laptops", "Laptops"),
    top("televisions", "Televisions"),
    top("headphones", "Headphones"),
    top("consoles", "Game Consoles"),
    top("refrigerators", "Refrigerators"),
    top("washing_machines", "Washing Machines"),
    top("vacuum_cleaners", "Vacuum Cleaners"),
    top("kitchen_appliances", "Kitchen Appliances"),
    top("mens_clothing", "Men's Clothing"),
    top("womens_clothing", "Women's Clothing"),
    top("kids_clothing", "Children's Clothing"),
    top("footwear", "Footwear"),
    top("furniture", "Furniture"),
    top("lighting", "Lighting"),
    top("textiles", "Home Textiles"),
    top("tools", "Tools"),
    child("android_phones", "Android Smartphones", "smartphones"),
    child("iphone", "iPhone", "smartphones"),
    child("gaming_laptops", "Gaming Laptops", "laptops"),
    child("ultrabooks", "Ultrabooks", "laptops"),
    child("tv_4k", "4K Televisions", "televisions"),
    child("wireless_headphones", "Wireless Headphones", "headphones"),
];

/// Inserts the taxonomy once, only into an empty `categories` table.
pub struct CategorySeeder {
    taxonomy: &'static [CategorySeed],
}

impl CategorySeeder {
    pub fn new(taxonomy: &'static [CategorySeed]) -> Self {
        Self { taxonomy }
    }
}

impl Default for CategorySeeder {
    fn default() -> Self {
        Self::new(CATEGORIES)
    }
}

impl Seeder for CategorySeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            if category::Model::count(&ctx.db).await? > 0 {
                log::info!("categories already seeded");
                return Ok(Outcome::Skipped(SkipReason::AlreadySeeded));
            }

            let txn = ctx.db.begin().await?;
            let mut ids: HashMap<&'static str, i32> = HashMap::new();

            for entry in self.taxonomy {
                let parent_id = match entry.parent {
                    Some(parent) => Some(*ids.get(parent).ok_or(SeedError::UnknownParent {
                        category: entry.key,
                        parent,
                    })?),
                    None => None,
                };

                let model = category::Model::create(&txn, entry.name, parent_id).await?;
                ids.insert(entry.key, model.id);
            }

            txn.commit().await?;
            log::info!("created {} categories", self.taxonomy.len());

            Ok(Outcome::Inserted(self.taxonomy.len() as u64))
        })
    }
}
