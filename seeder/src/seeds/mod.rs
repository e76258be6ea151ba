pub mod activity;
pub mod category;
pub mod order;
pub mod product;
pub mod user;
pub mod wishlist;

use crate::seed::{SeedContext, SeedError, Seeder, run_seeder};
use activity::ActivitySeeder;
use category::CategorySeeder;
use common::config::GenerationConfig;
use product::ProductSeeder;
use std::time::Duration;
use user::UserBatchSeeder;

/// Runs every phase in order, stopping at the first failure.
pub async fn seed_all(ctx: &mut SeedContext, generation: &GenerationConfig) -> Result<(), SeedError> {
    for (seeder, name) in [
        (Box::new(CategorySeeder::default()) as Box<dyn Seeder + Send + Sync>, "Categories"),
        (Box::new(ProductSeeder { target: generation.product_count }), "Products"),
        (Box::new(UserBatchSeeder { count: generation.initial_users }), "Users"),
        (
            Box::new(ActivitySeeder {
                iterations: generation.iterations,
                delay: Duration::from_millis(generation.delay_ms),
            }),
            "Activity",
        ),
    ] {
        run_seeder(&*seeder, name, ctx).await?;
    }

    Ok(())
}
