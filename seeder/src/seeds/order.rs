use crate::profile::moment_within;
use crate::seed::{Outcome, SeedContext, SeedError, Seeder, SkipReason};
use chrono::Duration;
use db::models::{order, product, user};
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::prelude::Decimal;
use std::pin::Pin;

/// `price × quantity`, rounded to cents.
pub fn order_total(price: Decimal, quantity: i32) -> Decimal {
    (price * Decimal::from(quantity)).round_dp(2)
}

/// Places one order for a random user and product.
pub struct OrderSeeder;

impl Seeder for OrderSeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let user_ids = user::Model::all_ids(&ctx.db).await?;
            let Some(&user_id) = user_ids.choose(&mut ctx.rng) else {
                log::info!("no users available to place an order");
                return Ok(Outcome::Skipped(SkipReason::NoUsers));
            };

            let products = product::Model::all_prices(&ctx.db).await?;
            let Some(&(product_id, price)) = products.choose(&mut ctx.rng) else {
                log::info!("no products available to order");
                return Ok(Outcome::Skipped(SkipReason::NoProducts));
            };

            let quantity: i32 = ctx.rng.random_range(1..=5);
            let total_amount = order_total(price, quantity);
            let order_date = moment_within(&mut ctx.rng, Duration::days(365));

            order::Model::create(&ctx.db, user_id, product_id, quantity, order_date, total_amount).await?;

            log::info!(
                "order: user {user_id}, product {product_id}, {quantity} pcs, total {total_amount}"
            );
            Ok(Outcome::Inserted(1))
        })
    }
}
