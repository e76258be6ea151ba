use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QuerySelect};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub rating: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        name: &str,
        description: &str,
        category_id: i32,
        price: Decimal,
        rating: Decimal,
    ) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            category_id: Set(category_id),
            price: Set(price),
            rating: Set(rating),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn all_ids<C: ConnectionTrait>(db: &C) -> Result<Vec<i32>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Id)
            .into_tuple()
            .all(db)
            .await
    }

    /// `(id, price)` for every product, the inputs an order needs.
    pub async fn all_prices<C: ConnectionTrait>(db: &C) -> Result<Vec<(i32, Decimal)>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Price)
            .into_tuple()
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_and_list_prices() {
        let db = setup_test_db().await;
        let category = category::Model::create(&db, "Lighting", None).await.unwrap();

        let product = Model::create(
            &db,
            "Desk Lamp 123",
            "A lamp for a desk.",
            category.id,
            Decimal::new(129_99, 2),
            Decimal::new(4_50, 2),
        )
        .await
        .unwrap();

        assert_eq!(product.category_id, category.id);
        assert_eq!(Model::count(&db).await.unwrap(), 1);
        assert_eq!(Model::all_ids(&db).await.unwrap(), vec![product.id]);

        let prices = Model::all_prices(&db).await.unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].0, product.id);
        assert_eq!(prices[0].1.round_dp(2), Decimal::new(129_99, 2));
    }
}
