use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::PaginatorTrait;

/// A product a user saved for later, in the `wishlist` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub added_at: DateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        product_id: i32,
        added_at: DateTime,
        notes: Option<String>,
    ) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            product_id: Set(product_id),
            added_at: Set(added_at),
            notes: Set(notes),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_user_and_product<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProductId.eq(product_id))
            .one(db)
            .await
    }

    pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }
}
