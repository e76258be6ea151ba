use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QuerySelect};

/// A node of the two-level category taxonomy in the `categories` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `None` for top-level categories.
    pub parent_category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentCategoryId",
        to = "Column::Id"
    )]
    Parent,

    #[sea_orm(has_many = "super::product::Entity")]
    Product,
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
        name: &str,
        parent_category_id: Option<i32>,
    ) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            name: Set(name.to_owned()),
            parent_category_id: Set(parent_category_id),
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
}
