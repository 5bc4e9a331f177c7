use sea_orm::entity::prelude::*;

/// Which catalogue table a favorite's `target_id` points into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TargetKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "person")]
    Person,
    #[sea_orm(string_value = "starship")]
    Starship,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Person => "person",
            Self::Starship => "starship",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's favorite catalogue entry.
///
/// `(user_id, kind, target_id)` is unique; the index is created by the
/// `m20250601_000005_favorite` migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: TargetKind,
    pub target_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
