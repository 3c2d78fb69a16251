#![allow(dead_code)]

pub mod entities;

use entities::{member, team};
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, Schema, Select,
};
use seapage::filter::{and_all, goe, loe, text_eq};
use seapage::{Projection, QueryError};

/// Flat record projected from the member/team left join. Both entities carry
/// an `id` and a name-like column, so every column is explicitly aliased.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct MemberTeamRecord {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Sparse search input: every field is independently optional and absence
/// means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

pub fn member_condition(cond: &MemberSearchCondition) -> sea_orm::Condition {
    and_all([
        text_eq(member::Column::Username, cond.username.as_deref()),
        text_eq(team::Column::Name, cond.team_name.as_deref()),
        goe(member::Column::Age, cond.age_goe),
        loe(member::Column::Age, cond.age_loe),
    ])
}

/// Base select shared by content and count paths: left join (so members
/// without a team survive), aliased projection, composed condition.
pub fn member_with_team(
    cond: &MemberSearchCondition,
) -> Result<Select<member::Entity>, QueryError> {
    member_select(member_condition(cond))
}

/// Same base select with an arbitrary pre-composed condition.
pub fn member_select(
    condition: sea_orm::Condition,
) -> Result<Select<member::Entity>, QueryError> {
    let base = member::Entity::find()
        .left_join(team::Entity)
        .filter(condition);
    Projection::new()
        .column_as(member::Column::Id, "member_id")
        .column_as(member::Column::Username, "username")
        .column_as(member::Column::Age, "age")
        .column_as(team::Column::Id, "team_id")
        .column_as(team::Column::Name, "team_name")
        .apply(base)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    init_tracing();
    let db = Database::connect("sqlite::memory:").await?;
    let schema = Schema::new(DbBackend::Sqlite);
    let backend = db.get_database_backend();
    db.execute(backend.build(&schema.create_table_from_entity(team::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(member::Entity)))
        .await?;
    Ok(db)
}

/// Two teams with two members each, ages 10 through 40.
pub async fn seed_members(db: &DatabaseConnection) -> Result<(), DbErr> {
    let team_a = team::ActiveModel {
        name: Set("teamA".to_owned()),
        ..Default::default()
    };
    let team_a = team::Entity::insert(team_a).exec(db).await?.last_insert_id;
    let team_b = team::ActiveModel {
        name: Set("teamB".to_owned()),
        ..Default::default()
    };
    let team_b = team::Entity::insert(team_b).exec(db).await?.last_insert_id;

    for (name, age, team_id) in [
        ("member1", 10, team_a),
        ("member2", 20, team_a),
        ("member3", 30, team_b),
        ("member4", 40, team_b),
    ] {
        insert_member(db, Some(name), age, Some(team_id)).await?;
    }
    Ok(())
}

pub async fn insert_member(
    db: &DatabaseConnection,
    username: Option<&str>,
    age: i32,
    team_id: Option<i64>,
) -> Result<i64, DbErr> {
    let model = member::ActiveModel {
        username: Set(username.map(str::to_owned)),
        age: Set(age),
        team_id: Set(team_id),
        ..Default::default()
    };
    Ok(member::Entity::insert(model).exec(db).await?.last_insert_id)
}
