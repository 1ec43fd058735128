use rowbind::{driver::sqlite::Sqlite, Mapper, TypeCache};
use tests::{
    models::{Tweet, TweetByUserId, User},
    setup,
};

use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn insert_with_insertable_fields() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let descriptor = mapper.register::<User>().unwrap();
    let fields: Vec<_> = descriptor.insertable().collect();
    let columns: Vec<_> = fields.iter().map(|f| f.column.as_str()).collect();
    let params: Vec<_> = fields.iter().map(|f| format!(":{}", f.name)).collect();

    assert_eq!(columns, ["name", "karma", "suspended"]);

    let query = format!(
        "insert into users ({}) values ({})",
        columns.join(", "),
        params.join(", ")
    );
    let new_user = User {
        name: "Carla".to_string(),
        karma: Some(3.0),
        suspended: true,
        ..User::default()
    };
    let inserted = mapper.execute(&mut conn, &query, &new_user).await.unwrap();
    assert_eq!(inserted, 1);

    let mut out = User::default();
    mapper
        .first(
            &mut conn,
            "select * from users where name=:name",
            &new_user,
            &mut out,
        )
        .await
        .unwrap();

    assert_eq!(out.id, 3);
    assert_eq!(out.karma, Some(3.0));
    assert!(out.suspended);
}

#[tokio::test]
async fn delete_reports_affected_rows() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let deleted = mapper
        .execute(
            &mut conn,
            "delete from tweets where user_id=:user_id",
            &TweetByUserId { user_id: 1 },
        )
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    let remaining: Vec<Tweet> = mapper
        .all(&mut conn, "select * from tweets", &())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn builder_with_shared_cache_and_url() {
    let cache = Arc::new(TypeCache::new());
    let mapper = Mapper::builder()
        .cache(cache.clone())
        .register::<User>()
        .register::<Tweet>()
        .build()
        .unwrap();

    assert_eq!(cache.len(), 2);

    let mut conn = Sqlite::new("sqlite::memory:").unwrap().connect().unwrap();
    conn.execute_batch("create table users (id integer primary key, name text)")
        .unwrap();

    let count = mapper
        .execute(
            &mut conn,
            "insert into users (id, name) values (:id, :name)",
            &User {
                id: 7,
                name: "Dana".to_string(),
                ..User::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(count, 1);

    let users: Vec<User> = mapper.all(&mut conn, "select * from users", &()).await.unwrap();
    assert_eq!(users[0].id, 7);
    assert_eq!(users[0].name, "Dana");
}
