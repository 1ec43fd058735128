use rowbind::Mapper;
use tests::{models::User, setup};

use pretty_assertions::assert_eq;

fn by_id(id: i64) -> User {
    User {
        id,
        ..User::default()
    }
}

#[tokio::test]
async fn first() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    mapper
        .first(&mut conn, "select * from users where id=:id", &by_id(1), &mut out)
        .await
        .unwrap();

    assert_eq!(
        out,
        User {
            id: 1,
            name: "Oliver".to_string(),
            karma: None,
            suspended: false,
        }
    );
}

#[tokio::test]
async fn first_with_projection() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    mapper
        .first(
            &mut conn,
            "select name from users where id=:id",
            &by_id(1),
            &mut out,
        )
        .await
        .unwrap();

    assert_eq!(out.id, 0);
    assert_eq!(out.name, "Oliver");
    assert_eq!(out.karma, None);
    assert!(!out.suspended);
}

#[tokio::test]
async fn first_sends_positional_placeholders() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    mapper
        .first(&mut conn, "select * from users where id=:id", &by_id(2), &mut out)
        .await
        .unwrap();

    let statements = conn.statements();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].sql, "select * from users where id=?1");
    assert_eq!(statements[0].params, [rowbind::Value::I64(2)]);
    assert_eq!(out.name, "Sandra");
}

#[tokio::test]
async fn first_without_rows() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let before = User {
        id: 42,
        name: "Untouched".to_string(),
        karma: Some(1.5),
        suspended: true,
    };
    let mut out = before.clone();

    let err = mapper
        .first(&mut conn, "select * from users where id=:id", &by_id(99), &mut out)
        .await
        .unwrap_err();

    assert!(err.is_no_rows());
    assert_eq!(out, before);
}

#[tokio::test]
async fn first_unknown_parameter() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    let err = mapper
        .first(
            &mut conn,
            "select * from users where id=:Bogus",
            &by_id(1),
            &mut out,
        )
        .await
        .unwrap_err();

    assert!(err.is_unknown_parameter());
    assert_eq!(err.to_string(), "unknown parameter `:Bogus` for type `User`");
    assert!(conn.statements().is_empty());
    assert_eq!(out, User::default());
}

#[tokio::test]
async fn first_missing_binding() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    let err = mapper
        .first(&mut conn, "select * from users where id=:id", &(), &mut out)
        .await
        .unwrap_err();

    assert!(err.is_missing_binding());
    assert!(conn.statements().is_empty());
}

#[tokio::test]
async fn first_reads_decimal_karma() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let update = User {
        id: 1,
        karma: Some(12.5),
        ..User::default()
    };
    mapper
        .execute(&mut conn, "update users set karma=:karma where id=:id", &update)
        .await
        .unwrap();

    let mut out = User::default();
    mapper
        .first(&mut conn, "select * from users where id=:id", &by_id(1), &mut out)
        .await
        .unwrap();

    assert_eq!(out.karma, Some(12.5));
}

#[tokio::test]
async fn first_conversion_failure() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    let err = mapper
        .first(
            &mut conn,
            "select name as id from users where id=:id",
            &by_id(1),
            &mut out,
        )
        .await
        .unwrap_err();

    assert!(err.is_conversion());
    assert_eq!(err.to_string(), "cannot convert String to i64");
    assert_eq!(out, User::default());
}

#[tokio::test]
async fn first_conversion_failure_keeps_previous_values() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let before = User {
        id: 9,
        name: "Before".to_string(),
        karma: Some(0.5),
        suspended: true,
    };
    let mut out = before.clone();
    let err = mapper
        .first(
            &mut conn,
            "select name, name as id from users where id=:id",
            &by_id(1),
            &mut out,
        )
        .await
        .unwrap_err();

    assert!(err.is_conversion());
    assert_eq!(out, before);
}

#[tokio::test]
async fn first_invalid_utf8_text_is_a_conversion_error() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    let err = mapper
        .first(
            &mut conn,
            "select cast(x'ff' as text) as name",
            &(),
            &mut out,
        )
        .await
        .unwrap_err();

    assert!(err.is_conversion());
    assert_eq!(err.to_string(), "cannot convert Bytes to String");
}

#[tokio::test]
async fn first_driver_error() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let mut out = User::default();
    let err = mapper
        .first(&mut conn, "select * from missing", &(), &mut out)
        .await
        .unwrap_err();

    assert!(err.is_driver());
    assert!(err.to_string().starts_with("failed to execute query: "));
}
